use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::model::Contact;
use crate::registry::BookRegistry;
use crate::store::DataStore;

use super::helpers::{logged, persist};

pub fn run<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    book: &str,
    contact: Contact,
) -> Result<CmdResult> {
    let contacts = logged(log, registry.select_mut(book))?;
    logged(log, contacts.add(contact.clone()))?;
    log.info(&format!("Contact added to {}: {}", book, contact));
    persist(store, log, registry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact added: {}",
        contact.full_name()
    )));
    Ok(result.with_affected_contacts(vec![contact]))
}
