use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::registry::BookRegistry;
use crate::store::DataStore;

use super::helpers::{logged, persist};

pub fn run<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    book: &str,
    full_name: &str,
) -> Result<CmdResult> {
    let contacts = logged(log, registry.select_mut(book))?;
    let removed = logged(log, contacts.delete(full_name))?;
    log.info(&format!("Contact deleted from {}: {}", book, full_name));
    persist(store, log, registry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact deleted: {}",
        full_name
    )));
    Ok(result.with_affected_contacts(vec![removed]))
}
