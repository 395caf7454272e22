use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::model::SortKey;
use crate::registry::BookRegistry;
use crate::store::DataStore;

use super::helpers::{logged, persist};

/// Lists one book, optionally re-ordering it first.
///
/// A recognised sort key re-orders the book itself and the new order is saved.
/// An unrecognised key leaves everything as it was and adds a warning.
pub fn run<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    book: &str,
    sort_by: Option<&str>,
) -> Result<CmdResult> {
    let mut messages = Vec::new();
    let key = match sort_by.map(str::parse::<SortKey>) {
        Some(Ok(key)) => Some(key),
        Some(Err(e)) => {
            log.error(&e.to_string());
            messages.push(CmdMessage::warning(format!(
                "{}; showing current order",
                e
            )));
            None
        }
        None => None,
    };

    let contacts = logged(log, registry.select_mut(book))?;
    let listed = contacts.list(key).to_vec();

    if let Some(key) = key {
        log.info(&format!("Address book {} sorted by {}", book, key));
        persist(store, log, registry)?;
    }

    let mut result = CmdResult::default().with_listed_contacts(listed);
    if result.listed_contacts.is_empty() {
        result.add_message(CmdMessage::info(format!("No contacts in {}.", book)));
    }
    for message in messages {
        result.add_message(message);
    }
    Ok(result)
}
