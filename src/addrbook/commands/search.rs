use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::query;
use crate::registry::BookRegistry;

use super::helpers::logged;

pub fn by_city<L: EventLog>(
    registry: &BookRegistry,
    log: &L,
    book: &str,
    city: &str,
) -> Result<CmdResult> {
    let contacts = logged(log, registry.select(book))?;
    let found: Vec<_> = query::find_by_city(contacts, city)
        .into_iter()
        .cloned()
        .collect();

    let mut result = CmdResult::default();
    if found.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts in {} live in {}.",
            book, city
        )));
    }
    Ok(result.with_listed_contacts(found))
}

pub fn by_state<L: EventLog>(
    registry: &BookRegistry,
    log: &L,
    book: &str,
    state: &str,
) -> Result<CmdResult> {
    let contacts = logged(log, registry.select(book))?;
    let groups = query::group_by_state(contacts, state);

    let mut result = CmdResult::default();
    if groups.is_empty() {
        result.add_message(CmdMessage::info(format!(
            "No contacts in {} live in {}.",
            book, state
        )));
    }
    Ok(result.with_groups(groups))
}
