use crate::commands::CmdResult;
use crate::error::{AddressBookError, Result};
use crate::events::EventLog;
use crate::registry::BookRegistry;

use super::helpers::logged;

pub fn run<L: EventLog>(
    registry: &BookRegistry,
    log: &L,
    book: &str,
    full_name: &str,
) -> Result<CmdResult> {
    let contacts = logged(log, registry.select(book))?;
    let contact = logged(
        log,
        contacts
            .get(full_name)
            .cloned()
            .ok_or_else(|| AddressBookError::ContactNotFound(full_name.to_string())),
    )?;
    Ok(CmdResult::default().with_listed_contacts(vec![contact]))
}
