use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::registry::BookRegistry;
use crate::store::DataStore;

use super::helpers::{logged, persist};

pub fn create<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    name: &str,
) -> Result<CmdResult> {
    logged(log, registry.create(name))?;
    log.info(&format!("Address book created: {}", name));
    persist(store, log, registry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Address book created: {}",
        name
    )));
    Ok(result)
}

pub fn remove<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    name: &str,
) -> Result<CmdResult> {
    let removed = logged(log, registry.delete(name))?;
    log.info(&format!(
        "Address book deleted: {} ({} contacts)",
        name,
        removed.len()
    ));
    persist(store, log, registry)?;

    let mut result = CmdResult::default().with_affected_contacts(removed.contacts().to_vec());
    result.add_message(CmdMessage::success(format!(
        "Address book deleted: {}",
        name
    )));
    Ok(result)
}

pub fn list(registry: &BookRegistry) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_books(registry.list_all());
    if registry.is_empty() {
        result.add_message(CmdMessage::info("No address books yet."));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::events::RecordingLog;
    use crate::store::memory::fixtures::{asha, StoreFixture};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn create_persists_and_logs() {
        let mut registry = BookRegistry::new();
        let mut store = InMemoryStore::new();
        let log = RecordingLog::new();

        create(&mut registry, &mut store, &log, "Work").unwrap();

        assert!(store.load().unwrap().contains("Work"));
        assert_eq!(log.infos(), vec!["Address book created: Work"]);
    }

    #[test]
    fn duplicate_create_is_logged_and_not_saved() {
        let mut registry = BookRegistry::new();
        let mut store = InMemoryStore::new();
        let log = RecordingLog::new();
        create(&mut registry, &mut store, &log, "Work").unwrap();

        let err = create(&mut registry, &mut store, &log, "Work").unwrap_err();
        assert!(matches!(err, AddressBookError::BookAlreadyExists(_)));
        assert_eq!(store.save_count(), 1);
        assert_eq!(log.errors(), vec!["Address book already exists: Work"]);
    }

    #[test]
    fn remove_drops_contacts_from_storage() {
        let mut store = StoreFixture::new().with_contact("Work", asha()).build();
        let mut registry = store.load().unwrap();
        let log = RecordingLog::new();

        let result = remove(&mut registry, &mut store, &log, "Work").unwrap();
        assert_eq!(result.affected_contacts.len(), 1);
        assert!(!store.load().unwrap().contains("Work"));
    }

    #[test]
    fn remove_missing_book_fails() {
        let mut registry = BookRegistry::new();
        let mut store = InMemoryStore::new();
        let log = RecordingLog::new();

        let err = remove(&mut registry, &mut store, &log, "Work").unwrap_err();
        assert!(matches!(err, AddressBookError::BookNotFound(_)));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn list_reports_every_book() {
        let store = StoreFixture::new()
            .with_book("Home")
            .with_contact("Work", asha())
            .build();
        let registry = store.load().unwrap();

        let result = list(&registry).unwrap();
        assert_eq!(result.books.len(), 2);
        assert_eq!(result.books["Work"][0].full_name(), "Asha Rao");
        assert!(result.messages.is_empty());
    }
}
