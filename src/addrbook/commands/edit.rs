use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::events::EventLog;
use crate::model::ContactField;
use crate::registry::BookRegistry;
use crate::store::DataStore;

use super::helpers::{logged, persist};

pub fn run<S: DataStore, L: EventLog>(
    registry: &mut BookRegistry,
    store: &mut S,
    log: &L,
    book: &str,
    full_name: &str,
    field: &str,
    value: &str,
) -> Result<CmdResult> {
    let field: ContactField = logged(log, field.parse())?;
    let contacts = logged(log, registry.select_mut(book))?;
    let edited = logged(log, contacts.edit(full_name, field, value))?.clone();
    log.info(&format!(
        "Contact edited in {}: {} set {} to {}",
        book, full_name, field, value
    ));
    persist(store, log, registry)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Contact updated: {} ({} = {})",
        edited.full_name(),
        field,
        value
    )));
    Ok(result.with_affected_contacts(vec![edited]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AddressBookError;
    use crate::events::RecordingLog;
    use crate::query::find_by_city;
    use crate::store::memory::fixtures::{asha, ben, StoreFixture};

    #[test]
    fn moving_city_changes_search_results() {
        let mut store = StoreFixture::new()
            .with_contact("Work", asha())
            .with_contact("Work", ben())
            .build();
        let mut registry = store.load().unwrap();
        let log = RecordingLog::new();

        run(&mut registry, &mut store, &log, "Work", "Asha Rao", "city", "Nashik").unwrap();

        let saved = store.load().unwrap();
        let work = saved.select("Work").unwrap();
        assert!(find_by_city(work, "Pune").is_empty());
        let found: Vec<_> = find_by_city(work, "Nashik")
            .iter()
            .map(|c| c.full_name())
            .collect();
        assert_eq!(found, vec!["Asha Rao"]);
    }

    #[test]
    fn unknown_field_is_rejected_before_lookup() {
        let mut store = StoreFixture::new().with_contact("Work", asha()).build();
        let mut registry = store.load().unwrap();
        let log = RecordingLog::new();

        let err = run(&mut registry, &mut store, &log, "Work", "Asha Rao", "nickname", "A")
            .unwrap_err();
        assert!(matches!(err, AddressBookError::InvalidField(_)));
        assert_eq!(store.save_count(), 0);
        assert_eq!(log.errors(), vec!["Unknown contact field: nickname"]);
    }

    #[test]
    fn missing_contact_is_reported() {
        let mut store = StoreFixture::new().with_contact("Work", asha()).build();
        let mut registry = store.load().unwrap();
        let log = RecordingLog::new();

        let err = run(&mut registry, &mut store, &log, "Work", "Ben Lee", "city", "Goa")
            .unwrap_err();
        assert!(matches!(err, AddressBookError::ContactNotFound(_)));
    }

    #[test]
    fn renaming_reports_new_name() {
        let mut store = StoreFixture::new().with_contact("Work", asha()).build();
        let mut registry = store.load().unwrap();
        let log = RecordingLog::new();

        let result =
            run(&mut registry, &mut store, &log, "Work", "Asha Rao", "last", "Kulkarni").unwrap();
        assert_eq!(result.affected_contacts[0].full_name(), "Asha Kulkarni");
        assert!(store
            .load()
            .unwrap()
            .select("Work")
            .unwrap()
            .contains("Asha Kulkarni"));
    }
}
