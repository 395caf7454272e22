//! Read-only lookups over a single book.
//!
//! Matching is case-insensitive and exact (no substring search). Results keep
//! the store's current order.

use crate::contacts::ContactStore;
use crate::model::Contact;
use std::collections::BTreeMap;

pub fn find_by_city<'a>(store: &'a ContactStore, city: &str) -> Vec<&'a Contact> {
    let wanted = city.to_lowercase();
    store
        .iter()
        .filter(|c| c.city.to_lowercase() == wanted)
        .collect()
}

/// Full names of the contacts living in `state`, keyed by the queried state.
///
/// Only that one key is ever present; the map is empty when nobody matches.
pub fn group_by_state(store: &ContactStore, state: &str) -> BTreeMap<String, Vec<String>> {
    let wanted = state.to_lowercase();
    let mut groups = BTreeMap::new();
    for contact in store.iter().filter(|c| c.state.to_lowercase() == wanted) {
        groups
            .entry(state.to_string())
            .or_insert_with(Vec::new)
            .push(contact.full_name());
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_store() -> ContactStore {
        let mut store = ContactStore::new();
        store
            .add(Contact::new("Asha", "Rao").with_city("pune").with_state("MH"))
            .unwrap();
        store
            .add(Contact::new("Ben", "Lee").with_city("Mumbai").with_state("mh"))
            .unwrap();
        store
            .add(Contact::new("Chitra", "Iyer").with_city("PUNE").with_state("TN"))
            .unwrap();
        store
    }

    #[test]
    fn city_match_ignores_case() {
        let store = sample_store();
        let found: Vec<_> = find_by_city(&store, "Pune")
            .iter()
            .map(|c| c.full_name())
            .collect();
        assert_eq!(found, vec!["Asha Rao", "Chitra Iyer"]);
    }

    #[test]
    fn city_match_is_exact() {
        let store = sample_store();
        assert!(find_by_city(&store, "Pun").is_empty());
        assert!(find_by_city(&store, "Delhi").is_empty());
    }

    #[test]
    fn groups_single_state() {
        let store = sample_store();
        let groups = group_by_state(&store, "MH");
        assert_eq!(groups.len(), 1);
        assert_eq!(groups["MH"], vec!["Asha Rao", "Ben Lee"]);
    }

    #[test]
    fn unknown_state_gives_empty_map() {
        let store = sample_store();
        assert!(group_by_state(&store, "KA").is_empty());
    }
}
