//! # Contact Store
//!
//! A [`ContactStore`] is the ordered contents of one address book.
//!
//! ## Ordering
//!
//! Contacts are kept sorted by full name ("first last", plain string comparison).
//! [`ContactStore::add`] inserts at the sorted position instead of appending.
//! Two operations may leave the sequence out of that order:
//!
//! - [`ContactStore::list`] with a [`SortKey`] re-orders the sequence in place
//!   (stable sort). The new order sticks until the next sort.
//! - [`ContactStore::edit`] on a first or last name changes the key of a contact
//!   without moving it.
//!
//! Hydrating from disk ([`ContactStore::from_contacts`]) keeps whatever order was
//! persisted.
//!
//! ## Uniqueness
//!
//! Full names are unique within a store (exact, case-sensitive). The same person
//! may appear in several books.

use crate::error::{AddressBookError, Result};
use crate::model::{Contact, ContactField, SortKey};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from persisted contacts, in the order given.
    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn add(&mut self, contact: Contact) -> Result<()> {
        let full_name = contact.full_name();
        if self.contains(&full_name) {
            return Err(AddressBookError::DuplicateName(full_name));
        }

        let position = self
            .contacts
            .iter()
            .position(|existing| existing.full_name() > full_name)
            .unwrap_or(self.contacts.len());
        self.contacts.insert(position, contact);
        Ok(())
    }

    /// Sets one field of the contact named `full_name`.
    ///
    /// Renaming a contact onto a full name already used in this store fails with
    /// `DuplicateName` and leaves the contact untouched.
    pub fn edit(
        &mut self,
        full_name: &str,
        field: ContactField,
        value: impl Into<String>,
    ) -> Result<&Contact> {
        let index = self.position(full_name)?;
        let value = value.into();

        if field.is_identity() {
            let mut renamed = self.contacts[index].clone();
            field.set(&mut renamed, value.clone());
            let new_name = renamed.full_name();
            if new_name != full_name && self.contains(&new_name) {
                return Err(AddressBookError::DuplicateName(new_name));
            }
        }

        field.set(&mut self.contacts[index], value);
        Ok(&self.contacts[index])
    }

    pub fn delete(&mut self, full_name: &str) -> Result<Contact> {
        let index = self.position(full_name)?;
        Ok(self.contacts.remove(index))
    }

    /// Returns the contacts, first re-ordering them by `sort_by` when given.
    pub fn list(&mut self, sort_by: Option<SortKey>) -> &[Contact] {
        if let Some(key) = sort_by {
            let field = key.field();
            self.contacts.sort_by(|a, b| field.get(a).cmp(field.get(b)));
        }
        &self.contacts
    }

    pub fn get(&self, full_name: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.full_name() == full_name)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.get(full_name).is_some()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Contact> {
        self.contacts.iter()
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The first full name that appears more than once, if any. Only hydrated
    /// data can hold one; `add` and `edit` never create duplicates.
    pub fn first_duplicate(&self) -> Option<String> {
        let mut seen = HashSet::new();
        self.contacts
            .iter()
            .map(Contact::full_name)
            .find(|name| !seen.insert(name.clone()))
    }

    fn position(&self, full_name: &str) -> Result<usize> {
        self.contacts
            .iter()
            .position(|c| c.full_name() == full_name)
            .ok_or_else(|| AddressBookError::ContactNotFound(full_name.to_string()))
    }
}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = std::slice::Iter<'a, Contact>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(store: &ContactStore) -> Vec<String> {
        store.iter().map(|c| c.full_name()).collect()
    }

    fn contact(first: &str, last: &str, city: &str) -> Contact {
        Contact::new(first, last).with_city(city)
    }

    #[test]
    fn add_keeps_alphabetical_order() {
        let mut store = ContactStore::new();
        store.add(contact("Ben", "Lee", "Mumbai")).unwrap();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("Chitra", "Iyer", "Chennai")).unwrap();
        store.add(contact("Asha", "Kulkarni", "Nagpur")).unwrap();

        assert_eq!(
            names(&store),
            vec!["Asha Kulkarni", "Asha Rao", "Ben Lee", "Chitra Iyer"]
        );
    }

    #[test]
    fn duplicate_full_name_is_rejected() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();

        let err = store.add(contact("Asha", "Rao", "Delhi")).unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicateName(ref n) if n == "Asha Rao"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("Asha Rao").unwrap().city, "Pune");
    }

    #[test]
    fn uniqueness_is_case_sensitive() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("asha", "rao", "Pune")).unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn edit_updates_single_field() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();

        let edited = store.edit("Asha Rao", ContactField::City, "Nashik").unwrap();
        assert_eq!(edited.city, "Nashik");
        assert_eq!(store.get("Asha Rao").unwrap().city, "Nashik");
    }

    #[test]
    fn edit_missing_contact_fails() {
        let mut store = ContactStore::new();
        let err = store.edit("Nobody Here", ContactField::City, "X").unwrap_err();
        assert!(matches!(err, AddressBookError::ContactNotFound(_)));
    }

    #[test]
    fn renaming_does_not_resort() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("Ben", "Lee", "Mumbai")).unwrap();

        store.edit("Asha Rao", ContactField::FirstName, "Zoya").unwrap();
        assert_eq!(names(&store), vec!["Zoya Rao", "Ben Lee"]);
        assert!(store.get("Asha Rao").is_none());
    }

    #[test]
    fn renaming_onto_existing_name_is_rejected() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("Ben", "Rao", "Mumbai")).unwrap();

        let err = store
            .edit("Ben Rao", ContactField::FirstName, "Asha")
            .unwrap_err();
        assert!(matches!(err, AddressBookError::DuplicateName(_)));
        assert!(store.get("Ben Rao").is_some());
    }

    #[test]
    fn renaming_to_same_name_is_allowed() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.edit("Asha Rao", ContactField::LastName, "Rao").unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_twice_reports_not_found() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();

        let removed = store.delete("Asha Rao").unwrap();
        assert_eq!(removed.first_name, "Asha");
        let err = store.delete("Asha Rao").unwrap_err();
        assert!(matches!(err, AddressBookError::ContactNotFound(_)));
    }

    #[test]
    fn list_without_key_keeps_order() {
        let mut store = ContactStore::new();
        store.add(contact("Ben", "Lee", "Amritsar")).unwrap();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();

        let listed: Vec<_> = store.list(None).iter().map(|c| c.full_name()).collect();
        assert_eq!(listed, vec!["Asha Rao", "Ben Lee"]);
    }

    #[test]
    fn sort_is_stable_and_persistent() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("Ben", "Lee", "Mumbai")).unwrap();
        store.add(contact("Chitra", "Iyer", "Pune")).unwrap();
        store.add(contact("Dev", "Shah", "Agra")).unwrap();

        let listed: Vec<_> = store
            .list(Some(SortKey::City))
            .iter()
            .map(|c| c.full_name())
            .collect();
        assert_eq!(listed, vec!["Dev Shah", "Ben Lee", "Asha Rao", "Chitra Iyer"]);

        // The sort re-ordered the store itself.
        assert_eq!(names(&store), listed);
    }

    #[test]
    fn add_after_sort_inserts_before_first_greater_name() {
        let mut store = ContactStore::new();
        store.add(contact("Asha", "Rao", "Pune")).unwrap();
        store.add(contact("Ben", "Lee", "Agra")).unwrap();
        store.list(Some(SortKey::City));

        store.add(contact("Aaron", "Paul", "Delhi")).unwrap();
        assert_eq!(names(&store), vec!["Aaron Paul", "Ben Lee", "Asha Rao"]);
    }

    #[test]
    fn reports_hydrated_duplicates() {
        let store = ContactStore::from_contacts(vec![
            contact("Asha", "Rao", "Pune"),
            contact("Ben", "Lee", "Mumbai"),
            contact("Asha", "Rao", "Delhi"),
        ]);
        assert_eq!(store.first_duplicate().as_deref(), Some("Asha Rao"));

        let mut clean = ContactStore::new();
        clean.add(contact("Asha", "Rao", "Pune")).unwrap();
        clean.add(contact("asha", "rao", "Pune")).unwrap();
        assert_eq!(clean.first_duplicate(), None);
    }

    #[test]
    fn from_contacts_preserves_order() {
        let store = ContactStore::from_contacts(vec![
            contact("Zoya", "Khan", "Pune"),
            contact("Asha", "Rao", "Pune"),
        ]);
        assert_eq!(names(&store), vec!["Zoya Khan", "Asha Rao"]);
    }
}
