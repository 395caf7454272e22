use crate::contacts::ContactStore;
use crate::error::{AddressBookError, Result};
use crate::model::Contact;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// All address books, keyed by name.
///
/// Serializes as a plain JSON object of book name to contact list, which is the
/// on-disk layout used by [`crate::store::fs::FileStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookRegistry {
    books: BTreeMap<String, ContactStore>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: &str) -> Result<()> {
        if name.trim().is_empty() {
            return Err(AddressBookError::EmptyBookName);
        }
        if self.books.contains_key(name) {
            return Err(AddressBookError::BookAlreadyExists(name.to_string()));
        }
        self.books.insert(name.to_string(), ContactStore::new());
        Ok(())
    }

    pub fn select(&self, name: &str) -> Result<&ContactStore> {
        self.books
            .get(name)
            .ok_or_else(|| AddressBookError::BookNotFound(name.to_string()))
    }

    pub fn select_mut(&mut self, name: &str) -> Result<&mut ContactStore> {
        self.books
            .get_mut(name)
            .ok_or_else(|| AddressBookError::BookNotFound(name.to_string()))
    }

    /// Removes a book and hands back its contacts.
    pub fn delete(&mut self, name: &str) -> Result<ContactStore> {
        self.books
            .remove(name)
            .ok_or_else(|| AddressBookError::BookNotFound(name.to_string()))
    }

    /// Snapshot of every book's contacts, for display.
    pub fn list_all(&self) -> BTreeMap<String, Vec<Contact>> {
        self.books
            .iter()
            .map(|(name, store)| (name.clone(), store.contacts().to_vec()))
            .collect()
    }

    /// The first book holding two contacts with the same full name, with that name.
    pub fn first_duplicate(&self) -> Option<(&str, String)> {
        self.books
            .iter()
            .find_map(|(name, store)| store.first_duplicate().map(|dup| (name.as_str(), dup)))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.books.keys().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.books.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
