use super::DataStore;
use crate::error::{AddressBookError, Result};
use crate::registry::BookRegistry;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    saved: Option<BookRegistry>,
    saves: usize,
    fail_reads: bool,
    fail_writes: bool,
    backups: Vec<BookRegistry>,
    keeps_unreadable: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `registry` already persisted.
    pub fn with_registry(registry: BookRegistry) -> Self {
        Self {
            saved: Some(registry),
            ..Self::default()
        }
    }

    /// Makes every subsequent `load` fail, as a corrupt file would.
    pub fn fail_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Lets `preserve_unreadable` succeed by snapshotting whatever is persisted.
    pub fn keep_unreadable(mut self) -> Self {
        self.keeps_unreadable = true;
        self
    }

    /// Snapshots taken by `preserve_unreadable`.
    pub fn backups(&self) -> &[BookRegistry] {
        &self.backups
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// How many successful saves have happened.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn saved(&self) -> Option<&BookRegistry> {
        self.saved.as_ref()
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<BookRegistry> {
        if self.fail_reads {
            return Err(AddressBookError::PersistenceRead(
                "in-memory store set to fail".to_string(),
            ));
        }
        Ok(self.saved.clone().unwrap_or_default())
    }

    fn save(&mut self, registry: &BookRegistry) -> Result<()> {
        if self.fail_writes {
            return Err(AddressBookError::PersistenceWrite(
                "in-memory store set to fail".to_string(),
            ));
        }
        self.saved = Some(registry.clone());
        self.saves += 1;
        Ok(())
    }

    fn preserve_unreadable(&mut self) -> Result<Option<String>> {
        if !self.keeps_unreadable {
            return Ok(None);
        }
        self.backups.push(self.saved.clone().unwrap_or_default());
        Ok(Some(format!("memory backup #{}", self.backups.len())))
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Contact;

    /// Builds a registry and the store holding it.
    pub struct StoreFixture {
        pub registry: BookRegistry,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                registry: BookRegistry::new(),
            }
        }

        pub fn with_book(mut self, name: &str) -> Self {
            self.registry.create(name).unwrap();
            self
        }

        pub fn with_contact(mut self, book: &str, contact: Contact) -> Self {
            if !self.registry.contains(book) {
                self.registry.create(book).unwrap();
            }
            self.registry.select_mut(book).unwrap().add(contact).unwrap();
            self
        }

        /// Adds `count` generated contacts, "Person1 Test" and so on, in city "City1"...
        pub fn with_contacts(mut self, book: &str, count: usize) -> Self {
            for i in 0..count {
                let contact = Contact::new(format!("Person{}", i + 1), "Test")
                    .with_city(format!("City{}", i + 1))
                    .with_state("MH")
                    .with_zip_code(format!("41100{}", i % 10))
                    .with_phone_number(format!("98765432{:02}", i % 100))
                    .with_email(format!("person{}@example.com", i + 1));
                self = self.with_contact(book, contact);
            }
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_registry(self.registry)
        }
    }

    pub fn asha() -> Contact {
        Contact::new("Asha", "Rao")
            .with_address("12 MG Road")
            .with_city("Pune")
            .with_state("MH")
            .with_zip_code("411001")
            .with_phone_number("9876543210")
            .with_email("asha@x.com")
    }

    pub fn ben() -> Contact {
        Contact::new("Ben", "Lee")
            .with_address("4 Marine Drive")
            .with_city("Mumbai")
            .with_state("MH")
            .with_zip_code("400001")
            .with_phone_number("9123456780")
            .with_email("ben@x.com")
    }
}
