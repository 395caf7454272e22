//! # API Facade
//!
//! [`AddressBookApi`] is the single entry point for every address-book operation,
//! regardless of the UI in front of it. It is a thin facade:
//!
//! - It **owns** the registry cache, the [`DataStore`] and the [`EventLog`]
//! - It **dispatches** to the command functions in `commands/*.rs`
//! - It **returns** structured `Result<CmdResult>` values, never strings or output
//!
//! ## Lifecycle
//!
//! [`AddressBookApi::new`] reads the store once. From then on the in-memory
//! registry is authoritative for the run and every mutation writes it back in
//! full. An unreadable store at start-up does not fail construction: the error is
//! logged, kept in [`AddressBookApi::load_warnings`], and the run starts with no
//! books. Before the first save over the unreadable data, the store is asked to
//! keep a copy of it ([`DataStore::preserve_unreadable`]). If it cannot, every
//! mutation fails with a `PersistenceRead` error for the rest of the run.
//!
//! ## Generic Over DataStore and EventLog
//!
//! - Production: `AddressBookApi<FileStore, LogFacade>`
//! - Testing: `AddressBookApi<InMemoryStore, RecordingLog>`

use crate::commands;
use crate::error::{AddressBookError, Result};
use crate::events::EventLog;
use crate::model::Contact;
use crate::registry::BookRegistry;
use crate::store::DataStore;

pub struct AddressBookApi<S: DataStore, L: EventLog> {
    store: S,
    log: L,
    registry: BookRegistry,
    paths: commands::AddressBookPaths,
    load_warnings: Vec<commands::CmdMessage>,
    unreadable: Option<String>,
}

impl<S: DataStore, L: EventLog> AddressBookApi<S, L> {
    pub fn new(store: S, log: L, paths: commands::AddressBookPaths) -> Self {
        let mut load_warnings = Vec::new();
        let mut unreadable = None;
        let registry = match store.load() {
            Ok(registry) => registry,
            Err(e) => {
                log.error(&e.to_string());
                load_warnings.push(commands::CmdMessage::warning(format!(
                    "{}; starting with no address books",
                    e
                )));
                unreadable = Some(e.to_string());
                BookRegistry::new()
            }
        };

        Self {
            store,
            log,
            registry,
            paths,
            load_warnings,
            unreadable,
        }
    }

    /// Runs before any operation that saves. If the start-up load failed, the
    /// unreadable data is copied aside first and the returned notice says where;
    /// if no copy can be made the operation is refused.
    fn ensure_writable(&mut self) -> Result<Option<commands::CmdMessage>> {
        let reason = match &self.unreadable {
            Some(reason) => reason.clone(),
            None => return Ok(None),
        };

        match self.store.preserve_unreadable() {
            Ok(Some(backup)) => {
                let notice = format!("Unreadable address books copied to {}", backup);
                self.log.info(&notice);
                self.unreadable = None;
                Ok(Some(commands::CmdMessage::warning(notice)))
            }
            Ok(None) => Err(self.refuse(reason)),
            Err(e) => {
                self.log.error(&e.to_string());
                Err(self.refuse(reason))
            }
        }
    }

    fn refuse(&self, reason: String) -> AddressBookError {
        let err = AddressBookError::PersistenceRead(format!(
            "{}; refusing to overwrite it",
            reason
        ));
        self.log.error(&err.to_string());
        err
    }

    pub fn create_book(&mut self, name: &str) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result =
            commands::books::create(&mut self.registry, &mut self.store, &self.log, name);
        noted(result, notice)
    }

    pub fn delete_book(&mut self, name: &str) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result =
            commands::books::remove(&mut self.registry, &mut self.store, &self.log, name);
        noted(result, notice)
    }

    pub fn list_books(&self) -> Result<commands::CmdResult> {
        commands::books::list(&self.registry)
    }

    pub fn add_contact(&mut self, book: &str, contact: Contact) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result = commands::add::run(
            &mut self.registry,
            &mut self.store,
            &self.log,
            book,
            contact,
        );
        noted(result, notice)
    }

    pub fn edit_contact(
        &mut self,
        book: &str,
        full_name: &str,
        field: &str,
        value: &str,
    ) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result = commands::edit::run(
            &mut self.registry,
            &mut self.store,
            &self.log,
            book,
            full_name,
            field,
            value,
        );
        noted(result, notice)
    }

    pub fn delete_contact(&mut self, book: &str, full_name: &str) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result = commands::delete::run(
            &mut self.registry,
            &mut self.store,
            &self.log,
            book,
            full_name,
        );
        noted(result, notice)
    }

    pub fn list_contacts(
        &mut self,
        book: &str,
        sort_by: Option<&str>,
    ) -> Result<commands::CmdResult> {
        let notice = match sort_by {
            Some(_) => self.ensure_writable()?,
            None => None,
        };
        let result = commands::list::run(
            &mut self.registry,
            &mut self.store,
            &self.log,
            book,
            sort_by,
        );
        noted(result, notice)
    }

    pub fn view_contact(&self, book: &str, full_name: &str) -> Result<commands::CmdResult> {
        commands::view::run(&self.registry, &self.log, book, full_name)
    }

    pub fn find_by_city(&self, book: &str, city: &str) -> Result<commands::CmdResult> {
        commands::search::by_city(&self.registry, &self.log, book, city)
    }

    pub fn group_by_state(&self, book: &str, state: &str) -> Result<commands::CmdResult> {
        commands::search::by_state(&self.registry, &self.log, book, state)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<commands::CmdResult> {
        let notice = self.ensure_writable()?;
        let result = commands::init::run(&self.paths, &mut self.store);
        noted(result, notice)
    }

    pub fn registry(&self) -> &BookRegistry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn paths(&self) -> &commands::AddressBookPaths {
        &self.paths
    }

    pub fn load_warnings(&self) -> &[commands::CmdMessage] {
        &self.load_warnings
    }
}

/// Puts `notice` ahead of a successful result's own messages.
fn noted(
    result: Result<commands::CmdResult>,
    notice: Option<commands::CmdMessage>,
) -> Result<commands::CmdResult> {
    let mut result = result?;
    if let Some(notice) = notice {
        result.messages.insert(0, notice);
    }
    Ok(result)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{AddressBookPaths, CmdMessage, CmdResult, MessageLevel};
