//! # Storage Layer
//!
//! The [`DataStore`] trait is the persistence seam for address books. The whole
//! [`BookRegistry`] is read and written in one piece: the file is the database,
//! and the in-memory registry is only a cache over it for a single run.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage, one JSON file
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! {
//!   "Work": [
//!     {
//!       "first_name": "Asha",
//!       "last_name": "Rao",
//!       "address": "12 MG Road",
//!       "city": "Pune",
//!       "state": "MH",
//!       "zip_code": "411001",
//!       "phone_number": "9876543210",
//!       "email": "asha@x.com"
//!     }
//!   ]
//! }
//! ```
//!
//! Contacts are stored in the order the book currently holds them and loaded back
//! in that same order. A file in which one book names the same contact twice is
//! rejected as unreadable.

use crate::error::Result;
use crate::registry::BookRegistry;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read every book. A store with nothing persisted yet yields an empty registry.
    fn load(&self) -> Result<BookRegistry>;

    /// Replace everything persisted with `registry`.
    fn save(&mut self, registry: &BookRegistry) -> Result<()>;

    /// Keep a copy of data that `load` could not read, so a later `save` does not
    /// destroy it. Returns where the copy went, or `None` if this store cannot
    /// keep one, in which case the caller must not save.
    fn preserve_unreadable(&mut self) -> Result<Option<String>> {
        Ok(None)
    }
}
