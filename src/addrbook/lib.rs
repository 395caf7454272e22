//! # Addrbook Architecture
//!
//! Addrbook is a **UI-agnostic address-book library** with a small CLI client on top.
//! Books are named collections of contacts; all of them live in one JSON file.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, validates input, prints results        │
//! │  - Installs the file logger                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the registry cache, the store and the event log     │
//! │  - Thin dispatch to commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One operation per module, returns CmdResult              │
//! │  - Saves after every mutation, reports events               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (registry.rs, contacts.rs, query.rs, model.rs)      │
//! │  - Ordering, uniqueness, edits, lookups                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore, InMemoryStore                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward nothing writes to stdout/stderr or exits the process.
//! Audit events go through the [`events::EventLog`] handed to the API.
//!
//! ## Testing Strategy
//!
//! - Engine and commands: unit tests against `InMemoryStore` and `RecordingLog`
//! - `FileStore` and config: unit tests in temp directories
//! - CLI: end-to-end tests in `tests/` driving the binary
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`contacts`]: `ContactStore`, the ordered contents of one book
//! - [`registry`]: `BookRegistry`, book name to `ContactStore`
//! - [`query`]: Search by city, grouping by state
//! - [`model`]: `Contact`, `ContactField`, `SortKey`
//! - [`store`]: Storage abstraction and implementations
//! - [`events`]: Audit event capability
//! - [`logger`]: File logger behind the `log` facade
//! - [`config`]: Configuration management
//! - [`validation`]: Input checks for email, phone and zip
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod contacts;
pub mod error;
pub mod events;
pub mod logger;
pub mod model;
pub mod query;
pub mod registry;
pub mod store;
pub mod validation;
