//! # CLI Layer
//!
//! One possible UI client for addrbook. This is the only place that parses
//! arguments, validates raw input, installs the logger and writes to the terminal.
//!
//! - `setup`: clap definitions and grouped help
//! - `commands`: context setup, dispatch and per-command handlers
//! - `print`: terminal output for `CmdResult`s

pub mod commands;
pub mod print;
pub mod setup;
