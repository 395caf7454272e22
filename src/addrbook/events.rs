//! Audit events emitted by the command layer.
//!
//! Commands never reach for a global logger. They are handed an [`EventLog`]
//! and report what happened through it; the caller decides where that goes.
//! The CLI passes a [`LogFacade`], which forwards to the `log` crate (and from
//! there to the file logger installed by [`crate::logger::setup`]).

use std::cell::RefCell;

pub const LOG_TARGET: &str = "AddressBook";

pub trait EventLog {
    fn info(&self, message: &str);
    fn error(&self, message: &str);
}

/// Forwards events to the `log` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogFacade;

impl EventLog for LogFacade {
    fn info(&self, message: &str) {
        log::info!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str) {
        log::error!(target: LOG_TARGET, "{}", message);
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullLog;

impl EventLog for NullLog {
    fn info(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventLevel {
    Info,
    Error,
}

/// Keeps events in memory so tests can inspect them.
#[derive(Debug, Default)]
pub struct RecordingLog {
    events: RefCell<Vec<(EventLevel, String)>>,
}

impl RecordingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<(EventLevel, String)> {
        self.events.borrow().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.at_level(EventLevel::Info)
    }

    pub fn errors(&self) -> Vec<String> {
        self.at_level(EventLevel::Error)
    }

    fn at_level(&self, level: EventLevel) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

impl EventLog for RecordingLog {
    fn info(&self, message: &str) {
        self.events
            .borrow_mut()
            .push((EventLevel::Info, message.to_string()));
    }

    fn error(&self, message: &str) {
        self.events
            .borrow_mut()
            .push((EventLevel::Error, message.to_string()));
    }
}

impl<L: EventLog + ?Sized> EventLog for &L {
    fn info(&self, message: &str) {
        (**self).info(message)
    }

    fn error(&self, message: &str) {
        (**self).error(message)
    }
}
