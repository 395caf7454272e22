use crate::config::AddressBookConfig;
use crate::model::Contact;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub mod add;
pub mod books;
pub mod config;
pub mod delete;
pub mod edit;
pub mod helpers;
pub mod init;
pub mod list;
pub mod search;
pub mod view;

#[derive(Debug, Clone)]
pub struct AddressBookPaths {
    pub home: PathBuf,
    pub data_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<Contact>,
    pub listed_contacts: Vec<Contact>,
    pub books: BTreeMap<String, Vec<Contact>>,
    pub groups: BTreeMap<String, Vec<String>>,
    pub config: Option<AddressBookConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_listed_contacts(mut self, contacts: Vec<Contact>) -> Self {
        self.listed_contacts = contacts;
        self
    }

    pub fn with_books(mut self, books: BTreeMap<String, Vec<Contact>>) -> Self {
        self.books = books;
        self
    }

    pub fn with_groups(mut self, groups: BTreeMap<String, Vec<String>>) -> Self {
        self.groups = groups;
        self
    }

    pub fn with_config(mut self, config: AddressBookConfig) -> Self {
        self.config = Some(config);
        self
    }
}
