use thiserror::Error;

#[derive(Error, Debug)]
pub enum AddressBookError {
    #[error("Contact already exists: {0}")]
    DuplicateName(String),

    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("Address book not found: {0}")]
    BookNotFound(String),

    #[error("Address book already exists: {0}")]
    BookAlreadyExists(String),

    #[error("Address book name cannot be empty")]
    EmptyBookName,

    #[error("Unknown contact field: {0}")]
    InvalidField(String),

    #[error("Unknown sort key: {0} (expected city, state or zip)")]
    InvalidSortKey(String),

    #[error("Could not read address books: {0}")]
    PersistenceRead(String),

    #[error("Could not save address books: {0}")]
    PersistenceWrite(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AddressBookError>;
