use crate::error::AddressBookError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One person's entry in an address book.
///
/// `first_name` and `last_name` form the contact's identity within a book (see
/// [`Contact::full_name`]). The remaining fields are free text; the engine does
/// not validate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub email: String,
}

impl Contact {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            phone_number: String::new(),
            email: String::new(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = state.into();
        self
    }

    pub fn with_zip_code(mut self, zip_code: impl Into<String>) -> Self {
        self.zip_code = zip_code.into();
        self
    }

    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// "first last", the unique key of a contact inside one book.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn field(&self, field: ContactField) -> &str {
        field.get(self)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}, {}, {}, {}",
            self.full_name(),
            self.address,
            self.city,
            self.state,
            self.zip_code,
            self.phone_number,
            self.email
        )
    }
}

/// The editable attributes of a [`Contact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    Address,
    City,
    State,
    ZipCode,
    PhoneNumber,
    Email,
}

impl ContactField {
    pub const ALL: [ContactField; 8] = [
        ContactField::FirstName,
        ContactField::LastName,
        ContactField::Address,
        ContactField::City,
        ContactField::State,
        ContactField::ZipCode,
        ContactField::PhoneNumber,
        ContactField::Email,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ContactField::FirstName => "first_name",
            ContactField::LastName => "last_name",
            ContactField::Address => "address",
            ContactField::City => "city",
            ContactField::State => "state",
            ContactField::ZipCode => "zip_code",
            ContactField::PhoneNumber => "phone_number",
            ContactField::Email => "email",
        }
    }

    /// True for the fields that make up the full name.
    pub fn is_identity(&self) -> bool {
        matches!(self, ContactField::FirstName | ContactField::LastName)
    }

    pub fn get<'a>(&self, contact: &'a Contact) -> &'a str {
        match self {
            ContactField::FirstName => &contact.first_name,
            ContactField::LastName => &contact.last_name,
            ContactField::Address => &contact.address,
            ContactField::City => &contact.city,
            ContactField::State => &contact.state,
            ContactField::ZipCode => &contact.zip_code,
            ContactField::PhoneNumber => &contact.phone_number,
            ContactField::Email => &contact.email,
        }
    }

    pub fn set(&self, contact: &mut Contact, value: String) {
        let slot = match self {
            ContactField::FirstName => &mut contact.first_name,
            ContactField::LastName => &mut contact.last_name,
            ContactField::Address => &mut contact.address,
            ContactField::City => &mut contact.city,
            ContactField::State => &mut contact.state,
            ContactField::ZipCode => &mut contact.zip_code,
            ContactField::PhoneNumber => &mut contact.phone_number,
            ContactField::Email => &mut contact.email,
        };
        *slot = value;
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContactField {
    type Err = AddressBookError;

    /// Accepts the stored field names plus the short forms used on the command line
    /// (`first`, `last`, `zip`, `phone`), case-insensitively and with `-` or `_`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "first_name" | "first" => Ok(ContactField::FirstName),
            "last_name" | "last" => Ok(ContactField::LastName),
            "address" => Ok(ContactField::Address),
            "city" => Ok(ContactField::City),
            "state" => Ok(ContactField::State),
            "zip_code" | "zip" => Ok(ContactField::ZipCode),
            "phone_number" | "phone" => Ok(ContactField::PhoneNumber),
            "email" => Ok(ContactField::Email),
            _ => Err(AddressBookError::InvalidField(s.to_string())),
        }
    }
}

/// Attributes a book can be re-ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    City,
    State,
    Zip,
}

impl SortKey {
    pub fn field(&self) -> ContactField {
        match self {
            SortKey::City => ContactField::City,
            SortKey::State => ContactField::State,
            SortKey::Zip => ContactField::ZipCode,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::City => f.write_str("city"),
            SortKey::State => f.write_str("state"),
            SortKey::Zip => f.write_str("zip"),
        }
    }
}

impl FromStr for SortKey {
    type Err = AddressBookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "city" => Ok(SortKey::City),
            "state" => Ok(SortKey::State),
            "zip" | "zip_code" | "zip-code" => Ok(SortKey::Zip),
            _ => Err(AddressBookError::InvalidSortKey(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_joins_with_space() {
        let contact = Contact::new("Asha", "Rao");
        assert_eq!(contact.full_name(), "Asha Rao");
    }

    #[test]
    fn field_accessors_cover_every_field() {
        let mut contact = Contact::new("Asha", "Rao");
        for field in ContactField::ALL {
            field.set(&mut contact, format!("v-{}", field));
        }
        for field in ContactField::ALL {
            assert_eq!(contact.field(field), format!("v-{}", field));
        }
    }

    #[test]
    fn parses_field_aliases() {
        assert_eq!("zip".parse::<ContactField>().unwrap(), ContactField::ZipCode);
        assert_eq!(
            "Phone-Number".parse::<ContactField>().unwrap(),
            ContactField::PhoneNumber
        );
        assert_eq!("first".parse::<ContactField>().unwrap(), ContactField::FirstName);
        assert!(matches!(
            "nickname".parse::<ContactField>(),
            Err(AddressBookError::InvalidField(name)) if name == "nickname"
        ));
    }

    #[test]
    fn parses_sort_keys() {
        assert_eq!("CITY".parse::<SortKey>().unwrap(), SortKey::City);
        assert_eq!("zip_code".parse::<SortKey>().unwrap(), SortKey::Zip);
        assert!(matches!(
            "email".parse::<SortKey>(),
            Err(AddressBookError::InvalidSortKey(_))
        ));
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let json = r#"{"first_name":"Asha","last_name":"Rao","city":"Pune","nickname":"A"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.city, "Pune");
        assert_eq!(contact.email, "");
    }
}
