//! Input checks applied by the CLI before anything reaches the engine.

use crate::error::{AddressBookError, Result};
use crate::model::ContactField;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\w+([._%+-]\w+)*@[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(\.[a-zA-Z]{2,})?$")
        .expect("email pattern compiles")
});
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{10}$").expect("phone pattern compiles"));
static ZIP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").expect("zip pattern compiles"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Ten digits, nothing else.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// Six digits, nothing else.
pub fn is_valid_zip(zip_code: &str) -> bool {
    ZIP_RE.is_match(zip_code)
}

/// Checks `value` against the rule for `field`.
pub fn validate_field(field: ContactField, value: &str) -> Result<()> {
    let ok = match field {
        ContactField::ZipCode => is_valid_zip(value),
        ContactField::PhoneNumber => is_valid_phone(value),
        ContactField::Email => is_valid_email(value),
        _ => !value.trim().is_empty(),
    };
    if ok {
        Ok(())
    } else {
        Err(AddressBookError::InvalidInput(format!(
            "{} '{}'",
            field, value
        )))
    }
}
