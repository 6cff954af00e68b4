//! Contact form validation.
//!
//! A contact is accepted when:
//! - No field is empty (after trimming)
//! - The email looks like `local@domain.tld`: exactly one `@`, no whitespace, and a
//!   `.` inside the domain with at least one character on each side
//! - The phone has at least [`MIN_PHONE_LEN`] characters. This is a raw character
//!   count, so `"(555) 123-4567"` and `"call me now"` both pass.
//!
//! Checks run in that order and the first failure wins.
//!
//! ## Whitespace and length
//!
//! "Whitespace" means Unicode `White_Space` ([`char::is_whitespace`], and
//! [`str::trim`] in [`Contact::trimmed`]). U+FEFF (the byte-order mark) is not in
//! that set: a field holding only a BOM is not blank, and an email containing one
//! is not rejected for whitespace. Browser regex `\s` and `String.prototype.trim`
//! do treat U+FEFF as whitespace.
//!
//! Phone length counts Unicode scalar values (`chars()`), not UTF-16 code units,
//! so a character outside the Basic Multilingual Plane (an emoji, say) counts once
//! here where a browser's `length` would count it twice.

use crate::error::ValidationError;
use crate::model::Contact;

pub const MIN_PHONE_LEN: usize = 10;

/// Validates an already-trimmed contact.
///
/// # Examples
/// ```
/// use rolo::model::Contact;
/// use rolo::validation::validate_contact;
/// use rolo::error::ValidationError;
///
/// assert!(validate_contact(&Contact::new("Ada", "ada@example.com", "5551234567")).is_ok());
/// assert_eq!(
///     validate_contact(&Contact::new("Ada", "ada@example", "5551234567")),
///     Err(ValidationError::InvalidEmail)
/// );
/// ```
pub fn validate_contact(contact: &Contact) -> Result<(), ValidationError> {
    if contact.name.is_empty() || contact.email.is_empty() || contact.phone.is_empty() {
        return Err(ValidationError::MissingField);
    }

    if !is_valid_email(&contact.email) {
        return Err(ValidationError::InvalidEmail);
    }

    if contact.phone.chars().count() < MIN_PHONE_LEN {
        return Err(ValidationError::InvalidPhone);
    }

    Ok(())
}

/// Equivalent to matching `^[^\s@]+@[^\s@]+\.[^\s@]+$`, with `\s` read as
/// [`char::is_whitespace`] (see the module docs for U+FEFF).
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Some dot must have a non-empty label before and after it.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
