use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single contact record, exactly as it is persisted.
///
/// Records carry no identity of their own. Position in the [`Collection`] is the
/// public identity; [`Entry`] adds an in-memory id that never reaches storage.
///
/// [`Collection`]: crate::collection::Collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub phone: String,
}

impl Contact {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    /// Returns a copy with surrounding whitespace stripped from every field.
    ///
    /// Uses [`str::trim`], which leaves U+FEFF in place; see [`crate::validation`].
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }

    /// Case-insensitive substring match against name or email.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.email.to_lowercase().contains(needle)
    }
}

/// A contact paired with the synthetic id it holds while loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub id: Uuid,
    pub contact: Contact,
}

impl Entry {
    pub fn new(contact: Contact) -> Self {
        Self {
            id: Uuid::new_v4(),
            contact,
        }
    }
}
