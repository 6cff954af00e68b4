//! # Storage Layer
//!
//! This module defines the storage abstraction for rolo. The [`DataStore`] trait is a
//! small keyed string store, the same shape as a browser's local storage: one key
//! holds one serialized value, and values are always replaced wholesale.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production file-based storage
//!   - Each key maps to `<root>/<key>.json`
//!   - Writes go to a temp file first and are renamed into place
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Fast, isolated test execution
//!
//! ## Storage Format
//!
//! ```text
//! ~/.local/share/rolo/
//! ├── contacts.json       # The collection (JSON array of {name, email, phone})
//! └── config.json         # Configuration
//! ```
//!
//! Serialization of the collection lives in [`crate::collection`]; stores only move
//! strings around.

use crate::error::{Result, RoloError};

pub mod fs;
pub mod memory;

/// Default key the contact collection is stored under.
pub const CONTACTS_KEY: &str = "contacts";

/// Keys whose files already have another owner in the data directory.
pub const RESERVED_KEYS: [&str; 1] = ["config"];

/// Keys become file names: only `[A-Za-z0-9_-]`, never one of [`RESERVED_KEYS`].
pub fn check_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(RoloError::Store(format!("Invalid storage key: {:?}", key)));
    }
    if RESERVED_KEYS.contains(&key) {
        return Err(RoloError::Store(format!("Storage key is reserved: {:?}", key)));
    }
    Ok(())
}

/// Abstract interface for the persisted mirror.
pub trait DataStore {
    /// Read the value stored under `key`. `Ok(None)` when the key was never written.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing a missing key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_keys() {
        assert!(check_key("contacts").is_ok());
        assert!(check_key("work_contacts-2").is_ok());
    }

    #[test]
    fn rejects_path_like_and_reserved_keys() {
        assert!(check_key("").is_err());
        assert!(check_key("../escape").is_err());
        assert!(check_key("a b").is_err());
        assert!(matches!(check_key("config"), Err(RoloError::Store(_))));
    }
}
