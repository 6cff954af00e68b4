//! # Ordered Collection
//!
//! The canonical, ordered sequence of contacts and its persisted mirror.
//!
//! Insertion order is display order. The only way to change the sequence is through
//! the mutators here, and callers are expected to [`Collection::persist`] after each
//! one so the mirror never lags behind memory.
//!
//! Loading is deliberately forgiving: a missing key, an unreadable store, or content
//! that does not parse as a JSON array of contacts all produce an empty collection.
//! "Never used" and "corrupted" are indistinguishable afterwards.

use crate::error::{Result, RoloError};
use crate::model::{Contact, Entry};
use crate::reorder;
use crate::store::DataStore;
use uuid::Uuid;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    entries: Vec<Entry>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_contacts(contacts: Vec<Contact>) -> Self {
        Self {
            entries: contacts.into_iter().map(Entry::new).collect(),
        }
    }

    /// Reads the collection stored under `key`, falling back to empty.
    pub fn load<S: DataStore>(store: &S, key: &str) -> Self {
        let raw = match store.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!(key, "no stored contacts, starting empty");
                return Self::new();
            }
            Err(error) => {
                tracing::warn!(key, %error, "failed to read stored contacts, starting empty");
                return Self::new();
            }
        };

        match serde_json::from_str::<Vec<Contact>>(&raw) {
            Ok(contacts) => {
                tracing::debug!(key, count = contacts.len(), "loaded contacts");
                Self::from_contacts(contacts)
            }
            Err(error) => {
                tracing::warn!(key, %error, "stored contacts are malformed, starting empty");
                Self::new()
            }
        }
    }

    /// Writes the whole collection under `key`.
    pub fn persist<S: DataStore>(&self, store: &mut S, key: &str) -> Result<()> {
        let json = serde_json::to_string(&self.contacts()).map_err(RoloError::Serialization)?;
        store.set_item(key, &json)?;
        tracing::debug!(key, count = self.entries.len(), "persisted contacts");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Plain records in canonical order.
    pub fn contacts(&self) -> Vec<Contact> {
        self.entries.iter().map(|e| e.contact.clone()).collect()
    }

    /// Current canonical index of the entry with `id`.
    pub fn position(&self, id: &Uuid) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(RoloError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }

    /// Appends and returns the new canonical index.
    pub fn push(&mut self, contact: Contact) -> usize {
        self.entries.push(Entry::new(contact));
        self.entries.len() - 1
    }

    /// Replaces the record at `index`, keeping its id.
    pub fn replace(&mut self, index: usize, contact: Contact) -> Result<()> {
        self.check_index(index)?;
        self.entries[index].contact = contact;
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<Entry> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Puts a removed entry back where it was, id and all.
    pub(crate) fn restore(&mut self, index: usize, entry: Entry) {
        let index = index.min(self.entries.len());
        self.entries.insert(index, entry);
    }

    /// Drag-and-drop move. See [`reorder::reorder`] for the index arithmetic.
    pub fn move_entry(&mut self, source: usize, target: usize) -> bool {
        reorder::reorder(&mut self.entries, source, target)
    }
}
