//! # Indexes and the Filter View
//!
//! Every operation that targets a contact (edit, delete, drag) takes a **canonical
//! index**: the 0-based position in the full, unfiltered collection. Views never
//! renumber. A search for "ada" over `[Bob, Ada, Carl]` yields one row whose index
//! is still `1`, so acting on that row acts on the right contact.
//!
//! At the CLI boundary indexes are shown and typed 1-based; [`DisplayIndex`] does
//! that translation and nothing else.

use crate::collection::Collection;
use crate::error::{Result, RoloError};
use crate::model::Contact;
use serde::Serialize;
use std::str::FromStr;

/// A user-facing, 1-based contact number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_canonical(index: usize) -> Self {
        Self(index + 1)
    }

    pub fn canonical(self) -> usize {
        self.0 - 1
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = RoloError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().parse::<usize>() {
            Ok(n) if n > 0 => Ok(Self(n)),
            _ => Err(RoloError::Api(format!("Invalid index: {}", s))),
        }
    }
}

/// A contact paired with its canonical index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayContact {
    pub index: usize,
    pub contact: Contact,
}

/// True when `term` would actually filter anything.
pub fn is_active_term(term: &str) -> bool {
    !term.trim().is_empty()
}

/// Projects the collection through a search term.
///
/// Matching is a case-insensitive substring test on name or email. Order is the
/// canonical order. A blank term returns every contact.
pub fn filter_contacts(collection: &Collection, term: &str) -> Vec<DisplayContact> {
    let needle = term.trim().to_lowercase();

    collection
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| needle.is_empty() || entry.contact.matches(&needle))
        .map(|(index, entry)| DisplayContact {
            index,
            contact: entry.contact.clone(),
        })
        .collect()
}
