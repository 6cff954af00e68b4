//! # Command Layer
//!
//! This module contains the **core business logic** of rolo. Each command lives in its
//! own submodule and implements plain Rust functions over a [`ContactBook`] and a
//! [`DataStore`](crate::store::DataStore).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Validate input and mutate the collection
//! - Persist after every successful mutation, never after a failed one
//! - Post the outcome to the book's flash message
//! - Return a [`CmdResult`] carrying the re-rendered view (current search term applied)
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O** beyond the store: no stdout, no prompts
//! - **User interaction**: confirmations happen in the caller (see `api.rs`)
//!
//! ## Testing Strategy
//!
//! **This is where the lion's share of testing lives.** Tests use `InMemoryStore`.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a contact
//! - [`update`]: Replace a contact in place
//! - [`delete`]: Remove a contact
//! - [`list`]: Current view, and changing the search term
//! - [`edit`]: Inline edit session (begin / save / cancel)
//! - [`move_contact`]: Reorder and the drag lifecycle
//! - [`config`]: Manage configuration

use crate::config::RoloConfig;
use crate::index::{filter_contacts, is_active_term, DisplayContact};
use crate::model::Contact;
use crate::session::ContactBook;
use serde::Serialize;
use std::path::PathBuf;

pub mod config;
pub mod create;
pub mod delete;
pub mod edit;
pub mod list;
pub mod move_contact;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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

/// What a render pass needs: the filtered rows plus enough state to draw them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub contacts: Vec<DisplayContact>,
    /// A non-blank search term was applied.
    pub filtered: bool,
    /// Canonical index of the row in inline-edit mode.
    pub editing: Option<usize>,
    /// Size of the full collection, not of the view.
    pub total: usize,
    /// Canonical index of the row being dragged.
    pub dragging: Option<usize>,
    /// Canonical index of the row highlighted as the drop target.
    pub drop_target: Option<usize>,
}

impl ListView {
    pub fn of(book: &ContactBook) -> Self {
        Self {
            contacts: filter_contacts(book.collection(), book.search()),
            filtered: is_active_term(book.search()),
            editing: book.editing_index(),
            total: book.collection().len(),
            dragging: book.drag_source_index(),
            drop_target: book.drag_over_index(),
        }
    }

    /// Rows can be dragged only in the unfiltered view.
    pub fn reorderable(&self) -> bool {
        !self.filtered
    }

    pub fn count_label(&self) -> String {
        count_label(self.total)
    }
}

/// "1 contact", "3 contacts".
pub fn count_label(count: usize) -> String {
    format!("{} {}", count, if count == 1 { "contact" } else { "contacts" })
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_contacts: Vec<DisplayContact>,
    pub view: ListView,
    /// Values to pre-fill the form with (set when an edit session begins).
    pub form: Option<Contact>,
    pub config: Option<RoloConfig>,
    pub config_path: Option<PathBuf>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_contacts(mut self, contacts: Vec<DisplayContact>) -> Self {
        self.affected_contacts = contacts;
        self
    }

    pub fn with_view(mut self, view: ListView) -> Self {
        self.view = view;
        self
    }

    pub fn with_form(mut self, contact: Contact) -> Self {
        self.form = Some(contact);
        self
    }

    pub fn with_config(mut self, config: RoloConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Result carrying the book's current view.
    pub fn rendered(book: &ContactBook) -> Self {
        Self::default().with_view(ListView::of(book))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_label_pluralizes() {
        assert_eq!(count_label(0), "0 contacts");
        assert_eq!(count_label(1), "1 contact");
        assert_eq!(count_label(2), "2 contacts");
    }
}
