//! # Contact Book State
//!
//! [`ContactBook`] is the explicit state object for one contact-manager instance. It
//! owns everything that would otherwise be ambient module state:
//!
//! - the ordered [`Collection`]
//! - the [`EditSession`] (which record, if any, is in inline-edit mode)
//! - the [`DragState`] of an in-flight drag
//! - the current search term
//! - the current [`Flash`] message
//!
//! Commands take `&mut ContactBook`, so two books never share anything and tests can
//! run as many as they like side by side.
//!
//! ## Edit Session
//!
//! ```text
//!            begin_edit(i)                 begin_edit(j)
//!   Idle ─────────────────▶ Editing(i) ─────────────────▶ Editing(j)
//!    ▲                          │
//!    └──── save ok / cancel ────┘
//! ```
//!
//! The session remembers the *entry id*, not the position, so a delete or reorder
//! elsewhere in the list does not retarget an open edit. Positions are computed on
//! the way out via [`ContactBook::edit_state`]. If the edited entry disappears the
//! session reads as `Idle`.

use crate::collection::Collection;
use crate::commands::CmdMessage;
use crate::config::RoloConfig;
use crate::error::Result;
use crate::flash::Flash;
use crate::model::Contact;
use crate::reorder::DragState;
use crate::store::DataStore;
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// Internal edit session, keyed by entry id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditSession {
    #[default]
    Idle,
    Editing(Uuid),
}

/// Edit session as seen from outside, keyed by canonical index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditState {
    Idle,
    Editing(usize),
}

/// What the form's submit affordance currently does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update,
}

impl SubmitMode {
    pub fn label(self) -> &'static str {
        match self {
            SubmitMode::Create => "Add Contact",
            SubmitMode::Update => "Update Contact",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ContactBook {
    storage_key: String,
    collection: Collection,
    edit: EditSession,
    drag: DragState,
    search: String,
    flash: Option<Flash>,
    message_ttl: Duration,
}

impl ContactBook {
    pub fn new(collection: Collection, config: &RoloConfig) -> Self {
        Self {
            storage_key: config.storage_key.clone(),
            collection,
            edit: EditSession::Idle,
            drag: DragState::default(),
            search: String::new(),
            flash: None,
            message_ttl: config.message_ttl(),
        }
    }

    /// Loads the collection from `store`. Never fails; see [`Collection::load`].
    pub fn load<S: DataStore>(store: &S, config: &RoloConfig) -> Self {
        let collection = Collection::load(store, &config.storage_key);
        Self::new(collection, config)
    }

    pub fn persist<S: DataStore>(&self, store: &mut S) -> Result<()> {
        self.collection.persist(store, &self.storage_key)
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    pub fn collection(&self) -> &Collection {
        &self.collection
    }

    pub(crate) fn collection_mut(&mut self) -> &mut Collection {
        &mut self.collection
    }

    // --- Search ---

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn is_filtered(&self) -> bool {
        crate::index::is_active_term(&self.search)
    }

    // --- Edit session ---

    pub fn edit_state(&self) -> EditState {
        match self.editing_index() {
            Some(index) => EditState::Editing(index),
            None => EditState::Idle,
        }
    }

    pub fn editing_index(&self) -> Option<usize> {
        match self.edit {
            EditSession::Idle => None,
            EditSession::Editing(id) => self.collection.position(&id),
        }
    }

    pub fn submit_mode(&self) -> SubmitMode {
        match self.edit_state() {
            EditState::Idle => SubmitMode::Create,
            EditState::Editing(_) => SubmitMode::Update,
        }
    }

    /// Enters edit mode on `index`, replacing any open session.
    /// Returns the record so the caller can pre-fill its form.
    pub fn begin_edit(&mut self, index: usize) -> Result<&Contact> {
        self.collection.check_index(index)?;
        let entry = &self.collection.entries()[index];
        if let EditSession::Editing(previous) = self.edit {
            if previous != entry.id {
                tracing::debug!(index, "edit session replaced");
            }
        }
        self.edit = EditSession::Editing(entry.id);
        Ok(&entry.contact)
    }

    pub fn end_edit(&mut self) {
        self.edit = EditSession::Idle;
    }

    // --- Drag ---

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    pub(crate) fn drag_mut(&mut self) -> &mut DragState {
        &mut self.drag
    }

    /// Canonical index of the drag source, if a drag is in flight.
    pub fn drag_source_index(&self) -> Option<usize> {
        self.drag.source().and_then(|id| self.collection.position(&id))
    }

    /// Canonical index of the highlighted drop target.
    pub fn drag_over_index(&self) -> Option<usize> {
        self.drag.over().and_then(|id| self.collection.position(&id))
    }

    // --- Flash ---

    pub fn flash(&self) -> Option<&Flash> {
        self.flash.as_ref()
    }

    pub fn post(&mut self, message: CmdMessage) {
        self.post_at(message, Utc::now());
    }

    pub fn post_at(&mut self, message: CmdMessage, now: DateTime<Utc>) {
        self.flash = Some(Flash::new(message, now, self.message_ttl));
    }

    /// Drops the flash once it has expired. Returns `true` if it was cleared.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if self.flash.as_ref().is_some_and(|f| f.is_expired(now)) {
            self.flash = None;
            return true;
        }
        false
    }
}
