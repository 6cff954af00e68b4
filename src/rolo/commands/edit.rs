//! Inline edit session.
//!
//! `begin` opens (or moves) the session, `save` commits through [`update`] and
//! closes it, `cancel` closes it without touching the collection. [`submit`] is the
//! shared form button: it updates while a session is open and creates otherwise.

use crate::commands::{create, update, CmdMessage, CmdResult, ListView};
use crate::error::{Result, RoloError};
use crate::model::Contact;
use crate::session::{ContactBook, EditState};
use crate::store::DataStore;

pub fn begin(book: &mut ContactBook, index: usize) -> Result<CmdResult> {
    let contact = book.begin_edit(index)?.clone();
    Ok(CmdResult::rendered(book).with_form(contact))
}

/// Commits the open session. A validation failure keeps the session open.
pub fn save<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    input: Contact,
) -> Result<CmdResult> {
    let index = match book.edit_state() {
        EditState::Editing(index) => index,
        EditState::Idle => {
            return Err(RoloError::Api("No contact is being edited".to_string()));
        }
    };

    let result = update::run(book, store, index, input)?;
    book.end_edit();
    Ok(result.with_view(ListView::of(book)))
}

pub fn cancel(book: &mut ContactBook) -> CmdResult {
    book.end_edit();
    let mut result = CmdResult::rendered(book);
    result.add_message(CmdMessage::info("Edit cancelled."));
    result
}

pub fn submit<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    input: Contact,
) -> Result<CmdResult> {
    match book.edit_state() {
        EditState::Editing(_) => save(book, store, input),
        EditState::Idle => create::run(book, store, input),
    }
}
