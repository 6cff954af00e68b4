//! Reordering, directly and through the drag lifecycle.
//!
//! A drag goes `drag_start` → any number of `drag_over`/`drag_leave` → `drop_on`
//! (optional) → `drag_end`. Only `drop_on` changes the collection. `drag_end` always
//! runs and always clears the transient state, so a drag the platform aborted
//! leaves nothing behind.
//!
//! Reordering is not available in a filtered view: drags refuse to start and a
//! direct [`run`] leaves the order alone.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::session::ContactBook;
use crate::store::DataStore;

/// Moves `source` onto `target` (canonical indexes). Stale or equal indexes are a no-op.
pub fn run<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    source: usize,
    target: usize,
) -> Result<CmdResult> {
    if book.is_filtered() {
        let mut result = CmdResult::rendered(book);
        result.add_message(CmdMessage::warning(
            "Contacts cannot be reordered while a search is active.",
        ));
        return Ok(result);
    }

    let before = book.collection().clone();
    if !book.collection_mut().move_entry(source, target) {
        tracing::debug!(source, target, "reorder ignored");
        return Ok(CmdResult::rendered(book));
    }

    if let Err(e) = book.persist(store) {
        *book.collection_mut() = before;
        return Err(e);
    }
    tracing::debug!(source, target, "contact moved");

    let landed = crate::reorder::insertion_index(source, target);
    let mut result = CmdResult::rendered(book);
    if let Some(moved) = result.view.contacts.get(landed).cloned() {
        result.add_message(CmdMessage::success(format!(
            "Moved {} to position {}",
            moved.contact.name,
            DisplayIndex::from_canonical(landed)
        )));
        result.affected_contacts.push(moved);
    }
    Ok(result)
}

/// Begins dragging the row at `index`. Returns `false` when the row cannot be dragged.
pub fn drag_start(book: &mut ContactBook, index: usize) -> bool {
    if book.is_filtered() || book.editing_index() == Some(index) {
        return false;
    }
    let Some(id) = book.collection().get(index).map(|e| e.id) else {
        return false;
    };
    book.drag_mut().start(id);
    true
}

/// Highlights `index` as the drop target while a drag is in flight.
pub fn drag_over(book: &mut ContactBook, index: usize) {
    if !book.drag().is_dragging() {
        return;
    }
    if let Some(id) = book.collection().get(index).map(|e| e.id) {
        book.drag_mut().enter(id);
    }
}

pub fn drag_leave(book: &mut ContactBook, index: usize) {
    if let Some(id) = book.collection().get(index).map(|e| e.id) {
        book.drag_mut().leave(id);
    }
}

/// Drops the dragged row onto `target`.
pub fn drop_on<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    target: usize,
) -> Result<CmdResult> {
    let source = book
        .drag_mut()
        .take_source()
        .and_then(|id| book.collection().position(&id));

    match source {
        Some(source) if source != target => run(book, store, source, target),
        _ => Ok(CmdResult::rendered(book)),
    }
}

pub fn drag_end(book: &mut ContactBook) {
    book.drag_mut().end();
}
