use crate::commands::CmdResult;
use crate::session::ContactBook;

/// The current view: the collection through the book's search term.
pub fn run(book: &ContactBook) -> CmdResult {
    CmdResult::rendered(book)
}

/// Sets the search term and returns the re-filtered view.
pub fn search(book: &mut ContactBook, term: &str) -> CmdResult {
    book.set_search(term);
    // A drag cannot survive a switch into the filtered view.
    if book.is_filtered() {
        book.drag_mut().end();
    }
    run(book)
}
