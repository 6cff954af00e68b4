use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::index::DisplayContact;
use crate::model::Contact;
use crate::session::ContactBook;
use crate::store::DataStore;
use crate::validation::validate_contact;

/// Replaces the contact at canonical `index`.
///
/// The index is checked before the input, so a stale index is reported as such even
/// when the input is also bad.
pub fn run<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    index: usize,
    input: Contact,
) -> Result<CmdResult> {
    book.collection().check_index(index)?;

    let contact = input.trimmed();
    if let Err(e) = validate_contact(&contact) {
        book.post(CmdMessage::error(e.to_string()));
        return Err(RoloError::Validation(e));
    }

    let previous = book.collection().get(index).map(|e| e.contact.clone());
    book.collection_mut().replace(index, contact.clone())?;
    if let Err(e) = book.persist(store) {
        if let Some(previous) = previous {
            book.collection_mut().replace(index, previous)?;
        }
        return Err(e);
    }
    tracing::debug!(index, "contact updated");

    let message = CmdMessage::success("Contact updated successfully!");
    book.post(message.clone());

    let mut result = CmdResult::rendered(book)
        .with_affected_contacts(vec![DisplayContact { index, contact }]);
    result.add_message(message);
    Ok(result)
}
