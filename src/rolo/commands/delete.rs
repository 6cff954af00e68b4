use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayContact;
use crate::session::ContactBook;
use crate::store::DataStore;

/// Removes the contact at canonical `index`.
///
/// **Important**: this does NOT ask for confirmation. The caller confirms first
/// (see `RoloApi::delete_contact`).
pub fn run<S: DataStore>(book: &mut ContactBook, store: &mut S, index: usize) -> Result<CmdResult> {
    let removed = book.collection_mut().remove(index)?;
    if let Err(e) = book.persist(store) {
        book.collection_mut().restore(index, removed);
        return Err(e);
    }
    tracing::debug!(index, "contact deleted");

    // An open edit on the removed entry now reads as Idle; make that explicit.
    if book.editing_index().is_none() {
        book.end_edit();
    }

    let message = CmdMessage::success("Contact deleted successfully!");
    book.post(message.clone());

    let mut result = CmdResult::rendered(book).with_affected_contacts(vec![DisplayContact {
        index,
        contact: removed.contact,
    }]);
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RoloConfig;
    use crate::error::RoloError;
    use crate::session::EditState;
    use crate::store::memory::fixtures::{numbered, StoreFixture};

    fn setup(n: usize) -> (ContactBook, StoreFixture) {
        let fixture = StoreFixture::new().with_numbered(n);
        (ContactBook::load(&fixture.store, &RoloConfig::default()), fixture)
    }

    #[test]
    fn removes_exactly_one_and_shifts() {
        let (mut book, mut fx) = setup(3);
        let result = run(&mut book, &mut fx.store, 1).unwrap();

        assert_eq!(book.collection().contacts(), vec![numbered(1), numbered(3)]);
        assert_eq!(result.affected_contacts[0].contact, numbered(2));
        assert_eq!(result.view.contacts[1].index, 1);
        assert_eq!(result.view.contacts[1].contact, numbered(3));
        assert_eq!(fx.store.write_count(), 1);
    }

    #[test]
    fn out_of_range_leaves_collection() {
        let (mut book, mut fx) = setup(3);
        let err = run(&mut book, &mut fx.store, 3).unwrap_err();
        assert!(matches!(err, RoloError::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(book.collection().len(), 3);
        assert_eq!(fx.store.write_count(), 0);
    }

    #[test]
    fn deleting_edited_contact_ends_session() {
        let (mut book, mut fx) = setup(3);
        book.begin_edit(2).unwrap();
        run(&mut book, &mut fx.store, 2).unwrap();
        assert_eq!(book.edit_state(), EditState::Idle);
    }

    #[test]
    fn deleting_earlier_contact_keeps_session_on_same_record() {
        let (mut book, mut fx) = setup(3);
        book.begin_edit(2).unwrap();
        run(&mut book, &mut fx.store, 0).unwrap();
        assert_eq!(book.edit_state(), EditState::Editing(1));
    }

    #[test]
    fn write_failure_puts_contact_back() {
        let (mut book, fx) = setup(3);
        let mut store = fx.failing();
        let ids: Vec<_> = book.collection().entries().iter().map(|e| e.id).collect();

        let err = run(&mut book, &mut store, 1).unwrap_err();
        assert!(matches!(err, RoloError::Store(_)));
        assert_eq!(
            book.collection().contacts(),
            vec![numbered(1), numbered(2), numbered(3)]
        );
        let after: Vec<_> = book.collection().entries().iter().map(|e| e.id).collect();
        assert_eq!(after, ids);
    }
}
