use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, RoloError};
use crate::index::DisplayContact;
use crate::model::Contact;
use crate::session::ContactBook;
use crate::store::DataStore;
use crate::validation::validate_contact;

pub fn run<S: DataStore>(
    book: &mut ContactBook,
    store: &mut S,
    input: Contact,
) -> Result<CmdResult> {
    let contact = input.trimmed();

    if let Err(e) = validate_contact(&contact) {
        book.post(CmdMessage::error(e.to_string()));
        return Err(RoloError::Validation(e));
    }

    let index = book.collection_mut().push(contact.clone());
    if let Err(e) = book.persist(store) {
        book.collection_mut().remove(index)?;
        return Err(e);
    }
    tracing::debug!(index, "contact added");

    let message = CmdMessage::success("Contact added successfully!");
    book.post(message.clone());

    let mut result = CmdResult::rendered(book)
        .with_affected_contacts(vec![DisplayContact { index, contact }]);
    result.add_message(message);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::Collection;
    use crate::commands::MessageLevel;
    use crate::config::RoloConfig;
    use crate::error::ValidationError;
    use crate::store::memory::fixtures::{numbered, StoreFixture};
    use crate::store::memory::InMemoryStore;

    fn empty() -> (ContactBook, InMemoryStore) {
        let store = InMemoryStore::new();
        (ContactBook::load(&store, &RoloConfig::default()), store)
    }

    #[test]
    fn appends_and_persists() {
        let (mut book, mut store) = empty();
        run(&mut book, &mut store, Contact::new("Ada", "ada@x.io", "5551234567")).unwrap();
        let bob = Contact::new("Bob", "bob@x.io", "5557654321");
        let result = run(&mut book, &mut store, bob).unwrap();

        assert_eq!(result.affected_contacts[0].index, 1);
        assert_eq!(result.view.total, 2);
        assert_eq!(result.messages[0].content, "Contact added successfully!");

        let reloaded = Collection::load(&store, "contacts");
        assert_eq!(reloaded.contacts(), book.collection().contacts());
    }

    #[test]
    fn trims_before_storing() {
        let (mut book, mut store) = empty();
        run(&mut book, &mut store, Contact::new(" Ada ", " ada@x.io", "5551234567 ")).unwrap();
        assert_eq!(
            book.collection().get(0).unwrap().contact,
            Contact::new("Ada", "ada@x.io", "5551234567")
        );
    }

    #[test]
    fn whitespace_only_field_is_missing() {
        let (mut book, mut store) = empty();
        let blank_name = Contact::new("   ", "a@b.co", "5551234567");
        let err = run(&mut book, &mut store, blank_name).unwrap_err();
        assert!(matches!(err, RoloError::Validation(ValidationError::MissingField)));
    }

    #[test]
    fn rejection_changes_nothing_and_posts_error() {
        let (mut book, mut store) = empty();
        let no_tld = Contact::new("Ada", "ada@nowhere", "5551234567");
        let err = run(&mut book, &mut store, no_tld).unwrap_err();

        assert!(matches!(err, RoloError::Validation(ValidationError::InvalidEmail)));
        assert!(book.collection().is_empty());
        assert_eq!(store.write_count(), 0);

        let flash = book.flash().unwrap();
        assert_eq!(flash.level(), MessageLevel::Error);
        assert_eq!(flash.text(), "Please enter a valid email address.");
    }

    #[test]
    fn short_phone_rejected() {
        let (mut book, mut store) = empty();
        let short_phone = Contact::new("Ada", "ada@x.io", "555-0199");
        let err = run(&mut book, &mut store, short_phone).unwrap_err();
        assert!(matches!(err, RoloError::Validation(ValidationError::InvalidPhone)));
    }

    #[test]
    fn view_respects_active_search() {
        let (mut book, mut store) = empty();
        book.set_search("bob");
        let ada = Contact::new("Ada", "ada@x.io", "5551234567");
        let result = run(&mut book, &mut store, ada).unwrap();
        assert!(result.view.filtered);
        assert!(result.view.contacts.is_empty());
        assert_eq!(result.view.total, 1);
    }

    #[test]
    fn write_failure_rolls_back() {
        let fx = StoreFixture::new().with_numbered(2);
        let mut book = ContactBook::load(&fx.store, &RoloConfig::default());
        let mut store = fx.failing();

        let err = run(&mut book, &mut store, numbered(3)).unwrap_err();
        assert!(matches!(err, RoloError::Store(_)));
        assert_eq!(book.collection().contacts(), vec![numbered(1), numbered(2)]);
    }
}
