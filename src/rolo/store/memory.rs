use super::DataStore;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default, Debug, Clone)]
pub struct InMemoryStore {
    items: HashMap<String, String>,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set_item` calls seen so far.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl DataStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::RoloError;
    use crate::model::Contact;
    use crate::store::CONTACTS_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        /// Seeds the store with `contacts` serialized under the default key.
        pub fn with_contacts(mut self, contacts: &[Contact]) -> Self {
            let json = serde_json::to_string(contacts).unwrap();
            self.store.set_item(CONTACTS_KEY, &json).unwrap();
            self.store.writes = 0;
            self
        }

        /// Seeds `count` valid contacts named "Contact 1", "Contact 2", ...
        pub fn with_numbered(self, count: usize) -> Self {
            let contacts: Vec<_> = (1..=count).map(numbered).collect();
            self.with_contacts(&contacts)
        }

        /// Same contents, but every write fails.
        pub fn failing(self) -> FailingStore {
            FailingStore { inner: self.store }
        }

        pub fn with_raw(mut self, raw: &str) -> Self {
            self.store.set_item(CONTACTS_KEY, raw).unwrap();
            self.store.writes = 0;
            self
        }
    }

    /// Reads through to `inner`; every write and remove fails.
    #[derive(Debug, Default)]
    pub struct FailingStore {
        pub inner: InMemoryStore,
    }

    impl DataStore for FailingStore {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            self.inner.get_item(key)
        }

        fn set_item(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(RoloError::Store("disk full".to_string()))
        }

        fn remove_item(&mut self, _key: &str) -> Result<()> {
            Err(RoloError::Store("disk full".to_string()))
        }
    }

    pub fn numbered(n: usize) -> Contact {
        Contact::new(
            format!("Contact {}", n),
            format!("contact{}@example.com", n),
            format!("555000{:04}", n),
        )
    }
}
