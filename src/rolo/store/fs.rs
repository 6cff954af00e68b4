use super::{check_key, DataStore};
use crate::error::{Result, RoloError};
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn item_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RoloError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        check_key(key)?;
        let path = self.item_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(RoloError::Io)?;
        Ok(Some(content))
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        check_key(key)?;
        self.ensure_dir()?;

        // Atomic write
        let tmp_path = self.root.join(format!(".{}-{}.tmp", key, Uuid::new_v4()));
        fs::write(&tmp_path, value).map_err(RoloError::Io)?;
        fs::rename(&tmp_path, self.item_path(key)).map_err(RoloError::Io)?;

        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        check_key(key)?;
        let path = self.item_path(key);
        if path.exists() {
            fs::remove_file(path).map_err(RoloError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get_item("contacts").unwrap(), None);
    }

    #[test]
    fn set_creates_root_and_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("rolo");
        let mut store = FileStore::new(root.clone());

        store.set_item("contacts", "[]").unwrap();

        assert!(root.join("contacts.json").exists());
        assert_eq!(store.get_item("contacts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn set_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set_item("contacts", "[1]").unwrap();
        store.set_item("contacts", "[2]").unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["contacts.json".to_string()]);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        store.set_item("contacts", "[]").unwrap();
        store.remove_item("contacts").unwrap();
        store.remove_item("contacts").unwrap();
        assert_eq!(store.get_item("contacts").unwrap(), None);
    }

    #[test]
    fn rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());
        assert!(matches!(
            store.set_item("../escape", "x"),
            Err(RoloError::Store(_))
        ));
    }

    #[test]
    fn never_writes_over_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("config.json");
        fs::write(&config_path, "{}").unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        assert!(store.set_item("config", "[]").is_err());
        assert_eq!(fs::read_to_string(config_path).unwrap(), "{}");
    }
}
