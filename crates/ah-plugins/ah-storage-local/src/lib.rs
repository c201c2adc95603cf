//! # ah-storage-local
//!
//! Local filesystem implementation of `KeyValueStore`.
//! Each key is one `<key>.json` file under the root directory. Writes go to a
//! temporary sibling first and are renamed into place, so a crash leaves
//! either the old value or the new one.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use ah_core::error::StorageError;
use ah_core::traits::KeyValueStore;

#[derive(Debug, Clone)]
pub struct LocalKeyValueStore {
    /// Directory holding one file per key (e.g., "./data/store")
    root_path: PathBuf,
}

impl LocalKeyValueStore {
    /// Opens `root`, creating it if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let root_path = root.into();
        fs::create_dir_all(&root_path)?;
        tracing::debug!(root = %root_path.display(), "opened local store");
        Ok(Self { root_path })
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    /// Maps a key to its file. Keys are restricted to ASCII alphanumerics,
    /// `_` and `-` so they can never escape the root.
    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root_path.join(format!("{key}.json")))
    }
}

impl KeyValueStore for LocalKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let tmp_path = path.with_extension("json.tmp");
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(value.as_bytes())?;
            file.sync_all()?;
        }
        fs::rename(&tmp_path, &path)?;
        tracing::trace!(key, bytes = value.len(), "local set");
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        LocalKeyValueStore::open(dir.path()).unwrap().set("ah_users", "[]").unwrap();

        let reopened = LocalKeyValueStore::open(dir.path()).unwrap();
        assert_eq!(reopened.get("ah_users").unwrap().as_deref(), Some("[]"));
        assert!(dir.path().join("ah_users.json").exists());
        assert!(!dir.path().join("ah_users.json.tmp").exists());
    }

    #[test]
    fn test_missing_key_and_remove() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKeyValueStore::open(dir.path().join("nested/root")).unwrap();
        assert_eq!(store.get("ah_seeded").unwrap(), None);

        store.set("ah_seeded", "true").unwrap();
        store.remove("ah_seeded").unwrap();
        store.remove("ah_seeded").unwrap();
        assert_eq!(store.get("ah_seeded").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocalKeyValueStore::open(dir.path()).unwrap();
        for key in ["../escape", "a/b", "", "dot.dot"] {
            assert!(matches!(store.set(key, "x"), Err(StorageError::InvalidKey(_))));
        }
    }
}
