//! File-backed key-value storage.

use std::{
    fs, io,
    path::PathBuf,
};

use super::{KeyValueStore, StorageError};

/// Stores each namespace as a `<namespace>.json` file in a base directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();

        fs::create_dir_all(&dir).map_err(|source| StorageError::Write {
            namespace: dir.display().to_string(),
            source,
        })?;

        Ok(Self { dir })
    }

    fn path_for(&self, namespace: &str) -> PathBuf {
        self.dir.join(format!("{namespace}.json"))
    }
}

impl KeyValueStore for JsonFileStore {
    fn load(&self, namespace: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(namespace)) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                namespace: namespace.to_string(),
                source,
            }),
        }
    }

    fn save(&self, namespace: &str, payload: &str) -> Result<(), StorageError> {
        fs::write(self.path_for(namespace), payload).map_err(|source| StorageError::Write {
            namespace: namespace.to_string(),
            source,
        })
    }
}
