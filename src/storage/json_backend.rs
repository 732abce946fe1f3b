use std::{fs, io::ErrorKind, path::PathBuf};

use crate::core::errors::{BudgetError, Result};
use crate::utils::persistence;

use super::KeyValueStore;

const BLOB_EXTENSION: &str = "json";

/// Filesystem-backed store keeping one JSON document per key.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    pub fn new(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn blob_path(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.root.join(format!("{key}.{BLOB_EXTENSION}")))
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.blob_path(key)?;
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(BudgetError::Storage(format!(
                "failed to read `{}`: {err}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.blob_path(key)?;
        persistence::write_atomic(&path, value).map_err(|err| {
            BudgetError::Storage(format!("failed to write `{}`: {err}", path.display()))
        })
    }
}

fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '_' | '-'));
    if valid {
        Ok(())
    } else {
        Err(BudgetError::Storage(format!("invalid store key `{key}`")))
    }
}
