use std::{
    collections::HashMap,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::core::errors::{BudgetError, Result};

use super::KeyValueStore;

/// Process-local store. Clones share the same entries.
///
/// An optional byte quota mirrors the size cap of browser-style origin
/// storage: a write that would exceed it is refused and leaves the prior
/// value in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: Arc::default(),
            quota: Some(bytes),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| BudgetError::Storage("memory store lock poisoned".into()))
    }
}

fn footprint(entries: &HashMap<String, String>) -> usize {
    entries
        .iter()
        .map(|(key, value)| key.len() + value.len())
        .sum()
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.lock()?;
        if let Some(limit) = self.quota {
            let current = footprint(&entries);
            let replaced = entries.get(key).map(|old| key.len() + old.len()).unwrap_or(0);
            let projected = current - replaced + key.len() + value.len();
            if projected > limit {
                return Err(BudgetError::Storage(format!(
                    "quota exceeded writing `{key}` ({projected} of {limit} bytes)"
                )));
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let store = MemoryStore::new();
        let view = store.clone();
        store.set("budgets", "{}").unwrap();
        assert_eq!(view.get("budgets").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn quota_rejects_oversized_write_and_keeps_previous_value() {
        let store = MemoryStore::with_quota(20);
        store.set("k", "short").unwrap();
        let err = store.set("k", "a value that is far too long").unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
        assert_eq!(store.get("k").unwrap().as_deref(), Some("short"));
        store.set("j", "0123456789012").unwrap();
        assert!(store.set("j", "01234567890123").is_err());
    }

    #[test]
    fn quota_counts_replacement_not_accumulation() {
        let store = MemoryStore::with_quota(10);
        store.set("k", "123456789").unwrap();
        store.set("k", "987654321").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("987654321"));
    }
}
