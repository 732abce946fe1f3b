pub mod json_backend;
pub mod memory;

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::{
    core::errors::{BudgetError, Result},
    domain::{BudgetTable, Ledger},
};

pub use json_backend::JsonFileStore;
pub use memory::MemoryStore;

pub const CURRENCY_KEY: &str = "currency";
pub const BUDGETS_KEY: &str = "budgets";
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Durable string-valued key-value namespace.
///
/// A `set` must replace the whole value for its key in one step: readers see
/// either the previous value or the new one, never a mix.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// Typed JSON view over a [`KeyValueStore`] holding the three ledger blobs.
pub struct PersistentStore {
    backend: Box<dyn KeyValueStore>,
}

impl PersistentStore {
    pub fn new(backend: Box<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(MemoryStore::new()))
    }

    /// Loads and decodes `key`, falling back to `T::default()` when absent.
    pub fn load<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        match self.backend.get(key)? {
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                BudgetError::Storage(format!("stored `{key}` is unreadable: {err}"))
            }),
            None => Ok(T::default()),
        }
    }

    pub fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.backend.set(key, &json)?;
        debug!(key, bytes = json.len(), "persisted blob");
        Ok(())
    }

    /// Currency symbol, or `None` when never stored.
    ///
    /// Older stores kept the bare symbol rather than a JSON string; both load.
    pub fn load_currency(&self) -> Result<Option<String>> {
        let Some(raw) = self.backend.get(CURRENCY_KEY)? else {
            return Ok(None);
        };
        let symbol = serde_json::from_str::<String>(&raw).unwrap_or(raw);
        Ok(Some(symbol).filter(|value| !value.trim().is_empty()))
    }

    pub fn load_budgets(&self) -> Result<BudgetTable> {
        self.load(BUDGETS_KEY)
    }

    pub fn load_transactions(&self) -> Result<Ledger> {
        self.load(TRANSACTIONS_KEY)
    }

    pub fn save_currency(&self, symbol: &str) -> Result<()> {
        self.save(CURRENCY_KEY, symbol)
    }

    pub fn save_budgets(&self, budgets: &BudgetTable) -> Result<()> {
        self.save(BUDGETS_KEY, budgets)
    }

    pub fn save_transactions(&self, ledger: &Ledger) -> Result<()> {
        self.save(TRANSACTIONS_KEY, ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MonthKey, Transaction};

    fn month(index: u8) -> MonthKey {
        MonthKey::new(index).unwrap()
    }

    #[test]
    fn absent_keys_load_as_defaults() {
        let store = PersistentStore::in_memory();
        assert!(store.load_transactions().unwrap().is_empty());
        assert!(store.load_budgets().unwrap().is_empty());
        assert_eq!(store.load_currency().unwrap(), None);
    }

    #[test]
    fn blobs_use_string_month_keys() {
        let backend = MemoryStore::new();
        let mut budgets = BudgetTable::new();
        budgets.insert(month(3), 100.0);
        let mut ledger = Ledger::new();
        ledger.insert(
            month(3),
            vec![Transaction::new("Coffee", -4.5, "now", vec!["Card".into()])],
        );

        let store = PersistentStore::new(Box::new(backend.clone()));
        store.save_budgets(&budgets).unwrap();
        store.save_transactions(&ledger).unwrap();
        store.save_currency("$").unwrap();

        assert_eq!(backend.get(BUDGETS_KEY).unwrap().unwrap(), r#"{"3":100.0}"#);
        assert_eq!(
            backend.get(TRANSACTIONS_KEY).unwrap().unwrap(),
            r#"{"3":[{"desc":"Coffee","amount":-4.5,"timestamp":"now","tags":["Card"]}]}"#
        );
        assert_eq!(backend.get(CURRENCY_KEY).unwrap().unwrap(), r#""$""#);
    }

    #[test]
    fn bare_currency_symbol_still_loads() {
        let backend = MemoryStore::new();
        backend.set(CURRENCY_KEY, "€").unwrap();
        let store = PersistentStore::new(Box::new(backend));
        assert_eq!(store.load_currency().unwrap().as_deref(), Some("€"));
    }

    #[test]
    fn unknown_month_key_is_a_storage_error() {
        let backend = MemoryStore::new();
        backend.set(BUDGETS_KEY, r#"{"12":50}"#).unwrap();
        let store = PersistentStore::new(Box::new(backend));
        let err = store.load_budgets().expect_err("month 12 must be rejected");
        assert!(matches!(err, BudgetError::Storage(ref message) if message.contains("budgets")));
    }
}
