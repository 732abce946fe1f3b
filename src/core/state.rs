//! In-memory ledger session: everything the services mutate and the view reads.

use tracing::info;

use crate::core::errors::{BudgetError, Result};
use crate::domain::{BudgetTable, Ledger, MonthKey, TagBoard, Transaction};
use crate::storage::PersistentStore;

pub const DEFAULT_CURRENCY: &str = "₹";

#[derive(Debug, Clone, PartialEq)]
pub struct LedgerState {
    ledger: Ledger,
    budgets: BudgetTable,
    currency: String,
    selected: MonthKey,
    tags: TagBoard,
}

impl LedgerState {
    pub fn new(selected: MonthKey) -> Self {
        Self {
            ledger: Ledger::new(),
            budgets: BudgetTable::new(),
            currency: DEFAULT_CURRENCY.to_string(),
            selected,
            tags: TagBoard::default(),
        }
    }

    /// Restores the persisted blobs; absent blobs start empty and an absent
    /// currency falls back to `default_currency`.
    pub fn load(store: &PersistentStore, selected: MonthKey, default_currency: &str) -> Result<Self> {
        let ledger = store.load_transactions()?;
        let budgets = store.load_budgets()?;
        let currency = store
            .load_currency()?
            .unwrap_or_else(|| default_currency.to_string());
        info!(
            months = ledger.len(),
            budgets = budgets.len(),
            "ledger state loaded"
        );
        Ok(Self {
            ledger,
            budgets,
            currency,
            selected,
            tags: TagBoard::default(),
        })
    }

    pub fn selected_month(&self) -> MonthKey {
        self.selected
    }

    /// Switches the visible month. Selection is view state and is never persisted.
    pub fn set_selected_month(&mut self, key: MonthKey) {
        self.selected = key;
    }

    pub fn selected_transactions(&self) -> &[Transaction] {
        self.ledger
            .get(&self.selected)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn selected_budget(&self) -> Option<f64> {
        self.budgets.get(&self.selected).copied()
    }

    /// Exact sum of the selected month's amounts; no rounding.
    pub fn selected_total(&self) -> f64 {
        self.selected_transactions()
            .iter()
            .map(|txn| txn.amount)
            .sum()
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetTable {
        &self.budgets
    }

    pub fn tags(&self) -> &TagBoard {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagBoard {
        &mut self.tags
    }

    pub(crate) fn push_transaction(&mut self, txn: Transaction) -> usize {
        let entries = self.ledger.entry(self.selected).or_default();
        entries.push(txn);
        entries.len() - 1
    }

    pub(crate) fn check_index(&self, index: usize) -> Result<()> {
        let len = self.selected_transactions().len();
        if index < len {
            Ok(())
        } else {
            Err(BudgetError::IndexOutOfRange { index, len })
        }
    }

    pub(crate) fn remove_transaction(&mut self, index: usize) -> Result<Transaction> {
        self.check_index(index)?;
        let entries = self
            .ledger
            .get_mut(&self.selected)
            .ok_or(BudgetError::IndexOutOfRange { index, len: 0 })?;
        Ok(entries.remove(index))
    }

    pub(crate) fn set_selected_budget(&mut self, value: f64) -> Option<f64> {
        self.budgets.insert(self.selected, value)
    }

    pub(crate) fn set_currency(&mut self, symbol: String) {
        self.currency = symbol;
    }
}
