//! Recording and removing entries for the selected month.

use tracing::{debug, info, warn};

use crate::core::clock::Clock;
use crate::core::confirm::{Confirmer, REMOVE_TRANSACTION_PROMPT};
use crate::core::services::{parse_finite, Outcome, ServiceError, ServiceResult};
use crate::core::state::LedgerState;
use crate::domain::Transaction;
use crate::storage::PersistentStore;

/// Validated input for a new entry.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub description: String,
    pub amount: f64,
    pub tags: Vec<String>,
}

impl TransactionDraft {
    pub fn new(description: impl Into<String>, amount: f64, tags: Vec<String>) -> Self {
        Self {
            description: description.into(),
            amount,
            tags,
        }
    }

    /// Builds a draft from raw form text.
    pub fn parse(description: &str, amount: &str, tags: Vec<String>) -> ServiceResult<Self> {
        let draft = Self::new(description.trim(), parse_finite(amount, "amount")?, tags);
        draft.validate()?;
        Ok(draft)
    }

    fn validate(&self) -> ServiceResult<()> {
        if self.description.trim().is_empty() || !self.amount.is_finite() {
            return Err(ServiceError::Validation(
                "Please enter valid inputs.".into(),
            ));
        }
        Ok(())
    }
}

pub struct TransactionService;

impl TransactionService {
    /// Appends the draft to the selected month and persists the ledger.
    /// Returns the new entry's position.
    pub fn add(
        state: &mut LedgerState,
        store: &PersistentStore,
        draft: TransactionDraft,
        clock: &dyn Clock,
    ) -> ServiceResult<usize> {
        draft.validate()?;
        let txn = Transaction::new(
            draft.description.trim(),
            draft.amount,
            clock.timestamp(),
            draft.tags,
        );
        let index = state.push_transaction(txn);
        info!(
            month = %state.selected_month(),
            index,
            "transaction recorded"
        );
        persist(state, store)?;
        Ok(index)
    }

    /// Removes the entry at `index` after the user confirms.
    pub fn remove(
        state: &mut LedgerState,
        store: &PersistentStore,
        index: usize,
        confirmer: &mut dyn Confirmer,
    ) -> ServiceResult<Outcome<Transaction>> {
        state.check_index(index)?;
        if !confirmer.confirm(REMOVE_TRANSACTION_PROMPT) {
            debug!(index, "removal declined");
            return Ok(Outcome::Declined);
        }
        let removed = state.remove_transaction(index)?;
        info!(
            month = %state.selected_month(),
            index,
            "transaction removed"
        );
        persist(state, store)?;
        Ok(Outcome::Applied(removed))
    }

    pub fn total_for_selected_month(state: &LedgerState) -> f64 {
        state.selected_total()
    }
}

fn persist(state: &LedgerState, store: &PersistentStore) -> ServiceResult<()> {
    store.save_transactions(state.ledger()).map_err(|err| {
        warn!(error = %err, "transactions not persisted");
        ServiceError::Unpersisted(err)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::confirm::ScriptedConfirmer;
    use crate::domain::MonthKey;
    use crate::storage::MemoryStore;

    fn setup() -> (LedgerState, PersistentStore) {
        (
            LedgerState::new(MonthKey::new(3).unwrap()),
            PersistentStore::in_memory(),
        )
    }

    fn clock() -> FixedClock {
        FixedClock("3/15/2026, 9:03:12 AM".into())
    }

    #[test]
    fn coffee_lands_in_selected_month_with_tags() {
        let (mut state, store) = setup();
        let draft = TransactionDraft::new("Coffee", -4.5, vec!["Card".into()]);
        let index = TransactionService::add(&mut state, &store, draft, &clock()).unwrap();
        assert_eq!(index, 0);
        let entries = state.selected_transactions();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description, "Coffee");
        assert_eq!(entries[0].amount, -4.5);
        assert_eq!(entries[0].tags, vec!["Card".to_string()]);
        assert_eq!(entries[0].timestamp, "3/15/2026, 9:03:12 AM");
        assert_eq!(TransactionService::total_for_selected_month(&state), -4.5);
        assert_eq!(store.load_transactions().unwrap(), *state.ledger());
    }

    #[test]
    fn invalid_drafts_leave_state_untouched() {
        let (mut state, store) = setup();
        assert!(TransactionDraft::parse("   ", "5", Vec::new()).is_err());
        assert!(TransactionDraft::parse("Lunch", "five", Vec::new()).is_err());

        let hand_built = TransactionDraft::new("Lunch", f64::NAN, Vec::new());
        let err = TransactionService::add(&mut state, &store, hand_built, &clock()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(state.ledger().is_empty());
        assert!(store.load_transactions().unwrap().is_empty());
    }

    #[test]
    fn parse_trims_description() {
        let draft = TransactionDraft::parse("  Rent ", "-900", Vec::new()).unwrap();
        assert_eq!(draft.description, "Rent");
        assert_eq!(draft.amount, -900.0);
    }

    #[test]
    fn out_of_range_removal_never_prompts() {
        let (mut state, store) = setup();
        let mut confirmer = ScriptedConfirmer::new([true]);
        let err = TransactionService::remove(&mut state, &store, 0, &mut confirmer).unwrap_err();
        assert!(matches!(err, ServiceError::IndexOutOfRange { index: 0, len: 0 }));
        assert!(!confirmer.was_prompted());
    }

    #[test]
    fn declined_removal_keeps_entry() {
        let (mut state, store) = setup();
        let draft = TransactionDraft::new("Book", -12.0, Vec::new());
        TransactionService::add(&mut state, &store, draft, &clock()).unwrap();
        let mut confirmer = ScriptedConfirmer::new([false]);
        let outcome = TransactionService::remove(&mut state, &store, 0, &mut confirmer).unwrap();
        assert_eq!(outcome, Outcome::Declined);
        assert_eq!(confirmer.prompts, vec![REMOVE_TRANSACTION_PROMPT.to_string()]);
        assert_eq!(state.selected_transactions().len(), 1);
    }

    #[test]
    fn storage_failure_keeps_memory_change_and_reports_it() {
        let mut state = LedgerState::new(MonthKey::new(0).unwrap());
        let store = PersistentStore::new(Box::new(MemoryStore::with_quota(8)));
        let draft = TransactionDraft::new("Groceries", -30.0, Vec::new());
        let err = TransactionService::add(&mut state, &store, draft, &clock()).unwrap_err();
        assert!(matches!(err, ServiceError::Unpersisted(_)));
        assert_eq!(state.selected_transactions().len(), 1);
    }
}
