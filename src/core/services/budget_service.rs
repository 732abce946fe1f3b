use tracing::{debug, info, warn};

use crate::core::confirm::{Confirmer, OVERWRITE_BUDGET_PROMPT};
use crate::core::services::{parse_finite, Outcome, ServiceError, ServiceResult};
use crate::core::state::LedgerState;
use crate::storage::PersistentStore;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetChange {
    pub previous: Option<f64>,
    pub current: f64,
}

pub struct BudgetService;

impl BudgetService {
    /// Sets the selected month's budget ceiling from raw input.
    ///
    /// Replacing a different existing value asks first; a fresh budget or an
    /// identical value is written straight away.
    pub fn set(
        state: &mut LedgerState,
        store: &PersistentStore,
        raw_value: &str,
        confirmer: &mut dyn Confirmer,
    ) -> ServiceResult<Outcome<BudgetChange>> {
        let value = parse_finite(raw_value, "budget")?;
        let previous = state.selected_budget();
        if let Some(existing) = previous {
            if existing != value && !confirmer.confirm(OVERWRITE_BUDGET_PROMPT) {
                debug!(existing, requested = value, "budget overwrite declined");
                return Ok(Outcome::Declined);
            }
        }
        state.set_selected_budget(value);
        info!(month = %state.selected_month(), budget = value, "budget set");
        store.save_budgets(state.budgets()).map_err(|err| {
            warn!(error = %err, "budgets not persisted");
            ServiceError::Unpersisted(err)
        })?;
        Ok(Outcome::Applied(BudgetChange {
            previous,
            current: value,
        }))
    }
}
