use tracing::{info, warn};

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::state::LedgerState;
use crate::storage::PersistentStore;

pub struct CurrencyService;

impl CurrencyService {
    /// Replaces the display symbol used for every month.
    pub fn set(state: &mut LedgerState, store: &PersistentStore, symbol: &str) -> ServiceResult<()> {
        let symbol = symbol.trim();
        if symbol.is_empty() {
            return Err(ServiceError::Validation(
                "Please enter a currency symbol.".into(),
            ));
        }
        state.set_currency(symbol.to_string());
        info!(currency = symbol, "currency changed");
        store.save_currency(symbol).map_err(|err| {
            warn!(error = %err, "currency not persisted");
            ServiceError::Unpersisted(err)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MonthKey;

    #[test]
    fn currency_is_trimmed_and_persisted() {
        let mut state = LedgerState::new(MonthKey::new(0).unwrap());
        let store = PersistentStore::in_memory();
        CurrencyService::set(&mut state, &store, " $ ").unwrap();
        assert_eq!(state.currency(), "$");
        assert_eq!(store.load_currency().unwrap().as_deref(), Some("$"));
    }

    #[test]
    fn blank_symbol_is_rejected() {
        let mut state = LedgerState::new(MonthKey::new(0).unwrap());
        let store = PersistentStore::in_memory();
        assert!(CurrencyService::set(&mut state, &store, "  ").is_err());
        assert_eq!(state.currency(), "₹");
    }
}
