pub mod budget_service;
pub mod currency_service;
pub mod tag_service;
pub mod transaction_service;

pub use budget_service::{BudgetChange, BudgetService};
pub use currency_service::CurrencyService;
pub use tag_service::TagService;
pub use transaction_service::{TransactionDraft, TransactionService};

use crate::core::errors::BudgetError;

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("No transaction at position {index} (month has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// The change is live in memory but could not be written to the store.
    #[error("Change kept for this session but not saved: {0}")]
    Unpersisted(#[source] BudgetError),
    #[error(transparent)]
    Core(BudgetError),
}

impl From<BudgetError> for ServiceError {
    fn from(err: BudgetError) -> Self {
        match err {
            BudgetError::Validation(message) => ServiceError::Validation(message),
            BudgetError::IndexOutOfRange { index, len } => {
                ServiceError::IndexOutOfRange { index, len }
            }
            other => ServiceError::Core(other),
        }
    }
}

/// Result of a confirmation-gated action.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Applied(T),
    Declined,
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Parses user-entered money text as a finite number.
pub(crate) fn parse_finite(raw: &str, what: &str) -> ServiceResult<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ServiceError::Validation(format!("Please enter a valid {what}.")))
}
