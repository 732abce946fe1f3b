pub mod clock;
pub mod confirm;
pub mod errors;
pub mod services;
pub mod state;

pub use state::LedgerState;
