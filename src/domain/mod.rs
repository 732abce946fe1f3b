//! Month-bucketed ledger data model.

pub mod month;
pub mod tags;
pub mod transaction;

use std::collections::BTreeMap;

pub use month::{MonthKey, MonthKeyError};
pub use tags::{TagBoard, TagGroup, TagGroupError};
pub use transaction::{EntryKind, Transaction};

/// Transactions per month, in insertion order.
pub type Ledger = BTreeMap<MonthKey, Vec<Transaction>>;

/// Budget ceiling per month; a missing key means no budget is set.
pub type BudgetTable = BTreeMap<MonthKey, f64>;
