use serde::{Deserialize, Serialize};

/// Whether an entry adds to or draws from the month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn of(amount: f64) -> Self {
        if amount < 0.0 {
            EntryKind::Expense
        } else {
            EntryKind::Income
        }
    }
}

/// A single recorded income or expense line within a month.
///
/// Field names on disk stay `desc`/`amount`/`timestamp`/`tags` so existing
/// stores keep loading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "desc")]
    pub description: String,
    pub amount: f64,
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Transaction {
    pub fn new(
        description: impl Into<String>,
        amount: f64,
        timestamp: impl Into<String>,
        tags: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            timestamp: timestamp.into(),
            tags,
        }
    }

    pub fn kind(&self) -> EntryKind {
        EntryKind::of(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_counts_as_income() {
        assert_eq!(EntryKind::of(0.0), EntryKind::Income);
        assert_eq!(EntryKind::of(-0.01), EntryKind::Expense);
    }

    #[test]
    fn uses_compact_wire_names() {
        let txn = Transaction::new("Coffee", -4.5, "3/15/2026, 9:03:12 AM", vec!["Card".into()]);
        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["desc"], "Coffee");
        assert_eq!(json["amount"], -4.5);
        assert_eq!(json["tags"][0], "Card");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn missing_tags_and_timestamp_default_to_empty() {
        let txn: Transaction = serde_json::from_str(r#"{"desc":"Rent","amount":-900}"#).unwrap();
        assert!(txn.tags.is_empty());
        assert!(txn.timestamp.is_empty());
        assert_eq!(txn.kind(), EntryKind::Expense);
    }
}
