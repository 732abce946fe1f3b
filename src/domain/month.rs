use std::{fmt, str::FromStr};

use chrono::{Datelike, Local};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Zero-based calendar month used as the bucket key for budgets and transactions.
///
/// Persisted as the decimal string `"0"`..`"11"` so stored maps keep stable
/// keys no matter how the reader compares them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey(u8);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a month (use 0-11 or a month name)")]
pub struct MonthKeyError(pub String);

impl MonthKey {
    pub const COUNT: u8 = 12;

    pub fn new(index: u8) -> Option<Self> {
        (index < Self::COUNT).then_some(Self(index))
    }

    /// Month the local clock currently sits in.
    pub fn current() -> Self {
        Self(Local::now().month0() as u8)
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn name(self) -> &'static str {
        MONTH_NAMES[self.0 as usize]
    }

    pub fn all() -> impl Iterator<Item = MonthKey> {
        (0..Self::COUNT).map(MonthKey)
    }

    /// Strict parse of the canonical storage form.
    pub fn from_canonical(raw: &str) -> Result<Self, MonthKeyError> {
        raw.parse::<u8>()
            .ok()
            .filter(|value| value.to_string() == raw)
            .and_then(MonthKey::new)
            .ok_or_else(|| MonthKeyError(raw.to_string()))
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lenient parse for user input: `"2"`, `"March"`, `"mar"`.
impl FromStr for MonthKey {
    type Err = MonthKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(index) = trimmed.parse::<u8>() {
            return MonthKey::new(index).ok_or_else(|| MonthKeyError(s.to_string()));
        }
        let needle = trimmed.to_ascii_lowercase();
        if needle.len() < 3 {
            return Err(MonthKeyError(s.to_string()));
        }
        MONTH_NAMES
            .iter()
            .position(|name| name.to_ascii_lowercase().starts_with(&needle))
            .map(|index| MonthKey(index as u8))
            .ok_or_else(|| MonthKeyError(s.to_string()))
    }
}

impl Serialize for MonthKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        MonthKey::from_canonical(&raw).map_err(de::Error::custom)
    }
}
