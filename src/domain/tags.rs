//! Tag groups and the per-group single-select board used when recording entries.

use std::{fmt, str::FromStr};

/// One of the fixed tag categories. Declaration order is capture order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagGroup {
    PaidMethod,
    App,
    Loan,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tag group `{0}` (use paid, app or loan)")]
pub struct TagGroupError(pub String);

impl TagGroup {
    pub const ALL: [TagGroup; 3] = [TagGroup::PaidMethod, TagGroup::App, TagGroup::Loan];

    pub fn slug(self) -> &'static str {
        match self {
            TagGroup::PaidMethod => "paid",
            TagGroup::App => "app",
            TagGroup::Loan => "loan",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            TagGroup::PaidMethod => "Paid method",
            TagGroup::App => "App",
            TagGroup::Loan => "Loan",
        }
    }

    fn default_options(self) -> &'static [&'static str] {
        match self {
            TagGroup::PaidMethod => &["Cash", "Card", "UPI"],
            TagGroup::App => &["GPay", "PhonePe", "Paytm"],
            TagGroup::Loan => &["Lent", "Borrowed"],
        }
    }

    fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TagGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for TagGroup {
    type Err = TagGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paid" | "paid-method" | "method" => Ok(TagGroup::PaidMethod),
            "app" => Ok(TagGroup::App),
            "loan" => Ok(TagGroup::Loan),
            _ => Err(TagGroupError(s.to_string())),
        }
    }
}

/// Available options and the active selection for every tag group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBoard {
    options: [Vec<String>; 3],
    selected: [Option<String>; 3],
}

impl Default for TagBoard {
    fn default() -> Self {
        let options: [Vec<String>; 3] = TagGroup::ALL.map(|group| {
            group
                .default_options()
                .iter()
                .map(|label| label.to_string())
                .collect()
        });
        Self {
            options,
            selected: [None, None, None],
        }
    }
}

impl TagBoard {
    pub fn options(&self, group: TagGroup) -> &[String] {
        &self.options[group.position()]
    }

    pub fn selected(&self, group: TagGroup) -> Option<&str> {
        self.selected[group.position()].as_deref()
    }

    pub fn has_option(&self, group: TagGroup, label: &str) -> bool {
        self.options(group).iter().any(|option| option == label)
    }

    /// Appends `label` to the group's options; returns `false` when it already exists.
    pub fn push_option(&mut self, group: TagGroup, label: &str) -> bool {
        if self.has_option(group, label) {
            return false;
        }
        self.options[group.position()].push(label.to_string());
        true
    }

    /// Activates `label` within its group, replacing any earlier choice.
    /// Returns `false` when the label is not an option of that group.
    pub fn select(&mut self, group: TagGroup, label: &str) -> bool {
        if !self.has_option(group, label) {
            return false;
        }
        self.selected[group.position()] = Some(label.to_string());
        true
    }

    pub fn clear(&mut self, group: TagGroup) -> Option<String> {
        self.selected[group.position()].take()
    }

    pub fn clear_all(&mut self) {
        self.selected = [None, None, None];
    }

    /// Active labels in group order, skipping groups with nothing selected.
    pub fn captured(&self) -> Vec<String> {
        TagGroup::ALL
            .iter()
            .filter_map(|group| self.selected(*group).map(str::to_string))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_follows_group_order_not_selection_order() {
        let mut board = TagBoard::default();
        assert!(board.select(TagGroup::Loan, "Lent"));
        assert!(board.select(TagGroup::PaidMethod, "Card"));
        assert_eq!(board.captured(), vec!["Card".to_string(), "Lent".to_string()]);
    }

    #[test]
    fn selecting_again_replaces_within_group() {
        let mut board = TagBoard::default();
        board.select(TagGroup::App, "GPay");
        board.select(TagGroup::App, "Paytm");
        assert_eq!(board.selected(TagGroup::App), Some("Paytm"));
        assert_eq!(board.captured(), vec!["Paytm".to_string()]);
    }

    #[test]
    fn unknown_label_is_not_selectable_until_added() {
        let mut board = TagBoard::default();
        assert!(!board.select(TagGroup::App, "Wallet"));
        assert!(board.push_option(TagGroup::App, "Wallet"));
        assert!(!board.push_option(TagGroup::App, "Wallet"));
        assert!(board.select(TagGroup::App, "Wallet"));
        assert!(!board.has_option(TagGroup::Loan, "Wallet"));
    }

    #[test]
    fn group_names_parse_loosely() {
        assert_eq!("Paid".parse::<TagGroup>().unwrap(), TagGroup::PaidMethod);
        assert_eq!("loan".parse::<TagGroup>().unwrap(), TagGroup::Loan);
        assert!("bank".parse::<TagGroup>().is_err());
    }
}
