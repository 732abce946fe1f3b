use tracing::info;

use crate::core::services::{ServiceError, ServiceResult};
use crate::core::state::LedgerState;
use crate::domain::TagGroup;

/// Session-scoped tag selection and custom tag options.
pub struct TagService;

impl TagService {
    pub fn select(state: &mut LedgerState, group: TagGroup, label: &str) -> ServiceResult<()> {
        let label = label.trim();
        if state.tags_mut().select(group, label) {
            Ok(())
        } else {
            Err(ServiceError::Validation(format!(
                "`{label}` is not a {} tag. Add it first with `tag new {group} {label}`.",
                group.title().to_lowercase()
            )))
        }
    }

    pub fn clear(state: &mut LedgerState, group: TagGroup) -> Option<String> {
        state.tags_mut().clear(group)
    }

    pub fn clear_all(state: &mut LedgerState) {
        state.tags_mut().clear_all();
    }

    /// Adds a custom option to `group`. Returns `false` if it already existed.
    pub fn add_option(state: &mut LedgerState, group: TagGroup, label: &str) -> ServiceResult<bool> {
        let label = label.trim();
        if label.is_empty() {
            return Err(ServiceError::Validation("Please enter a label.".into()));
        }
        let added = state.tags_mut().push_option(group, label);
        if added {
            info!(group = %group, label, "tag option added");
        }
        Ok(added)
    }
}
