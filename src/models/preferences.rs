use serde::{Deserialize, Serialize};

/// Persisted user flags, one record per install.
///
/// Latching rules:
/// - `has_reset` flips false -> true on the first timer reset and never back;
///   paging stays enabled from then on, across restarts.
/// - `did_show_feedback_ui` flips false -> true at most once; once true the
///   survey never triggers again.
/// - `show_history_hint` flips true -> false once the user has scrolled far
///   enough toward the history page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub has_reset: bool,
    pub did_show_feedback_ui: bool,
    pub show_history_hint: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            has_reset: false,
            did_show_feedback_ui: false,
            show_history_hint: true,
        }
    }
}
