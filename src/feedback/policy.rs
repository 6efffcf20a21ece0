use std::collections::HashSet;

use crate::models::SessionRecord;

/// Usage thresholds gating the one-time survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackThresholds {
    /// Minimum number of recorded sessions.
    pub min_count: usize,
    /// Minimum number of distinct calendar dates the sessions span.
    pub min_distinct_days: usize,
}

/// Threshold for the first time the app becomes visible.
pub const APP_OPEN: FeedbackThresholds = FeedbackThresholds {
    min_count: 2,
    min_distinct_days: 1,
};

/// Threshold for a timer reset.
pub const TIMER_RESET: FeedbackThresholds = FeedbackThresholds {
    min_count: 10,
    min_distinct_days: 3,
};

/// Decide whether the survey should start.
///
/// `already_shown` is the one-shot latch and wins unconditionally. Otherwise
/// the session count and the spread across distinct calendar dates (time of
/// day discarded) must both meet the thresholds.
pub fn eligible(
    records: &[SessionRecord],
    already_shown: bool,
    thresholds: FeedbackThresholds,
) -> bool {
    if already_shown {
        return false;
    }

    if records.len() < thresholds.min_count {
        return false;
    }

    let distinct_days: HashSet<_> = records.iter().map(|r| r.started_at.date_naive()).collect();
    distinct_days.len() >= thresholds.min_distinct_days
}
