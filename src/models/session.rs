use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded stopwatch run.
///
/// The feedback-eligibility policy only consumes `started_at`; the duration is
/// carried for the history page and the harness output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: i64,
    pub started_at: DateTime<Utc>,
    pub duration_secs: i64,
}
