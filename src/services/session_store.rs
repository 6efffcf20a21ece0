use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::models::SessionRecord;

/// SessionStore trait defines the session persistence operations the shell
/// needs.
///
/// This trait abstracts storage access to enable:
/// - Easy testing with mock implementations
/// - Flexibility to swap storage backends
/// - Clear separation between the navigation shell and the data layer
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch every recorded session, oldest first.
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>>;

    /// Record a completed/reset run.
    ///
    /// # Returns
    /// The ID of the newly created record
    async fn record_session(&self, started_at: DateTime<Utc>, duration_secs: i64) -> Result<i64>;

    /// Number of recorded sessions.
    async fn session_count(&self) -> Result<i64>;
}
