use std::sync::{Arc, Mutex};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::models::SessionRecord;
use crate::services::session_store::SessionStore;

/// Mock implementation of SessionStore for testing.
///
/// Stores records in memory; `fail_reads` simulates a broken storage backend
/// so the degrade-to-empty path of the feedback check can be exercised.
#[derive(Debug, Clone, Default)]
pub struct MockSessionStore {
    records: Arc<Mutex<Vec<SessionRecord>>>,
    next_id: Arc<Mutex<i64>>,
    fail_reads: Arc<Mutex<bool>>,
}

impl MockSessionStore {
    pub fn new() -> Self {
        Self {
            records: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(Mutex::new(1)),
            fail_reads: Arc::new(Mutex::new(false)),
        }
    }

    /// A store holding `count` sessions spread evenly across `days` distinct
    /// calendar dates (all in March 2024).
    pub fn with_sessions(count: usize, days: usize) -> Self {
        let store = Self::new();
        let days = days.max(1);
        for i in 0..count {
            let day = (i % days) as u32 + 1;
            let started = Utc
                .with_ymd_and_hms(2024, 3, day, 8 + (i as u32 / days as u32) % 12, 0, 0)
                .unwrap();
            store.push(started, 60);
        }
        store
    }

    pub fn push(&self, started_at: DateTime<Utc>, duration_secs: i64) -> i64 {
        let mut next_id = self.next_id.lock().unwrap();
        let id = *next_id;
        *next_id += 1;
        self.records.lock().unwrap().push(SessionRecord {
            id,
            started_at,
            duration_secs,
        });
        id
    }

    pub fn set_fail_reads(&self, fail: bool) {
        *self.fail_reads.lock().unwrap() = fail;
    }
}

#[async_trait]
impl SessionStore for MockSessionStore {
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>> {
        if *self.fail_reads.lock().unwrap() {
            return Err(anyhow!("simulated storage failure"));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn record_session(&self, started_at: DateTime<Utc>, duration_secs: i64) -> Result<i64> {
        Ok(self.push(started_at, duration_secs))
    }

    async fn session_count(&self) -> Result<i64> {
        if *self.fail_reads.lock().unwrap() {
            return Err(anyhow!("simulated storage failure"));
        }
        Ok(self.records.lock().unwrap().len() as i64)
    }
}
