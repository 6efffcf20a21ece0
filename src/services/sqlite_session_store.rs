use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{info, warn};

use crate::models::SessionRecord;
use crate::services::session_store::SessionStore;

/// Retry tuning for the startup database connection.
#[derive(Debug, Clone)]
pub struct ConnectRetry {
    pub max_attempts: u32,
    pub initial_delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for ConnectRetry {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            initial_delay_ms: 500,
            max_delay_ms: 5000,
        }
    }
}

impl ConnectRetry {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let read = |var: &str, fallback: u64| {
            std::env::var(var)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(fallback)
        };

        Self {
            max_attempts: read("STOPWATCH_DB_MAX_RETRIES", defaults.max_attempts as u64) as u32,
            initial_delay_ms: read("STOPWATCH_DB_INITIAL_DELAY_MS", defaults.initial_delay_ms),
            max_delay_ms: read("STOPWATCH_DB_MAX_DELAY_MS", defaults.max_delay_ms),
        }
    }
}

/// Production implementation of SessionStore backed by SQLite.
pub struct SqliteSessionStore {
    pool: SqlitePool,
}

impl SqliteSessionStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to the database with exponential backoff, create the file if
    /// missing, and apply migrations. Transient open failures (WAL
    /// checkpoint locks, slow network filesystems) are retried; nothing else
    /// in this crate retries.
    pub async fn connect(database_url: &str, retry: ConnectRetry) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .journal_mode(sqlx::sqlite::SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5));

        let mut attempt = 0;
        let mut delay_ms = retry.initial_delay_ms;

        let pool = loop {
            attempt += 1;

            match sqlx::pool::PoolOptions::new()
                .max_connections(2)
                .connect_with(options.clone())
                .await
            {
                Ok(pool) => {
                    if attempt > 1 {
                        info!("database connection successful after {} attempts", attempt);
                    }
                    break pool;
                }
                Err(e) => {
                    if attempt >= retry.max_attempts {
                        return Err(e).context(format!(
                            "failed to connect to {} after {} attempts",
                            database_url, retry.max_attempts
                        ));
                    }
                    warn!(
                        "database connection attempt {}/{} failed: {} - retrying in {}ms",
                        attempt, retry.max_attempts, e, delay_ms
                    );
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    delay_ms = (delay_ms * 2).min(retry.max_delay_ms);
                }
            }
        };

        sqlx::migrate!()
            .run(&pool)
            .await
            .context("failed to run migrations")?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl SessionStore for SqliteSessionStore {
    async fn fetch_sessions(&self) -> Result<Vec<SessionRecord>> {
        let rows = sqlx::query(
            r#"
            SELECT id, started_at, duration_secs
            FROM sessions
            ORDER BY started_at ASC
            "#,
        )
        .map(|row: SqliteRow| SessionRecord {
            id: row.get::<i64, _>("id"),
            started_at: row.get::<DateTime<Utc>, _>("started_at"),
            duration_secs: row.get::<i64, _>("duration_secs"),
        })
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn record_session(&self, started_at: DateTime<Utc>, duration_secs: i64) -> Result<i64> {
        let res = sqlx::query(
            r#"
            INSERT INTO sessions (started_at, duration_secs)
            VALUES (?1, ?2)
            "#,
        )
        .bind(started_at)
        .bind(duration_secs)
        .execute(&self.pool)
        .await?;

        Ok(res.last_insert_rowid())
    }

    async fn session_count(&self) -> Result<i64> {
        let row = sqlx::query("SELECT COUNT(*) AS n FROM sessions")
            .fetch_one(&self.pool)
            .await?;
        Ok(row.get::<i64, _>("n"))
    }
}
