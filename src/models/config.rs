use std::path::PathBuf;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Override for the preferences file location; `None` means the platform
    /// config directory.
    pub prefs_path: Option<PathBuf>,
    /// Endpoint for free-text feedback submission. When unset, submissions
    /// are logged and dropped.
    pub feedback_url: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let database_url = std::env::var("STOPWATCH_DATABASE_URL")
            .context("STOPWATCH_DATABASE_URL is required (e.g., sqlite://stopwatch.db)")?;

        let prefs_path = std::env::var("STOPWATCH_PREFS_PATH").ok().map(PathBuf::from);

        let feedback_url = std::env::var("STOPWATCH_FEEDBACK_URL").ok();
        if feedback_url.is_none() {
            tracing::info!("STOPWATCH_FEEDBACK_URL not set; feedback submissions will be logged only");
        }

        Ok(Self {
            database_url,
            prefs_path,
            feedback_url,
        })
    }
}
