use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::models::Preferences;

const APP_DIR: &str = "stopwatch-shell";
const PREFS_FILE: &str = "preferences.toml";

/// Write-through store for the persisted user flags.
///
/// Opened once at process start and injected into the coordinator; every
/// setter flushes to disk immediately so a crash mid-survey can never replay
/// the one-shot latches. A store built with [`PreferencesStore::in_memory`]
/// skips the flush and serves tests.
#[derive(Debug)]
pub struct PreferencesStore {
    path: Option<PathBuf>,
    prefs: Preferences,
}

impl PreferencesStore {
    /// Load preferences from `path`, or from the platform config directory
    /// when `path` is `None`. A missing file yields defaults.
    pub fn open(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None => Self::default_path()?,
        };

        let prefs = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("failed to read preferences file {}", path.display()))?;
            toml::from_str(&content)
                .with_context(|| format!("failed to parse preferences file {}", path.display()))?
        } else {
            Preferences::default()
        };

        debug!(?prefs, "loaded preferences from {}", path.display());
        Ok(Self {
            path: Some(path),
            prefs,
        })
    }

    /// An unbacked store with the given flags; writes never touch disk.
    pub fn in_memory(prefs: Preferences) -> Self {
        Self { path: None, prefs }
    }

    /// Standard preferences location:
    /// `$CONFIG_HOME/stopwatch-shell/preferences.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().context("unable to determine the platform config directory")?;
        Ok(config_dir.join(APP_DIR).join(PREFS_FILE))
    }

    pub fn has_reset(&self) -> bool {
        self.prefs.has_reset
    }

    pub fn did_show_feedback_ui(&self) -> bool {
        self.prefs.did_show_feedback_ui
    }

    pub fn show_history_hint(&self) -> bool {
        self.prefs.show_history_hint
    }

    pub fn set_has_reset(&mut self, value: bool) -> Result<()> {
        self.prefs.has_reset = value;
        self.flush()
    }

    pub fn set_did_show_feedback_ui(&mut self, value: bool) -> Result<()> {
        self.prefs.did_show_feedback_ui = value;
        self.flush()
    }

    pub fn set_show_history_hint(&mut self, value: bool) -> Result<()> {
        self.prefs.show_history_hint = value;
        self.flush()
    }

    fn flush(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create preferences directory {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(&self.prefs)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write preferences file {}", path.display()))?;
        Ok(())
    }
}
