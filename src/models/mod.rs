pub mod config;
pub mod preferences;
pub mod session;

// Re-export commonly used types at models root for convenience
pub use config::AppConfig;
pub use preferences::Preferences;
pub use session::SessionRecord;
