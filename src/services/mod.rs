pub mod preferences;
pub mod session_store;
pub mod sqlite_session_store;
#[cfg(test)]
pub mod mock_session_store;

pub use preferences::PreferencesStore;
pub use session_store::SessionStore;
pub use sqlite_session_store::{ConnectRetry, SqliteSessionStore};
