//! Environment-driven configuration for the embedding process.

use std::path::PathBuf;

/// Runtime configuration. One knob: where the session snapshot lives.
#[derive(Debug, Clone)]
pub struct Config {
    pub session_file: PathBuf,
}

impl Config {
    /// Read configuration from the environment, loading `.env` first if
    /// one is present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();
        let session_file = std::env::var("LENTA_SESSION_FILE")
            .unwrap_or_else(|_| "lenta_session.json".into());
        Self {
            session_file: PathBuf::from(session_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_file: PathBuf::from("lenta_session.json"),
        }
    }
}
