//! Error types
//!
//! Dashboard operations themselves never fail: unknown names fall back to
//! defaults and missing targets are skipped. These errors cover loading
//! replay scripts. Configuration has its own `ConfigError`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PulseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Replay script could not be decoded
    #[error("Invalid script: {0}")]
    Script(String),
}

impl From<serde_json::Error> for PulseError {
    fn from(err: serde_json::Error) -> Self {
        PulseError::Script(err.to_string())
    }
}

pub type PulseResult<T> = Result<T, PulseError>;
