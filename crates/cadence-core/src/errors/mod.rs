//! Error types for the Cadence workspace.
//!
//! The analytic operations never fail; errors only arise while loading or
//! validating configuration and while serializing results for callers.

mod config_error;

pub use config_error::ConfigError;

/// Top-level error for every Cadence crate.
#[derive(Debug, thiserror::Error)]
pub enum CadenceError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {reason}")]
    Serialization { reason: String },
}

impl From<serde_json::Error> for CadenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type CadenceResult<T> = Result<T, CadenceError>;
