//! Configuration for the analyzer and the suggestion generator.
//!
//! Every section is `#[serde(default)]`, so a partial TOML file only
//! overrides the keys it names:
//!
//! ```toml
//! [analysis]
//! timezone = "Europe/Berlin"
//! lookback_days = 14
//!
//! [suggestions]
//! review_after_days = 5
//! ```

mod analysis_config;
pub mod defaults;
mod suggestion_config;

pub use analysis_config::AnalysisConfig;
pub use suggestion_config::SuggestionConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{CadenceResult, ConfigError};

/// Root configuration for the whole workspace.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CadenceConfig {
    pub analysis: AnalysisConfig,
    pub suggestions: SuggestionConfig,
}

impl CadenceConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> CadenceResult<Self> {
        let config: Self = toml::from_str(source).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> CadenceResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&source)
    }

    /// Validate both sections.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.suggestions.validate()
    }
}

fn ensure_positive<T>(field: &'static str, value: T) -> Result<(), ConfigError>
where
    T: Default + PartialEq,
{
    if value == T::default() {
        return Err(ConfigError::InvalidValue {
            field,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(())
}

fn ensure_unit(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("{value} is outside [0.0, 1.0]"),
        });
    }
    Ok(())
}
