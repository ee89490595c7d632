//! Typed configuration file sections

use agora_application::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration validation errors
#[derive(Error, Debug)]
pub enum ConfigValidationError {
    #[error("voting_options must not be empty")]
    NoVotingOptions,

    #[error("session_start_limit must be at least 1")]
    ZeroSessionStartLimit,
}

/// Top-level configuration file shape.
///
/// The `[engine]` section is the application-layer [`EngineConfig`]
/// verbatim; `[store]` and `[forecast]` configure the adapters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub engine: EngineConfig,
    pub store: FileStoreConfig,
    pub forecast: FileForecastConfig,
}

impl FileConfig {
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.engine.voting_options.is_empty() {
            return Err(ConfigValidationError::NoVotingOptions);
        }
        if self.engine.session_start_limit == 0 {
            return Err(ConfigValidationError::ZeroSessionStartLimit);
        }
        Ok(())
    }
}

/// `[store]` section: where the document store and audit trail live.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStoreConfig {
    /// Document store file. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
    /// Audit trail file. Defaults to the platform data directory.
    pub audit_log: Option<PathBuf>,
}

impl FileStoreConfig {
    pub fn store_path(&self) -> PathBuf {
        self.path.clone().unwrap_or_else(|| data_file("store.json"))
    }

    pub fn audit_log_path(&self) -> PathBuf {
        self.audit_log
            .clone()
            .unwrap_or_else(|| data_file("audit.jsonl"))
    }
}

fn data_file(name: &str) -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("agoravote").join(name))
        .unwrap_or_else(|| PathBuf::from(name))
}

/// `[forecast]` section: tuning for the heuristic forecaster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileForecastConfig {
    /// Multiplier for the first-configured (historically leading) option.
    pub leader_bias: f64,
    /// Multiplier for the runner-up on Fridays.
    pub friday_momentum: f64,
}

impl Default for FileForecastConfig {
    fn default() -> Self {
        Self {
            leader_bias: 1.15,
            friday_momentum: 1.25,
        }
    }
}
