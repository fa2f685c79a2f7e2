//! Configuration file
//!
//! JSON, every field optional. Without `--config` the defaults apply.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::advisor::RoiAssumptions;
use crate::api::HandlerSettings;
use crate::dataset::{default_candidates, DatasetLoader};
use crate::observability::Severity;

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dataset locations in search order, relative to the base directory
    #[serde(default = "default_data_candidates")]
    pub data_candidates: Vec<PathBuf>,

    /// Average value of one transaction, in rupees
    #[serde(default = "default_avg_transaction_value")]
    pub avg_transaction_value: f64,

    /// Share of daily customers captured, in (0, 1]
    #[serde(default = "default_capture_rate")]
    pub capture_rate: f64,

    #[serde(default = "default_overview_top_n")]
    pub overview_top_n: usize,

    #[serde(default = "default_finder_shortlist")]
    pub finder_shortlist: usize,

    #[serde(default = "default_recommend_top_n")]
    pub recommend_top_n: usize,

    #[serde(default = "default_best_opportunities_n")]
    pub best_opportunities_n: usize,

    /// Minimum log severity: trace, info, warn, error or fatal
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_data_candidates() -> Vec<PathBuf> {
    default_candidates()
}
fn default_avg_transaction_value() -> f64 {
    500.0
}
fn default_capture_rate() -> f64 {
    0.8
}
fn default_overview_top_n() -> usize {
    10
}
fn default_finder_shortlist() -> usize {
    5
}
fn default_recommend_top_n() -> usize {
    3
}
fn default_best_opportunities_n() -> usize {
    10
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_candidates: default_data_candidates(),
            avg_transaction_value: default_avg_transaction_value(),
            capture_rate: default_capture_rate(),
            overview_top_n: default_overview_top_n(),
            finder_shortlist: default_finder_shortlist(),
            recommend_top_n: default_recommend_top_n(),
            best_opportunities_n: default_best_opportunities_n(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::from_json(&content)
    }

    /// Loads `path` if given, otherwise validated defaults
    pub fn load_or_default(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.data_candidates.is_empty() {
            return Err(CliError::config_error("data_candidates must not be empty"));
        }

        if !self.avg_transaction_value.is_finite() || self.avg_transaction_value <= 0.0 {
            return Err(CliError::config_error("avg_transaction_value must be > 0"));
        }

        if !(self.capture_rate > 0.0 && self.capture_rate <= 1.0) {
            return Err(CliError::config_error(format!(
                "capture_rate must be in (0, 1], got {}",
                self.capture_rate
            )));
        }

        for (name, value) in [
            ("overview_top_n", self.overview_top_n),
            ("finder_shortlist", self.finder_shortlist),
            ("recommend_top_n", self.recommend_top_n),
            ("best_opportunities_n", self.best_opportunities_n),
        ] {
            if value == 0 {
                return Err(CliError::config_error(format!("{} must be > 0", name)));
            }
        }

        self.log_severity()?;

        Ok(())
    }

    pub fn log_severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    /// Dataset loader over the configured candidates
    pub fn loader(&self, base_dir: &Path) -> DatasetLoader {
        DatasetLoader::with_candidates(base_dir, self.data_candidates.clone())
    }

    pub fn handler_settings(&self) -> HandlerSettings {
        HandlerSettings {
            roi: RoiAssumptions {
                avg_transaction_value: self.avg_transaction_value,
                capture_rate: self.capture_rate,
            },
            overview_top_n: self.overview_top_n,
            finder_shortlist: self.finder_shortlist,
            recommend_top_n: self.recommend_top_n,
            best_opportunities_n: self.best_opportunities_n,
        }
    }
}
