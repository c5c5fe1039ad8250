//! Configuration loading functionality.
//!
//! This module provides loading of [`ScoringConfig`] from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ScoringConfig;

impl ScoringConfig {
    /// Loads a scoring configuration from the specified YAML file.
    ///
    /// Any field missing from the file falls back to the engine's
    /// documented default.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration file (e.g., "./config/scoring.yaml")
    ///
    /// # Returns
    ///
    /// Returns a `ScoringConfig` on success, or an error if:
    /// - The file is missing (`ConfigNotFound`)
    /// - The file contains invalid YAML (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use exposure_engine::config::ScoringConfig;
    ///
    /// let config = ScoringConfig::load("./config/scoring.yaml")?;
    /// # Ok::<(), exposure_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
