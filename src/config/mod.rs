//! Configuration for the AI Exposure Scoring Engine.
//!
//! This module provides the [`ScoringConfig`] type carrying the engine's
//! tunable constants (default exposure, priority weights, tier
//! thresholds) and its YAML loader. Defaults match the documented
//! scoring formulas, so most deployments never ship a config file.
//!
//! # Example
//!
//! ```
//! use exposure_engine::config::ScoringConfig;
//!
//! let config = ScoringConfig::default();
//! assert_eq!(config.default_exposure.0.to_string(), "0.5");
//! ```

mod loader;
mod types;

pub use types::{DefaultExposure, PriorityWeights, ScoringConfig, TierThresholds};
