//! Configuration types for the scoring engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. Every field has a
//! default equal to the engine's documented constants, so a deployment
//! only overrides what it needs to.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Weights for the priority blend.
///
/// `priority = exposure_weight * exposure + impact_weight * impact
/// + inverse_complexity_weight * (1 - complexity)`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriorityWeights {
    /// Weight applied to the role's exposure score.
    #[serde(default = "default_exposure_weight")]
    pub exposure: Decimal,
    /// Weight applied to the role's impact score.
    #[serde(default = "default_impact_weight")]
    pub impact: Decimal,
    /// Weight applied to `1 - complexity`.
    #[serde(default = "default_inverse_complexity_weight")]
    pub inverse_complexity: Decimal,
}

impl Default for PriorityWeights {
    fn default() -> Self {
        Self {
            exposure: default_exposure_weight(),
            impact: default_impact_weight(),
            inverse_complexity: default_inverse_complexity_weight(),
        }
    }
}

/// Priority boundaries for the roadmap tier classifier.
///
/// Priorities at or above `now` classify as NOW; at or above
/// `next_quarter` (but below `now`) as NEXT_QUARTER; everything else as
/// FUTURE.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TierThresholds {
    /// Minimum priority for the NOW tier.
    #[serde(default = "default_now_threshold")]
    pub now: Decimal,
    /// Minimum priority for the NEXT_QUARTER tier.
    #[serde(default = "default_next_quarter_threshold")]
    pub next_quarter: Decimal,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            now: default_now_threshold(),
            next_quarter: default_next_quarter_threshold(),
        }
    }
}

/// Complete scoring configuration.
///
/// The formulas themselves are fixed; only these literal constants can be
/// tuned per deployment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Exposure assigned to a work activity with no override and no GWA
    /// score ("unknown, assume moderate exposure").
    pub default_exposure: DefaultExposure,
    /// Weights for the priority blend.
    pub priority_weights: PriorityWeights,
    /// Priority boundaries for tier classification.
    pub tier_thresholds: TierThresholds,
}

/// Newtype wrapper so the default exposure can default independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct DefaultExposure(pub Decimal);

impl Default for DefaultExposure {
    fn default() -> Self {
        DefaultExposure(Decimal::new(5, 1))
    }
}

fn default_exposure_weight() -> Decimal {
    Decimal::new(4, 1)
}

fn default_impact_weight() -> Decimal {
    Decimal::new(4, 1)
}

fn default_inverse_complexity_weight() -> Decimal {
    Decimal::new(2, 1)
}

fn default_now_threshold() -> Decimal {
    Decimal::new(75, 2)
}

fn default_next_quarter_threshold() -> Decimal {
    Decimal::new(60, 2)
}
