//! Roadmap tier classification.
//!
//! This module maps a role's (priority, complexity) pair to the coarse
//! timeline bucket used by downstream roadmap planning.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::TierThresholds;

/// A coarse automation timeline bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PriorityTier {
    /// High-priority work to automate now.
    Now,
    /// Work to plan for the next quarter.
    NextQuarter,
    /// Lower-priority work for a later horizon.
    Future,
}

/// Classifies a (priority, complexity) pair into a roadmap tier.
///
/// With default thresholds: `priority >= 0.75` is NOW, `0.60 <= priority
/// < 0.75` is NEXT_QUARTER, and anything lower is FUTURE. Priority is
/// the sole discriminator; complexity is informational only (it is
/// already folded into priority's formula), so a high-complexity role at
/// NOW-level priority still classifies as NOW.
///
/// Deterministic, no side effects, no failure modes.
///
/// # Example
///
/// ```
/// use exposure_engine::config::TierThresholds;
/// use exposure_engine::scoring::{classify_priority_tier, PriorityTier};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tier = classify_priority_tier(
///     Decimal::from_str("0.8").unwrap(),
///     Decimal::from_str("0.2").unwrap(),
///     &TierThresholds::default(),
/// );
/// assert_eq!(tier, PriorityTier::Now);
/// ```
pub fn classify_priority_tier(
    priority: Decimal,
    _complexity: Decimal,
    thresholds: &TierThresholds,
) -> PriorityTier {
    if priority >= thresholds.now {
        PriorityTier::Now
    } else if priority >= thresholds.next_quarter {
        PriorityTier::NextQuarter
    } else {
        PriorityTier::Future
    }
}
