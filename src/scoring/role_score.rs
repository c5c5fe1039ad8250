//! Per-role score calculation.
//!
//! This module turns a role's resolved exposure values and headcount
//! context into its four-score [`AnalysisScores`] tuple.

use rust_decimal::Decimal;

use crate::config::ScoringConfig;
use crate::models::AnalysisScores;

/// Clamps a score to the unit interval.
fn clamp_unit(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

/// Computes a role's four analysis scores.
///
/// - `exposure` is the arithmetic mean of the resolved exposure values,
///   or 0.0 for a role with no selected activities.
/// - `complexity = 1 - exposure`.
/// - `impact = exposure * (row_count / max_headcount)` when
///   `max_headcount > 0`, else 0.0. `max_headcount` is the largest
///   headcount among all roles in the same scoring run, which normalizes
///   impact to the session's largest role.
/// - `priority` blends the three: with default weights,
///   `0.4 * exposure + 0.4 * impact + 0.2 * (1 - complexity)`.
///
/// All four outputs are clamped to [0, 1]. This function never fails; a
/// role with zero headcount and zero activities yields `(0, 0, 1, 0)`.
///
/// # Example
///
/// ```
/// use exposure_engine::config::ScoringConfig;
/// use exposure_engine::scoring::score_role;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let exposures = vec![Decimal::from_str("0.8").unwrap()];
/// let scores = score_role(&exposures, 100, 100, &ScoringConfig::default());
/// assert_eq!(scores.exposure, Decimal::from_str("0.8").unwrap());
/// assert_eq!(scores.impact, Decimal::from_str("0.8").unwrap());
/// assert_eq!(scores.complexity, Decimal::from_str("0.2").unwrap());
/// ```
pub fn score_role(
    resolved_exposures: &[Decimal],
    row_count: u32,
    max_headcount: u32,
    config: &ScoringConfig,
) -> AnalysisScores {
    let exposure = if resolved_exposures.is_empty() {
        Decimal::ZERO
    } else {
        let sum: Decimal = resolved_exposures.iter().copied().sum();
        sum / Decimal::from(resolved_exposures.len())
    };

    let complexity = Decimal::ONE - exposure;

    let impact = if max_headcount > 0 {
        exposure * Decimal::from(row_count) / Decimal::from(max_headcount)
    } else {
        Decimal::ZERO
    };

    let weights = &config.priority_weights;
    let priority = weights.exposure * exposure
        + weights.impact * impact
        + weights.inverse_complexity * (Decimal::ONE - complexity);

    AnalysisScores {
        exposure: clamp_unit(exposure),
        impact: clamp_unit(impact),
        complexity: clamp_unit(complexity),
        priority: clamp_unit(priority),
    }
}
