//! Analysis result models for the AI Exposure Scoring Engine.
//!
//! This module contains the per-role [`AnalysisScores`] tuple, the
//! [`Dimension`] grouping axes, the persisted [`DimensionAggregation`]
//! rows with their full per-role breakdown, and the
//! [`SessionScoringResult`] returned by a scoring run.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::EngineError;

/// The four per-role scores produced by a scoring run.
///
/// Each score is a `Decimal` in [0, 1]. Invariant:
/// `complexity = 1 - exposure`.
///
/// # Example
///
/// ```
/// use exposure_engine::models::AnalysisScores;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let scores = AnalysisScores {
///     exposure: Decimal::from_str("0.8").unwrap(),
///     impact: Decimal::from_str("0.8").unwrap(),
///     complexity: Decimal::from_str("0.2").unwrap(),
///     priority: Decimal::from_str("0.8").unwrap(),
/// };
/// assert_eq!(scores.complexity, Decimal::ONE - scores.exposure);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisScores {
    /// Fraction of the role's selected work that is automatable.
    pub exposure: Decimal,
    /// Exposure scaled by the role's share of the session's largest headcount.
    pub impact: Decimal,
    /// Inverse of exposure; higher means harder to automate.
    pub complexity: Decimal,
    /// Blended score used to rank and tier automation opportunities.
    pub priority: Decimal,
}

impl AnalysisScores {
    /// The all-zero-work score tuple: no exposure, no impact, full
    /// complexity, no priority.
    pub fn zero() -> Self {
        Self {
            exposure: Decimal::ZERO,
            impact: Decimal::ZERO,
            complexity: Decimal::ONE,
            priority: Decimal::ZERO,
        }
    }
}

/// An organizational grouping axis for score aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    /// One aggregation per role mapping.
    Role,
    /// Group roles by department metadata.
    Department,
    /// Group roles by line-of-business metadata.
    Lob,
    /// Group roles by geography metadata.
    Geography,
    /// Group roles by selected task display name.
    Task,
}

impl Dimension {
    /// All five dimensions, in the canonical aggregation order.
    pub const ALL: [Dimension; 5] = [
        Dimension::Role,
        Dimension::Department,
        Dimension::Lob,
        Dimension::Geography,
        Dimension::Task,
    ];

    /// Returns the dimension's canonical tag string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Role => "ROLE",
            Dimension::Department => "DEPARTMENT",
            Dimension::Lob => "LOB",
            Dimension::Geography => "GEOGRAPHY",
            Dimension::Task => "TASK",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dimension {
    type Err = EngineError;

    /// Parses a dimension tag, case-insensitively.
    ///
    /// An unknown tag is a usage error ([`EngineError::InvalidDimension`]),
    /// distinct from the data-quality conditions the engine recovers from
    /// locally.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ROLE" => Ok(Dimension::Role),
            "DEPARTMENT" => Ok(Dimension::Department),
            "LOB" => Ok(Dimension::Lob),
            "GEOGRAPHY" => Ok(Dimension::Geography),
            "TASK" => Ok(Dimension::Task),
            _ => Err(EngineError::InvalidDimension {
                value: s.to_string(),
            }),
        }
    }
}

/// One contributing role inside an aggregation's breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleBreakdownEntry {
    /// The role's source name.
    pub role_name: String,
    /// The role's headcount.
    pub row_count: u32,
    /// The role's individual scores.
    pub scores: AnalysisScores,
}

/// A headcount-weighted score summary for one dimension value.
///
/// Persisted per session; rescoring a session deletes and replaces all of
/// its aggregation rows. The breakdown lists every contributing role in
/// the order roles were supplied to the aggregator, never truncated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionAggregation {
    /// Unique identifier for this aggregation row.
    pub id: Uuid,
    /// The analysis session this row belongs to.
    pub session_id: Uuid,
    /// The grouping axis.
    pub dimension: Dimension,
    /// The group value (role name, department name, task name, ...).
    pub dimension_value: String,
    /// Headcount-weighted aggregate scores for the group.
    pub scores: AnalysisScores,
    /// Sum of contributing roles' headcounts.
    pub total_headcount: u64,
    /// Number of contributing roles.
    pub role_count: u32,
    /// Every contributing role with its individual scores.
    pub breakdown: Vec<RoleBreakdownEntry>,
    /// When this row was computed.
    pub created_at: DateTime<Utc>,
}

/// The complete result of scoring one session.
///
/// Covers all five dimensions in a single run. Returned by
/// [`SessionScoringEngine::score_session`].
///
/// [`SessionScoringEngine::score_session`]: crate::scoring::SessionScoringEngine::score_session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionScoringResult {
    /// The session that was scored.
    pub session_id: Uuid,
    /// The version of the engine that performed the scoring.
    pub engine_version: String,
    /// When the scoring run completed.
    pub computed_at: DateTime<Utc>,
    /// Per-role scores, keyed by role-mapping id.
    pub role_scores: HashMap<Uuid, AnalysisScores>,
    /// All dimension aggregations, covering all five dimensions.
    pub aggregations: Vec<DimensionAggregation>,
    /// The largest single role's headcount in the session.
    pub max_headcount: u32,
    /// Sum of headcounts across all roles.
    pub total_headcount: u64,
    /// Number of role mappings in the session.
    pub total_roles: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_scores() -> AnalysisScores {
        AnalysisScores {
            exposure: dec("0.8"),
            impact: dec("0.8"),
            complexity: dec("0.2"),
            priority: dec("0.8"),
        }
    }

    #[test]
    fn test_zero_scores_have_full_complexity() {
        let scores = AnalysisScores::zero();
        assert_eq!(scores.exposure, Decimal::ZERO);
        assert_eq!(scores.impact, Decimal::ZERO);
        assert_eq!(scores.complexity, Decimal::ONE);
        assert_eq!(scores.priority, Decimal::ZERO);
    }

    #[test]
    fn test_dimension_serialization() {
        assert_eq!(
            serde_json::to_string(&Dimension::Role).unwrap(),
            "\"ROLE\""
        );
        assert_eq!(
            serde_json::to_string(&Dimension::Department).unwrap(),
            "\"DEPARTMENT\""
        );
        assert_eq!(serde_json::to_string(&Dimension::Lob).unwrap(), "\"LOB\"");
        assert_eq!(
            serde_json::to_string(&Dimension::Geography).unwrap(),
            "\"GEOGRAPHY\""
        );
        assert_eq!(serde_json::to_string(&Dimension::Task).unwrap(), "\"TASK\"");
    }

    #[test]
    fn test_dimension_from_str_is_case_insensitive() {
        assert_eq!(Dimension::from_str("role").unwrap(), Dimension::Role);
        assert_eq!(
            Dimension::from_str("Department").unwrap(),
            Dimension::Department
        );
        assert_eq!(Dimension::from_str("TASK").unwrap(), Dimension::Task);
    }

    #[test]
    fn test_unknown_dimension_is_usage_error() {
        let result = Dimension::from_str("REGION");
        match result {
            Err(EngineError::InvalidDimension { value }) => {
                assert_eq!(value, "REGION");
            }
            other => panic!("Expected InvalidDimension, got {:?}", other),
        }
    }

    #[test]
    fn test_dimension_all_covers_five_axes() {
        assert_eq!(Dimension::ALL.len(), 5);
        assert_eq!(Dimension::ALL[0], Dimension::Role);
        assert_eq!(Dimension::ALL[4], Dimension::Task);
    }

    #[test]
    fn test_dimension_display_matches_tag() {
        assert_eq!(Dimension::Geography.to_string(), "GEOGRAPHY");
    }

    #[test]
    fn test_analysis_scores_serialize_as_strings() {
        let scores = create_sample_scores();
        let json = serde_json::to_string(&scores).unwrap();
        assert!(json.contains("\"exposure\":\"0.8\""));
        assert!(json.contains("\"complexity\":\"0.2\""));
    }

    #[test]
    fn test_dimension_aggregation_round_trip() {
        let aggregation = DimensionAggregation {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            dimension: Dimension::Department,
            dimension_value: "Claims".to_string(),
            scores: create_sample_scores(),
            total_headcount: 150,
            role_count: 2,
            breakdown: vec![
                RoleBreakdownEntry {
                    role_name: "Claims Adjuster".to_string(),
                    row_count: 100,
                    scores: create_sample_scores(),
                },
                RoleBreakdownEntry {
                    role_name: "Claims Examiner".to_string(),
                    row_count: 50,
                    scores: create_sample_scores(),
                },
            ],
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&aggregation).unwrap();
        let deserialized: DimensionAggregation = serde_json::from_str(&json).unwrap();
        assert_eq!(aggregation, deserialized);
    }

    #[test]
    fn test_session_scoring_result_serialization() {
        let session_id = Uuid::nil();
        let result = SessionScoringResult {
            session_id,
            engine_version: "1.0.0".to_string(),
            computed_at: DateTime::parse_from_rfc3339("2026-01-15T10:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            role_scores: HashMap::new(),
            aggregations: vec![],
            max_headcount: 200,
            total_headcount: 350,
            total_roles: 3,
        };

        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("\"session_id\":\"00000000-0000-0000-0000-000000000000\""));
        assert!(json.contains("\"max_headcount\":200"));
        assert!(json.contains("\"total_headcount\":350"));
        assert!(json.contains("\"total_roles\":3"));
    }
}
