//! Headcount-weighted score aggregation across organizational dimensions.
//!
//! This module rolls per-role [`AnalysisScores`] up to summaries for the
//! five grouping axes: role, department, line-of-business, geography,
//! and task. Group scores are headcount-weighted means; every
//! aggregation carries a full per-role breakdown for traceability.

use std::collections::HashMap;

use chrono::Utc;
use indexmap::{IndexMap, IndexSet};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    AnalysisScores, Dimension, DimensionAggregation, RoleBreakdownEntry, RoleMapping,
    SelectedActivity,
};

/// The group that absorbs roles with missing or empty metadata.
///
/// Missing values are never dropped and never merged silently with
/// populated groups; they form their own group under this name.
pub const UNKNOWN_GROUP: &str = "Unknown";

/// Per-role selected activities, keyed by role-mapping id.
///
/// Required by the TASK dimension; the other four dimensions ignore it.
pub type TaskSelections = HashMap<Uuid, Vec<SelectedActivity>>;

/// Normalizes a metadata value for grouping.
fn group_value(value: Option<&String>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => UNKNOWN_GROUP.to_string(),
    }
}

/// Looks up a role's scores, treating an absent entry as zero work.
fn scores_for(role_scores: &HashMap<Uuid, AnalysisScores>, mapping: &RoleMapping) -> AnalysisScores {
    role_scores
        .get(&mapping.id)
        .copied()
        .unwrap_or_else(AnalysisScores::zero)
}

/// Computes the headcount-weighted mean of each score component.
///
/// A group whose headcounts sum to zero gets all-zero aggregate scores.
fn weighted_scores(members: &[(&RoleMapping, AnalysisScores)]) -> (AnalysisScores, u64) {
    let total_headcount: u64 = members.iter().map(|(m, _)| u64::from(m.row_count)).sum();

    if total_headcount == 0 {
        let zero = AnalysisScores {
            exposure: Decimal::ZERO,
            impact: Decimal::ZERO,
            complexity: Decimal::ZERO,
            priority: Decimal::ZERO,
        };
        return (zero, 0);
    }

    let total = Decimal::from(total_headcount);
    let mut exposure = Decimal::ZERO;
    let mut impact = Decimal::ZERO;
    let mut complexity = Decimal::ZERO;
    let mut priority = Decimal::ZERO;

    for (mapping, scores) in members {
        let weight = Decimal::from(mapping.row_count);
        exposure += weight * scores.exposure;
        impact += weight * scores.impact;
        complexity += weight * scores.complexity;
        priority += weight * scores.priority;
    }

    let aggregate = AnalysisScores {
        exposure: exposure / total,
        impact: impact / total,
        complexity: complexity / total,
        priority: priority / total,
    };
    (aggregate, total_headcount)
}

/// Builds one aggregation row from a group of contributing roles.
fn build_aggregation(
    session_id: Uuid,
    dimension: Dimension,
    dimension_value: String,
    members: &[(&RoleMapping, AnalysisScores)],
    scores: AnalysisScores,
    total_headcount: u64,
) -> DimensionAggregation {
    let breakdown = members
        .iter()
        .map(|(mapping, scores)| RoleBreakdownEntry {
            role_name: mapping.source_role.clone(),
            row_count: mapping.row_count,
            scores: *scores,
        })
        .collect();

    DimensionAggregation {
        id: Uuid::new_v4(),
        session_id,
        dimension,
        dimension_value,
        scores,
        total_headcount,
        role_count: members.len() as u32,
        breakdown,
        created_at: Utc::now(),
    }
}

/// Aggregates per-role scores along one dimension.
///
/// - `ROLE`: one aggregation per role mapping, carrying that role's own
///   scores unchanged.
/// - `DEPARTMENT` / `LOB` / `GEOGRAPHY`: groups by the metadata field,
///   normalizing missing or empty values to [`UNKNOWN_GROUP`].
/// - `TASK`: groups by activity display name across roles using
///   `task_selections`; a task name counts once per contributing role
///   even when several of that role's activities share the name.
///
/// Groups appear in first-seen order, and each breakdown preserves the
/// order role mappings were supplied. An empty `role_mappings` slice
/// yields an empty result for every dimension.
pub fn aggregate_by_dimension(
    session_id: Uuid,
    dimension: Dimension,
    role_mappings: &[RoleMapping],
    role_scores: &HashMap<Uuid, AnalysisScores>,
    task_selections: &TaskSelections,
) -> Vec<DimensionAggregation> {
    if dimension == Dimension::Role {
        return role_mappings
            .iter()
            .map(|mapping| {
                let scores = scores_for(role_scores, mapping);
                let members = [(mapping, scores)];
                build_aggregation(
                    session_id,
                    dimension,
                    mapping.source_role.clone(),
                    &members,
                    scores,
                    u64::from(mapping.row_count),
                )
            })
            .collect();
    }

    let mut groups: IndexMap<String, Vec<(&RoleMapping, AnalysisScores)>> = IndexMap::new();

    for mapping in role_mappings {
        let scores = scores_for(role_scores, mapping);
        match dimension {
            Dimension::Department => {
                groups
                    .entry(group_value(mapping.metadata.department.as_ref()))
                    .or_default()
                    .push((mapping, scores));
            }
            Dimension::Lob => {
                groups
                    .entry(group_value(mapping.metadata.lob.as_ref()))
                    .or_default()
                    .push((mapping, scores));
            }
            Dimension::Geography => {
                groups
                    .entry(group_value(mapping.metadata.geography.as_ref()))
                    .or_default()
                    .push((mapping, scores));
            }
            Dimension::Task => {
                // One contribution per role per task name, regardless of
                // how many of the role's DWAs share that name.
                let task_names: IndexSet<&str> = task_selections
                    .get(&mapping.id)
                    .map(|activities| {
                        activities
                            .iter()
                            .map(|a| a.display_name.as_str())
                            .collect()
                    })
                    .unwrap_or_default();

                for name in task_names {
                    groups
                        .entry(name.to_string())
                        .or_default()
                        .push((mapping, scores));
                }
            }
            Dimension::Role => unreachable!("handled above"),
        }
    }

    groups
        .into_iter()
        .map(|(value, members)| {
            let (scores, total_headcount) = weighted_scores(&members);
            build_aggregation(
                session_id,
                dimension,
                value,
                &members,
                scores,
                total_headcount,
            )
        })
        .collect()
}

/// Runs all five dimension groupings in one call.
///
/// Returns a map keyed by dimension in canonical order. Every session
/// with at least one role mapping produces a non-empty ROLE entry; an
/// empty `role_mappings` input yields an empty list for every dimension.
pub fn aggregate_all_dimensions(
    session_id: Uuid,
    role_mappings: &[RoleMapping],
    role_scores: &HashMap<Uuid, AnalysisScores>,
    task_selections: &TaskSelections,
) -> IndexMap<Dimension, Vec<DimensionAggregation>> {
    Dimension::ALL
        .into_iter()
        .map(|dimension| {
            let aggregations = aggregate_by_dimension(
                session_id,
                dimension,
                role_mappings,
                role_scores,
                task_selections,
            );
            (dimension, aggregations)
        })
        .collect()
}
