//! Session scoring orchestration.
//!
//! This module drives a full scoring run for one session: it loads role
//! mappings and activity selections from the collaborator sources,
//! resolves exposures, scores every role, aggregates all five
//! dimensions, and optionally replaces the session's persisted
//! aggregations.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::info;
use uuid::Uuid;

use crate::config::ScoringConfig;
use crate::error::EngineResult;
use crate::models::{AnalysisScores, SelectedActivity, SessionScoringResult};
use crate::sources::{ActivitySource, ResultSink, RoleMappingSource, SelectionSource};

use super::aggregation::{TaskSelections, aggregate_all_dimensions};
use super::exposure::ExposureResolver;
use super::role_score::score_role;

/// The scoring engine's single entry point.
///
/// Holds the collaborator interfaces and the scoring configuration.
/// Sessions own disjoint rows, so any number of sessions may be scored
/// concurrently with no coordination. Concurrent rescoring of the *same*
/// session is not protected here; callers must serialize per session
/// (e.g., with a session-level advisory lock) or accept last-writer-wins
/// semantics.
pub struct SessionScoringEngine {
    role_mappings: Arc<dyn RoleMappingSource>,
    selections: Arc<dyn SelectionSource>,
    activities: Arc<dyn ActivitySource>,
    results: Arc<dyn ResultSink>,
    config: ScoringConfig,
}

impl SessionScoringEngine {
    /// Creates an engine over the given collaborators and configuration.
    pub fn new(
        role_mappings: Arc<dyn RoleMappingSource>,
        selections: Arc<dyn SelectionSource>,
        activities: Arc<dyn ActivitySource>,
        results: Arc<dyn ResultSink>,
        config: ScoringConfig,
    ) -> Self {
        Self {
            role_mappings,
            selections,
            activities,
            results,
            config,
        }
    }

    /// Returns the engine's scoring configuration.
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a session end to end.
    ///
    /// A scoring run is always a full recomputation. A session with no
    /// role mappings returns a well-formed result with empty maps and
    /// zeroed counters; it is not an error.
    ///
    /// When `persist` is set, the session's previously persisted
    /// aggregations are deleted and the new ones inserted, in that
    /// order, so an interruption between the two steps leaves "no
    /// results" (treated as "not yet scored") rather than stale ones.
    /// Persistence failures propagate unmodified; the engine performs no
    /// retry.
    pub async fn score_session(
        &self,
        session_id: Uuid,
        persist: bool,
    ) -> EngineResult<SessionScoringResult> {
        info!(session_id = %session_id, persist, "Scoring session");

        let mappings = self.role_mappings.get_for_session(session_id).await?;
        if mappings.is_empty() {
            info!(session_id = %session_id, "No role mappings; returning empty result");
            return Ok(self.empty_result(session_id));
        }

        let max_headcount = mappings.iter().map(|m| m.row_count).max().unwrap_or(0);
        let total_headcount: u64 = mappings.iter().map(|m| u64::from(m.row_count)).sum();

        // Memoization is scoped to this run; the resolver is dropped with it.
        let mut resolver =
            ExposureResolver::new(self.activities.as_ref(), self.config.default_exposure.0);

        let mut role_scores: HashMap<Uuid, AnalysisScores> = HashMap::new();
        let mut task_selections = TaskSelections::new();

        for mapping in &mappings {
            let selections = self
                .selections
                .get_selected_for_role_mapping(mapping.id)
                .await?;

            let mut resolved: Vec<SelectedActivity> = Vec::with_capacity(selections.len());
            for selection in selections.iter().filter(|s| s.selected) {
                resolved.push(resolver.resolve(&selection.work_activity_id).await);
            }

            let exposures: Vec<Decimal> = resolved.iter().map(|a| a.exposure).collect();
            let scores = score_role(&exposures, mapping.row_count, max_headcount, &self.config);

            role_scores.insert(mapping.id, scores);
            task_selections.insert(mapping.id, resolved);
        }

        let aggregations: Vec<_> =
            aggregate_all_dimensions(session_id, &mappings, &role_scores, &task_selections)
                .into_values()
                .flatten()
                .collect();

        let result = SessionScoringResult {
            session_id,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            computed_at: Utc::now(),
            role_scores,
            aggregations,
            max_headcount,
            total_headcount,
            total_roles: mappings.len() as u32,
        };

        if persist {
            let removed = self.results.delete_by_session_id(session_id).await?;
            self.results.bulk_create(result.aggregations.clone()).await?;
            info!(
                session_id = %session_id,
                removed,
                created = result.aggregations.len(),
                "Replaced persisted aggregations"
            );
        }

        info!(
            session_id = %session_id,
            total_roles = result.total_roles,
            total_headcount = result.total_headcount,
            "Session scored"
        );
        Ok(result)
    }

    fn empty_result(&self, session_id: Uuid) -> SessionScoringResult {
        SessionScoringResult {
            session_id,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            computed_at: Utc::now(),
            role_scores: HashMap::new(),
            aggregations: Vec::new(),
            max_headcount: 0,
            total_headcount: 0,
            total_roles: 0,
        }
    }
}
