//! In-memory collaborator implementations.
//!
//! These back the HTTP surface in development and give tests full
//! control over roster, taxonomy, and persisted state without an
//! external database. [`InMemoryResultStore`] additionally records every
//! sink call, which tests use to assert the delete-before-create
//! ordering of rescoring.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    ActivityHierarchy, ActivitySelection, DimensionAggregation, GeneralizedActivity,
    IntermediateActivity, RoleMapping, WorkActivity,
};

use super::{ActivitySource, ResultSink, RoleMappingSource, SelectionSource};

/// In-memory DWA/IWA/GWA reference tables.
///
/// `resolve_hierarchy` performs the DWA → IWA → GWA join; a missing
/// intermediate or generalized record degrades to a `None` exposure
/// score, not an error.
#[derive(Debug, Default)]
pub struct InMemoryTaxonomy {
    dwas: HashMap<String, WorkActivity>,
    iwas: HashMap<String, IntermediateActivity>,
    gwas: HashMap<String, GeneralizedActivity>,
}

impl InMemoryTaxonomy {
    /// Creates an empty taxonomy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a detailed work activity.
    pub fn insert_work_activity(&mut self, dwa: WorkActivity) {
        self.dwas.insert(dwa.id.clone(), dwa);
    }

    /// Inserts an intermediate work activity.
    pub fn insert_intermediate_activity(&mut self, iwa: IntermediateActivity) {
        self.iwas.insert(iwa.id.clone(), iwa);
    }

    /// Inserts a generalized work activity.
    pub fn insert_generalized_activity(&mut self, gwa: GeneralizedActivity) {
        self.gwas.insert(gwa.id.clone(), gwa);
    }
}

#[async_trait]
impl ActivitySource for InMemoryTaxonomy {
    async fn resolve_hierarchy(
        &self,
        work_activity_id: &str,
    ) -> EngineResult<Option<ActivityHierarchy>> {
        let Some(dwa) = self.dwas.get(work_activity_id) else {
            return Ok(None);
        };

        let gwa_exposure_score = self
            .iwas
            .get(&dwa.iwa_id)
            .and_then(|iwa| self.gwas.get(&iwa.gwa_id))
            .and_then(|gwa| gwa.exposure_score);

        Ok(Some(ActivityHierarchy {
            display_name: dwa.name.clone(),
            exposure_override: dwa.exposure_override,
            gwa_exposure_score,
        }))
    }
}

/// In-memory role mappings and activity selections for one or more
/// sessions.
#[derive(Debug, Default)]
pub struct InMemoryRoster {
    mappings: Vec<RoleMapping>,
    selections: HashMap<Uuid, Vec<ActivitySelection>>,
}

impl InMemoryRoster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a role mapping. Mappings keep their insertion order.
    pub fn add_mapping(&mut self, mapping: RoleMapping) {
        self.mappings.push(mapping);
    }

    /// Adds an activity selection for a role mapping.
    pub fn add_selection(&mut self, selection: ActivitySelection) {
        self.selections
            .entry(selection.role_mapping_id)
            .or_default()
            .push(selection);
    }
}

#[async_trait]
impl RoleMappingSource for InMemoryRoster {
    async fn get_for_session(&self, session_id: Uuid) -> EngineResult<Vec<RoleMapping>> {
        Ok(self
            .mappings
            .iter()
            .filter(|m| m.session_id == session_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl SelectionSource for InMemoryRoster {
    async fn get_selected_for_role_mapping(
        &self,
        role_mapping_id: Uuid,
    ) -> EngineResult<Vec<ActivitySelection>> {
        Ok(self
            .selections
            .get(&role_mapping_id)
            .map(|selections| {
                selections
                    .iter()
                    .filter(|s| s.selected)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }
}

/// One recorded call against an [`InMemoryResultStore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    /// `delete_by_session_id` was called for a session.
    DeleteBySession(Uuid),
    /// `bulk_create` was called with this many rows.
    BulkCreate(usize),
}

/// In-memory result sink with an operation log.
///
/// Each call is atomic. The log exposes the exact call sequence so tests
/// can assert that rescoring deletes before it creates.
#[derive(Debug, Default)]
pub struct InMemoryResultStore {
    rows: Mutex<Vec<DimensionAggregation>>,
    ops: Mutex<Vec<SinkOp>>,
}

impl InMemoryResultStore {
    /// Creates an empty result store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded call sequence.
    pub fn operations(&self) -> Vec<SinkOp> {
        self.ops.lock().expect("result store mutex poisoned").clone()
    }

    /// Returns the persisted rows for a session.
    pub fn rows_for_session(&self, session_id: Uuid) -> Vec<DimensionAggregation> {
        self.rows
            .lock()
            .expect("result store mutex poisoned")
            .iter()
            .filter(|row| row.session_id == session_id)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl ResultSink for InMemoryResultStore {
    async fn delete_by_session_id(&self, session_id: Uuid) -> EngineResult<u64> {
        let mut rows = self.rows.lock().expect("result store mutex poisoned");
        let before = rows.len();
        rows.retain(|row| row.session_id != session_id);
        let removed = (before - rows.len()) as u64;

        self.ops
            .lock()
            .expect("result store mutex poisoned")
            .push(SinkOp::DeleteBySession(session_id));

        Ok(removed)
    }

    async fn bulk_create(
        &self,
        aggregations: Vec<DimensionAggregation>,
    ) -> EngineResult<Vec<DimensionAggregation>> {
        self.rows
            .lock()
            .expect("result store mutex poisoned")
            .extend(aggregations.iter().cloned());

        self.ops
            .lock()
            .expect("result store mutex poisoned")
            .push(SinkOp::BulkCreate(aggregations.len()));

        Ok(aggregations)
    }
}
