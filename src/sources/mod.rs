//! Collaborator interfaces consumed by the scoring engine.
//!
//! The engine reads role mappings, activity selections, and taxonomy
//! data from external collaborators, and writes dimension aggregations
//! through a result sink. Each collaborator is a trait so higher layers
//! depend on the contract, not a concrete backend, and tests can swap in
//! the in-memory implementations re-exported below.
//!
//! All traits are object-safe and used as `Arc<dyn ...>` by the
//! [`SessionScoringEngine`](crate::scoring::SessionScoringEngine).

mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{ActivityHierarchy, ActivitySelection, DimensionAggregation, RoleMapping};

pub use memory::{InMemoryResultStore, InMemoryRoster, InMemoryTaxonomy, SinkOp};

/// Read access to confirmed role mappings.
///
/// Owned by the role-mapping collaborator; read-only to this engine.
#[async_trait]
pub trait RoleMappingSource: Send + Sync {
    /// Returns all confirmed role mappings for a session.
    ///
    /// An empty result is not an error; it yields a well-formed, all-zero
    /// scoring result.
    async fn get_for_session(&self, session_id: Uuid) -> EngineResult<Vec<RoleMapping>>;
}

/// Read access to a role mapping's selected work activities.
#[async_trait]
pub trait SelectionSource: Send + Sync {
    /// Returns the selections with `selected = true` for a role mapping.
    async fn get_selected_for_role_mapping(
        &self,
        role_mapping_id: Uuid,
    ) -> EngineResult<Vec<ActivitySelection>>;
}

/// Read access to the work-activity taxonomy hierarchy.
///
/// Owned by the taxonomy-sync collaborator; the reference tables are
/// immutable while a scoring run executes.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    /// Resolves a work activity's hierarchy view.
    ///
    /// Returns `Ok(None)` when the work activity no longer exists in the
    /// taxonomy; the exposure resolver absorbs that case with its default
    /// value rather than failing the run.
    async fn resolve_hierarchy(
        &self,
        work_activity_id: &str,
    ) -> EngineResult<Option<ActivityHierarchy>>;
}

/// Write access for persisted dimension aggregations.
///
/// A scoring run replaces a session's rows wholesale: the engine calls
/// [`delete_by_session_id`](ResultSink::delete_by_session_id) strictly
/// before [`bulk_create`](ResultSink::bulk_create), so a crash between
/// the two leaves "no results" rather than stale ones. Implementations
/// are expected to make each call atomic; SQL-backed implementations
/// should additionally wrap the pair in one transaction.
#[async_trait]
pub trait ResultSink: Send + Sync {
    /// Deletes every persisted aggregation for a session.
    ///
    /// Returns the number of rows removed. The count is informational and
    /// never gates the subsequent create.
    async fn delete_by_session_id(&self, session_id: Uuid) -> EngineResult<u64>;

    /// Persists a batch of newly computed aggregations.
    ///
    /// Returns the persisted rows.
    async fn bulk_create(
        &self,
        aggregations: Vec<DimensionAggregation>,
    ) -> EngineResult<Vec<DimensionAggregation>>;
}
