//! Request types for the AI Exposure Scoring Engine API.
//!
//! This module defines the query parameters for the analysis read
//! endpoint.

use serde::{Deserialize, Serialize};

/// Query parameters for `GET /sessions/{session_id}/analysis`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisQuery {
    /// The dimension tag to return aggregations for (e.g., "DEPARTMENT").
    /// Defaults to "ROLE".
    #[serde(default = "default_dimension")]
    pub dimension: String,
}

fn default_dimension() -> String {
    "ROLE".to_string()
}
