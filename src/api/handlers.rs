//! HTTP request handlers for the AI Exposure Scoring Engine API.
//!
//! This module contains the handler functions for the session-level
//! "trigger analysis" action and the per-dimension analysis read path.

use std::str::FromStr;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Dimension;

use super::request::AnalysisQuery;
use super::response::{AnalysisResponse, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/sessions/:session_id/score", post(score_handler))
        .route("/sessions/:session_id/analysis", get(analysis_handler))
        .with_state(state)
}

/// Handler for `POST /sessions/{session_id}/score`.
///
/// Triggers a full scoring run for the session, replacing its persisted
/// aggregations, and returns the complete scoring result.
async fn score_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
) -> impl IntoResponse {
    info!(session_id = %session_id, "Processing score request");

    match state.engine().score_session(session_id, true).await {
        Ok(result) => {
            info!(
                session_id = %session_id,
                total_roles = result.total_roles,
                aggregations = result.aggregations.len(),
                "Scoring completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(session_id = %session_id, error = %err, "Scoring failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for `GET /sessions/{session_id}/analysis`.
///
/// Recomputes the session's scores (without persisting) and returns the
/// aggregations for the requested dimension. An unknown dimension tag is
/// a 400 usage error.
async fn analysis_handler(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Query(query): Query<AnalysisQuery>,
) -> impl IntoResponse {
    info!(
        session_id = %session_id,
        dimension = %query.dimension,
        "Processing analysis request"
    );

    let dimension = match Dimension::from_str(&query.dimension) {
        Ok(dimension) => dimension,
        Err(err) => {
            warn!(
                session_id = %session_id,
                dimension = %query.dimension,
                "Unknown dimension requested"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    match state.engine().score_session(session_id, false).await {
        Ok(result) => {
            let aggregations: Vec<_> = result
                .aggregations
                .into_iter()
                .filter(|a| a.dimension == dimension)
                .collect();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(AnalysisResponse {
                    session_id,
                    dimension: dimension.as_str().to_string(),
                    aggregations,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(session_id = %session_id, error = %err, "Analysis failed");
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}
