//! HTTP API module for the AI Exposure Scoring Engine.
//!
//! This module provides the REST endpoints for triggering a session's
//! scoring run and reading its analysis by dimension.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AnalysisQuery;
pub use response::{AnalysisResponse, ApiError};
pub use state::AppState;
