//! Application state for the AI Exposure Scoring Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::scoring::SessionScoringEngine;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers,
/// currently just the scoring engine with its collaborator sources.
#[derive(Clone)]
pub struct AppState {
    /// The scoring engine.
    engine: Arc<SessionScoringEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: SessionScoringEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the scoring engine.
    pub fn engine(&self) -> &SessionScoringEngine {
        &self.engine
    }
}
