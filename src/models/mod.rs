//! Core data models for the AI Exposure Scoring Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod analysis;
mod role_mapping;
mod taxonomy;

pub use analysis::{
    AnalysisScores, Dimension, DimensionAggregation, RoleBreakdownEntry, SessionScoringResult,
};
pub use role_mapping::{ActivitySelection, RoleMapping, RoleMetadata};
pub use taxonomy::{
    ActivityHierarchy, GeneralizedActivity, IntermediateActivity, SelectedActivity, WorkActivity,
};
