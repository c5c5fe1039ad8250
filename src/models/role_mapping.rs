//! Role mapping and activity selection models.
//!
//! This module defines the roster-side inputs to the scoring engine: a
//! role mapping links a source role from an uploaded roster to a standard
//! occupation code, and activity selections mark which of the
//! occupation's detailed work activities apply to the role. Both are
//! owned by the role-mapping collaborator and read-only to this engine.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Organizational metadata attached to a role mapping.
///
/// All fields are optional; a missing value is a typed absence and is
/// normalized to the literal group `"Unknown"` only at the aggregation
/// boundary, never earlier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMetadata {
    /// The department the role belongs to.
    #[serde(default)]
    pub department: Option<String>,
    /// The line of business the role belongs to.
    #[serde(default)]
    pub lob: Option<String>,
    /// The geography the role operates in.
    #[serde(default)]
    pub geography: Option<String>,
}

/// A confirmed mapping from a roster role to an occupation code.
///
/// `row_count` is the role's headcount as detected during roster upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleMapping {
    /// Unique identifier for this role mapping.
    pub id: Uuid,
    /// The analysis session this mapping belongs to.
    pub session_id: Uuid,
    /// The role name as it appeared in the uploaded roster.
    pub source_role: String,
    /// The standard occupation code the role was mapped to.
    pub occupation_code: String,
    /// Headcount for this role.
    pub row_count: u32,
    /// Organizational metadata for dimension grouping.
    #[serde(default)]
    pub metadata: RoleMetadata,
}

/// A user's selection of one work activity for one role mapping.
///
/// Only selections with `selected = true` participate in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivitySelection {
    /// The role mapping the selection belongs to.
    pub role_mapping_id: Uuid,
    /// The selected work activity.
    pub work_activity_id: String,
    /// Whether the activity is currently selected.
    pub selected: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_mapping() -> RoleMapping {
        RoleMapping {
            id: Uuid::new_v4(),
            session_id: Uuid::new_v4(),
            source_role: "Claims Adjuster".to_string(),
            occupation_code: "13-1031.00".to_string(),
            row_count: 100,
            metadata: RoleMetadata {
                department: Some("Claims".to_string()),
                lob: Some("P&C".to_string()),
                geography: Some("US-East".to_string()),
            },
        }
    }

    #[test]
    fn test_deserialize_role_mapping_with_metadata() {
        let json = r#"{
            "id": "12345678-1234-1234-1234-123456789012",
            "session_id": "87654321-4321-4321-4321-210987654321",
            "source_role": "Claims Adjuster",
            "occupation_code": "13-1031.00",
            "row_count": 100,
            "metadata": {
                "department": "Claims",
                "lob": "P&C",
                "geography": "US-East"
            }
        }"#;

        let mapping: RoleMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.source_role, "Claims Adjuster");
        assert_eq!(mapping.occupation_code, "13-1031.00");
        assert_eq!(mapping.row_count, 100);
        assert_eq!(mapping.metadata.department.as_deref(), Some("Claims"));
        assert_eq!(mapping.metadata.lob.as_deref(), Some("P&C"));
        assert_eq!(mapping.metadata.geography.as_deref(), Some("US-East"));
    }

    #[test]
    fn test_deserialize_role_mapping_without_metadata() {
        let json = r#"{
            "id": "12345678-1234-1234-1234-123456789012",
            "session_id": "87654321-4321-4321-4321-210987654321",
            "source_role": "Warehouse Associate",
            "occupation_code": "53-7062.00",
            "row_count": 250
        }"#;

        let mapping: RoleMapping = serde_json::from_str(json).unwrap();
        assert_eq!(mapping.metadata, RoleMetadata::default());
        assert_eq!(mapping.metadata.department, None);
    }

    #[test]
    fn test_role_mapping_round_trip() {
        let mapping = create_test_mapping();
        let json = serde_json::to_string(&mapping).unwrap();
        let deserialized: RoleMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(mapping, deserialized);
    }

    #[test]
    fn test_partial_metadata_deserializes() {
        let json = r#"{"department": "Operations"}"#;
        let metadata: RoleMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.department.as_deref(), Some("Operations"));
        assert_eq!(metadata.lob, None);
        assert_eq!(metadata.geography, None);
    }

    #[test]
    fn test_activity_selection_round_trip() {
        let selection = ActivitySelection {
            role_mapping_id: Uuid::new_v4(),
            work_activity_id: "4.A.1.a.1.I01".to_string(),
            selected: true,
        };

        let json = serde_json::to_string(&selection).unwrap();
        let deserialized: ActivitySelection = serde_json::from_str(&json).unwrap();
        assert_eq!(selection, deserialized);
    }
}
