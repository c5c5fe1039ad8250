//! Occupational taxonomy models.
//!
//! This module defines the three-level work-activity taxonomy reference
//! data: detailed work activities (DWAs), intermediate work activities
//! (IWAs), and generalized work activities (GWAs). All three are
//! immutable reference data owned by the taxonomy-sync collaborator;
//! this engine only reads them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A detailed work activity (DWA), the finest-grained unit of work.
///
/// A DWA belongs to exactly one intermediate work activity. It may carry
/// an exposure override that takes precedence over the parent GWA's
/// exposure score during resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkActivity {
    /// Taxonomy identifier (e.g., "4.A.1.a.1.I01").
    pub id: String,
    /// Human-readable activity name.
    pub name: String,
    /// Optional AI-exposure override in [0, 1]; takes precedence over
    /// the parent GWA's exposure score.
    #[serde(default)]
    pub exposure_override: Option<Decimal>,
    /// Identifier of the parent intermediate work activity.
    pub iwa_id: String,
}

/// An intermediate work activity (IWA), a mid-level grouping of DWAs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntermediateActivity {
    /// Taxonomy identifier (e.g., "4.A.1.a.1").
    pub id: String,
    /// Identifier of the parent generalized work activity.
    pub gwa_id: String,
}

/// A generalized work activity (GWA), the top-level grouping of IWAs.
///
/// GWAs carry the fallback exposure score used when a DWA has no
/// override of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralizedActivity {
    /// Taxonomy identifier (e.g., "4.A.1.a").
    pub id: String,
    /// Human-readable activity name.
    pub name: String,
    /// AI-exposure score in [0, 1], or unset if not yet assessed.
    #[serde(default)]
    pub exposure_score: Option<Decimal>,
}

/// The resolved hierarchy view for one work activity.
///
/// Returned by [`ActivitySource::resolve_hierarchy`] and consumed by the
/// exposure resolver. Missing taxonomy links show up as `None` fields
/// rather than errors.
///
/// [`ActivitySource::resolve_hierarchy`]: crate::sources::ActivitySource::resolve_hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityHierarchy {
    /// The DWA's display name.
    pub display_name: String,
    /// The DWA's own exposure override, if any.
    pub exposure_override: Option<Decimal>,
    /// The parent GWA's exposure score, if the chain resolves to one.
    pub gwa_exposure_score: Option<Decimal>,
}

/// A selected work activity with its resolved exposure value.
///
/// Produced by the exposure resolver for every selected DWA of a role;
/// the display name feeds the TASK dimension aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectedActivity {
    /// The work activity identifier.
    pub work_activity_id: String,
    /// The activity's display name.
    pub display_name: String,
    /// The resolved AI-exposure value in [0, 1].
    pub exposure: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_deserialize_work_activity_with_override() {
        let json = r#"{
            "id": "4.A.1.a.1.I01",
            "name": "Review customer insurance claims",
            "exposure_override": "0.8",
            "iwa_id": "4.A.1.a.1"
        }"#;

        let dwa: WorkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(dwa.id, "4.A.1.a.1.I01");
        assert_eq!(dwa.name, "Review customer insurance claims");
        assert_eq!(dwa.exposure_override, Some(dec("0.8")));
        assert_eq!(dwa.iwa_id, "4.A.1.a.1");
    }

    #[test]
    fn test_deserialize_work_activity_without_override() {
        let json = r#"{
            "id": "4.A.1.a.1.I02",
            "name": "Monitor equipment gauges",
            "iwa_id": "4.A.1.a.1"
        }"#;

        let dwa: WorkActivity = serde_json::from_str(json).unwrap();
        assert_eq!(dwa.exposure_override, None);
    }

    #[test]
    fn test_deserialize_generalized_activity_without_score() {
        let json = r#"{
            "id": "4.A.1.a",
            "name": "Getting Information"
        }"#;

        let gwa: GeneralizedActivity = serde_json::from_str(json).unwrap();
        assert_eq!(gwa.exposure_score, None);
    }

    #[test]
    fn test_work_activity_round_trip() {
        let dwa = WorkActivity {
            id: "4.A.2.a.3.I05".to_string(),
            name: "Prepare financial reports".to_string(),
            exposure_override: Some(dec("0.65")),
            iwa_id: "4.A.2.a.3".to_string(),
        };

        let json = serde_json::to_string(&dwa).unwrap();
        let deserialized: WorkActivity = serde_json::from_str(&json).unwrap();
        assert_eq!(dwa, deserialized);
    }

    #[test]
    fn test_intermediate_activity_links_to_gwa() {
        let iwa = IntermediateActivity {
            id: "4.A.1.a.1".to_string(),
            gwa_id: "4.A.1.a".to_string(),
        };

        let json = serde_json::to_string(&iwa).unwrap();
        assert!(json.contains("\"gwa_id\":\"4.A.1.a\""));
    }

    #[test]
    fn test_selected_activity_serializes_exposure_as_string() {
        let selected = SelectedActivity {
            work_activity_id: "4.A.1.a.1.I01".to_string(),
            display_name: "Review customer insurance claims".to_string(),
            exposure: dec("0.8"),
        };

        let json = serde_json::to_string(&selected).unwrap();
        assert!(json.contains("\"exposure\":\"0.8\""));
    }
}
