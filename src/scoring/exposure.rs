//! AI-exposure resolution through the taxonomy hierarchy.
//!
//! This module provides the [`ExposureResolver`], which turns a work
//! activity identifier into an exposure value using the DWA → IWA → GWA
//! hierarchy, memoizing per resolver instance since the same DWA can be
//! selected by many roles in one scoring run.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::warn;

use crate::models::SelectedActivity;
use crate::sources::ActivitySource;

/// Resolves work-activity exposure values for one scoring run.
///
/// Resolution order (first match wins):
/// 1. The work activity's own `exposure_override`.
/// 2. The parent generalized activity's `exposure_score`.
/// 3. The configured default ("unknown, assume moderate exposure").
///
/// Missing taxonomy records and lookup failures are absorbed by the
/// default; resolution never fails. Results are memoized by work-activity
/// id. A resolver is constructed at the start of each scoring run and
/// discarded with it, so the cache is never shared across sessions.
pub struct ExposureResolver<'a> {
    activities: &'a dyn ActivitySource,
    default_exposure: Decimal,
    cache: HashMap<String, SelectedActivity>,
}

impl<'a> ExposureResolver<'a> {
    /// Creates a resolver over the given taxonomy source.
    pub fn new(activities: &'a dyn ActivitySource, default_exposure: Decimal) -> Self {
        Self {
            activities,
            default_exposure,
            cache: HashMap::new(),
        }
    }

    /// Resolves a work activity to its exposure value and display name.
    ///
    /// A work activity that has vanished from the taxonomy resolves to
    /// the default exposure with its id as the display name; the gap is
    /// logged, never surfaced as an error.
    pub async fn resolve(&mut self, work_activity_id: &str) -> SelectedActivity {
        if let Some(cached) = self.cache.get(work_activity_id) {
            return cached.clone();
        }

        let resolved = match self.activities.resolve_hierarchy(work_activity_id).await {
            Ok(Some(hierarchy)) => {
                let exposure = hierarchy
                    .exposure_override
                    .or(hierarchy.gwa_exposure_score)
                    .unwrap_or(self.default_exposure);
                SelectedActivity {
                    work_activity_id: work_activity_id.to_string(),
                    display_name: hierarchy.display_name,
                    exposure,
                }
            }
            Ok(None) => {
                warn!(
                    work_activity_id = %work_activity_id,
                    "Work activity missing from taxonomy, using default exposure"
                );
                self.default_activity(work_activity_id)
            }
            Err(err) => {
                warn!(
                    work_activity_id = %work_activity_id,
                    error = %err,
                    "Taxonomy lookup failed, using default exposure"
                );
                self.default_activity(work_activity_id)
            }
        };

        self.cache
            .insert(work_activity_id.to_string(), resolved.clone());
        resolved
    }

    fn default_activity(&self, work_activity_id: &str) -> SelectedActivity {
        SelectedActivity {
            work_activity_id: work_activity_id.to_string(),
            display_name: work_activity_id.to_string(),
            exposure: self.default_exposure,
        }
    }
}
