//! Controller configuration
//!
//! All fields have defaults matching the shipped page, so an empty JSON
//! object (or no configuration at all) yields a working controller.

use serde::{Deserialize, Serialize};

use crate::error::{ViewError, ViewResult};

/// Query parameter that mirrors the primary view (the empty key, `?=about`)
pub const DEFAULT_VIEW_PARAM: &str = "";

/// Query parameter that carries the open project id
pub const DEFAULT_PROJECT_PARAM: &str = "project";

/// Quiet period after a boundary transition during which further boundary
/// events are dropped. Momentum scrolling otherwise skips a view.
pub const DEFAULT_BOUNDARY_COOLDOWN_MS: f64 = 400.0;

/// Viewport width at or below which the mobile geometry applies
pub const DEFAULT_MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Tunables for the transition controller
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Name of the query parameter mirroring the primary view
    pub view_param: String,
    /// Name of the query parameter mirroring the open project
    pub project_param: String,
    /// Boundary re-entrancy guard in milliseconds; `0` disables the guard
    pub boundary_cooldown_ms: f64,
    /// Mobile layout breakpoint in CSS pixels
    pub mobile_breakpoint_px: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            view_param: DEFAULT_VIEW_PARAM.to_string(),
            project_param: DEFAULT_PROJECT_PARAM.to_string(),
            boundary_cooldown_ms: DEFAULT_BOUNDARY_COOLDOWN_MS,
            mobile_breakpoint_px: DEFAULT_MOBILE_BREAKPOINT_PX,
        }
    }
}

impl ViewConfig {
    /// Check values that serde cannot reject on its own
    pub fn validate(&self) -> ViewResult<()> {
        if self.view_param == self.project_param {
            return Err(ViewError::Config(format!(
                "view_param and project_param must differ (both {:?})",
                self.view_param
            )));
        }
        if !self.boundary_cooldown_ms.is_finite() || self.boundary_cooldown_ms < 0.0 {
            return Err(ViewError::Config(format!(
                "boundary_cooldown_ms must be a non-negative number, got {}",
                self.boundary_cooldown_ms
            )));
        }
        if !self.mobile_breakpoint_px.is_finite() || self.mobile_breakpoint_px <= 0.0 {
            return Err(ViewError::Config(format!(
                "mobile_breakpoint_px must be positive, got {}",
                self.mobile_breakpoint_px
            )));
        }
        Ok(())
    }

    /// Whether a viewport of `width` CSS pixels uses the mobile layout
    pub fn is_mobile(&self, width: f64) -> bool {
        width <= self.mobile_breakpoint_px
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ViewConfig::default();
        assert_eq!(config.view_param, "");
        assert_eq!(config.project_param, "project");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: ViewConfig = serde_json::from_str(r#"{"boundary_cooldown_ms": 0}"#).unwrap();
        assert_eq!(config.boundary_cooldown_ms, 0.0);
        assert_eq!(config.project_param, "project");
    }

    #[test]
    fn test_validate_rejects_same_param_names() {
        let config = ViewConfig {
            project_param: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ViewError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_negative_cooldown() {
        let config = ViewConfig {
            boundary_cooldown_ms: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_mobile_breakpoint_is_inclusive() {
        let config = ViewConfig::default();
        assert!(config.is_mobile(768.0));
        assert!(!config.is_mobile(769.0));
    }
}
