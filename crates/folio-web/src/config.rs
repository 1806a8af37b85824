//! Page configuration
//!
//! Passed as optional JSON to the [`Portfolio`](crate::Portfolio)
//! constructor. Every field defaults to the markup the page ships with.

use folio_view::{ViewConfig, ViewError, ViewResult};
use serde::{Deserialize, Serialize};

/// CSS selectors for the elements the shell binds to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Selectors {
    pub open_projects: String,
    pub open_about: String,
    pub project_card: String,
    /// Clicks landing directly on these elements close every view
    pub background: String,
    pub modal: String,
    pub modal_title: String,
    pub modal_description: String,
    pub modal_image: String,
    pub modal_link: String,
    pub modal_close: String,
    pub home_region: String,
    pub projects_region: String,
    pub about_region: String,
    pub fade_in: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            open_projects: r#"[data-open="projects"]"#.to_string(),
            open_about: r#"[data-open="about"]"#.to_string(),
            project_card: ".project-card".to_string(),
            background: "#background".to_string(),
            modal: "#projectModal".to_string(),
            modal_title: "#modalTitle".to_string(),
            modal_description: "#modalDesc".to_string(),
            modal_image: "#modalImg".to_string(),
            modal_link: "#modalLink".to_string(),
            modal_close: "#modalClose".to_string(),
            home_region: "#content-wrapper".to_string(),
            projects_region: "#projects-view .pv-inner".to_string(),
            about_region: "#about-view .pv-inner".to_string(),
            fade_in: ".fade-in".to_string(),
        }
    }
}

/// Entrance sequence delays, each relative to the previous step
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroTimings {
    /// Page ready → `step-1`
    pub first_ms: i32,
    /// `step-1` → `step-2`
    pub second_ms: i32,
    /// `step-2` → `nav-active` and scroll policy
    pub settle_ms: i32,
    /// Visible fraction at which a `.fade-in` element is revealed
    pub fade_threshold: f64,
}

impl Default for IntroTimings {
    fn default() -> Self {
        Self {
            first_ms: 400,
            second_ms: 600,
            settle_ms: 1000,
            fade_threshold: 0.1,
        }
    }
}

/// Full shell configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortfolioConfig {
    pub view: ViewConfig,
    pub selectors: Selectors,
    pub intro: IntroTimings,
}

impl PortfolioConfig {
    /// Parse from JSON; `None` or a blank string yields the defaults
    pub fn from_json(json: Option<&str>) -> ViewResult<Self> {
        let config = match json.map(str::trim) {
            None | Some("") => Self::default(),
            Some(json) => {
                serde_json::from_str(json).map_err(|e| ViewError::Config(e.to_string()))?
            }
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ViewResult<()> {
        self.view.validate()?;
        let intro = &self.intro;
        if intro.first_ms < 0 || intro.second_ms < 0 || intro.settle_ms < 0 {
            return Err(ViewError::Config("intro delays must be non-negative".to_string()));
        }
        if !(0.0..=1.0).contains(&intro.fade_threshold) {
            return Err(ViewError::Config(format!(
                "fade_threshold must be within 0..=1, got {}",
                intro.fade_threshold
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_config_is_default() {
        assert_eq!(PortfolioConfig::from_json(None).unwrap(), PortfolioConfig::default());
        assert_eq!(PortfolioConfig::from_json(Some("  ")).unwrap(), PortfolioConfig::default());
    }

    #[test]
    fn test_nested_partial_config() {
        let config = PortfolioConfig::from_json(Some(
            r#"{"selectors": {"background": ".backdrop"}, "view": {"boundary_cooldown_ms": 0}}"#,
        ))
        .unwrap();
        assert_eq!(config.selectors.background, ".backdrop");
        assert_eq!(config.selectors.project_card, ".project-card");
        assert_eq!(config.view.boundary_cooldown_ms, 0.0);
        assert_eq!(config.intro.first_ms, 400);
    }

    #[test]
    fn test_invalid_json() {
        let err = PortfolioConfig::from_json(Some("{not json")).unwrap_err();
        assert!(matches!(err, ViewError::Config(_)));
    }

    #[test]
    fn test_invalid_threshold() {
        let err = PortfolioConfig::from_json(Some(r#"{"intro": {"fade_threshold": 2.0}}"#));
        assert!(err.is_err());
    }
}
