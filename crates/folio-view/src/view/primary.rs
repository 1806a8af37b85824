use serde::{Deserialize, Serialize};

/// The mutually exclusive top-level view of the page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryView {
    /// Landing page, no panel open
    #[default]
    Home,
    /// Project list panel
    Projects,
    /// About panel
    About,
}

impl PrimaryView {
    /// Get all primary views in wheel order
    pub fn all() -> &'static [PrimaryView] {
        &[PrimaryView::Home, PrimaryView::Projects, PrimaryView::About]
    }

    /// Parse a view query parameter value.
    ///
    /// Only the two panel views are addressable; home is expressed by the
    /// parameter being absent, so `"home"` and `""` are rejected.
    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "projects" => Some(PrimaryView::Projects),
            "about" => Some(PrimaryView::About),
            _ => None,
        }
    }

    /// Query parameter value for this view (`None` for home)
    pub fn param(&self) -> Option<&'static str> {
        match self {
            PrimaryView::Home => None,
            PrimaryView::Projects => Some("projects"),
            PrimaryView::About => Some("about"),
        }
    }

    /// Style marker placed on the document root while this view is shown
    pub fn class_name(&self) -> Option<&'static str> {
        match self {
            PrimaryView::Home => None,
            PrimaryView::Projects => Some("view-projects"),
            PrimaryView::About => Some("view-about"),
        }
    }

    /// Whether the outer document scroll is locked in this view
    pub fn locks_scroll(&self) -> bool {
        !matches!(self, PrimaryView::Home)
    }
}

impl std::fmt::Display for PrimaryView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PrimaryView::Home => f.write_str("home"),
            PrimaryView::Projects => f.write_str("projects"),
            PrimaryView::About => f.write_str("about"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_home() {
        let view: PrimaryView = Default::default();
        assert_eq!(view, PrimaryView::Home);
    }

    #[test]
    fn test_from_param() {
        assert_eq!(PrimaryView::from_param("projects"), Some(PrimaryView::Projects));
        assert_eq!(PrimaryView::from_param("about"), Some(PrimaryView::About));
        assert_eq!(PrimaryView::from_param("home"), None);
        assert_eq!(PrimaryView::from_param(""), None);
        assert_eq!(PrimaryView::from_param("About"), None);
    }

    #[test]
    fn test_param_roundtrip() {
        for view in PrimaryView::all() {
            match view.param() {
                Some(value) => assert_eq!(PrimaryView::from_param(value), Some(*view)),
                None => assert_eq!(*view, PrimaryView::Home),
            }
        }
    }

    #[test]
    fn test_scroll_lock_policy() {
        assert!(!PrimaryView::Home.locks_scroll());
        assert!(PrimaryView::Projects.locks_scroll());
        assert!(PrimaryView::About.locks_scroll());
    }
}
