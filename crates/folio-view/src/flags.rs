//! Visual flag projection
//!
//! The styling layer reads view state only through [`ViewFlags`], which is
//! derived from [`ViewState`] and never read back.

use crate::view::{PrimaryView, ViewState};

/// Every root class the controller may toggle.
///
/// Surfaces remove the classes not present in [`ViewFlags::root_classes`].
pub const ROOT_CLASSES: &[&str] = &["view-projects", "view-about"];

/// Flags consumed by the visual layer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewFlags {
    /// Classes that must be present on the document root
    pub root_classes: Vec<&'static str>,
    /// Whether the outer document scroll is locked
    pub scroll_locked: bool,
    /// Whether the project detail overlay is shown
    pub overlay_visible: bool,
}

impl ViewFlags {
    /// Project a view state onto visual flags
    pub fn project(state: &ViewState) -> Self {
        Self {
            root_classes: state.effective_primary().class_name().into_iter().collect(),
            scroll_locked: state.scroll_locked(),
            overlay_visible: state.overlay_open(),
        }
    }

    /// Whether `class` should be present on the document root
    pub fn has_class(&self, class: &str) -> bool {
        self.root_classes.iter().any(|c| *c == class)
    }

    /// CSS `overflow` value for the outer document
    pub fn overflow(&self) -> &'static str {
        if self.scroll_locked {
            "hidden"
        } else {
            "auto"
        }
    }
}

/// External hook that renders view state.
///
/// Called after every state change, including scroll-lock changes.
pub trait ViewSurface {
    fn render(&mut self, state: &ViewState, flags: &ViewFlags);
}

/// Surface that renders nothing
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSurface;

impl ViewSurface for NullSurface {
    fn render(&mut self, _state: &ViewState, _flags: &ViewFlags) {}
}

/// Surface that records every frame it was asked to render
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub frames: Vec<(ViewState, ViewFlags)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently rendered frame
    pub fn last(&self) -> Option<&(ViewState, ViewFlags)> {
        self.frames.last()
    }
}

impl ViewSurface for RecordingSurface {
    fn render(&mut self, state: &ViewState, flags: &ViewFlags) {
        self.frames.push((state.clone(), flags.clone()));
    }
}

impl PrimaryView {
    /// Flags for this view with the overlay closed
    pub fn flags(self) -> ViewFlags {
        ViewFlags::project(&ViewState {
            primary: self,
            overlay: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::ProjectPayload;

    #[test]
    fn test_home_has_no_classes() {
        let flags = PrimaryView::Home.flags();
        assert!(flags.root_classes.is_empty());
        assert_eq!(flags.overflow(), "auto");
        assert!(!flags.overlay_visible);
    }

    #[test]
    fn test_panel_views_lock_scroll() {
        let flags = PrimaryView::Projects.flags();
        assert_eq!(flags.root_classes, vec!["view-projects"]);
        assert!(!flags.has_class("view-about"));
        assert_eq!(flags.overflow(), "hidden");

        let flags = PrimaryView::About.flags();
        assert_eq!(flags.root_classes, vec!["view-about"]);
        assert!(flags.scroll_locked);
    }

    #[test]
    fn test_overlay_visible_follows_payload() {
        let state = ViewState {
            primary: PrimaryView::Projects,
            overlay: Some(ProjectPayload::with_id("card-1")),
        };
        let flags = ViewFlags::project(&state);
        assert!(flags.overlay_visible);
        assert!(flags.has_class("view-projects"));
    }

    #[test]
    fn test_overlay_over_home_renders_as_projects() {
        let state = ViewState {
            primary: PrimaryView::Home,
            overlay: Some(ProjectPayload::with_id("card-1")),
        };
        let flags = ViewFlags::project(&state);
        assert_eq!(flags.root_classes, vec!["view-projects"]);
        assert_eq!(flags.overflow(), "hidden");
    }

    #[test]
    fn test_root_classes_are_known() {
        for view in PrimaryView::all() {
            for class in view.flags().root_classes {
                assert!(ROOT_CLASSES.contains(&class));
            }
        }
    }
}
