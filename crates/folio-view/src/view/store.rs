//! View State Store
//!
//! A pure flag holder. It accepts every transition; which transitions a
//! given input may cause is decided by the controller.

use serde::{Deserialize, Serialize};

use super::{PrimaryView, ProjectPayload};

/// Snapshot of the page's view state
///
/// The overlay payload doubles as the open flag, so an open overlay
/// always has content.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub primary: PrimaryView,
    pub overlay: Option<ProjectPayload>,
}

impl ViewState {
    /// Whether the project detail overlay is open
    pub fn overlay_open(&self) -> bool {
        self.overlay.is_some()
    }

    /// Id of the open project, if any
    pub fn overlay_id(&self) -> Option<&str> {
        self.overlay.as_ref().map(|payload| payload.id.as_str())
    }

    /// The view used for scroll and URL decisions.
    ///
    /// An open overlay always counts as the projects view.
    pub fn effective_primary(&self) -> PrimaryView {
        if self.overlay_open() {
            PrimaryView::Projects
        } else {
            self.primary
        }
    }

    /// Whether the outer document scroll is locked
    pub fn scroll_locked(&self) -> bool {
        self.effective_primary().locks_scroll()
    }
}

/// Owner of the page's single [`ViewState`]
#[derive(Clone, Debug, Default)]
pub struct ViewStore {
    state: ViewState,
}

impl ViewStore {
    /// Create a store at home with the overlay closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn primary(&self) -> PrimaryView {
        self.state.primary
    }

    /// Switch the primary view. Legal from any state.
    pub fn set_primary(&mut self, target: PrimaryView) {
        self.state.primary = target;
    }

    /// Open the detail overlay with `payload`
    pub fn open_overlay(&mut self, payload: ProjectPayload) {
        self.state.overlay = Some(payload);
    }

    /// Close the detail overlay, keeping the primary view
    pub fn close_overlay(&mut self) {
        self.state.overlay = None;
    }

    /// Return to home with the overlay closed
    pub fn close_all(&mut self) {
        self.state.primary = PrimaryView::Home;
        self.state.overlay = None;
    }
}
