use crate::scroll::{Region, ScrollMetrics};
use crate::view::ProjectPayload;

/// Key that closes the project overlay
pub const ESCAPE_KEY: &str = "Escape";

/// An external stimulus the controller reacts to
#[derive(Clone, Debug, PartialEq)]
pub enum Trigger {
    /// "View projects" affordance clicked
    OpenProjects,
    /// "View about" affordance clicked
    OpenAbout,
    /// A project card clicked
    SelectProject(ProjectPayload),
    /// The overlay's close control clicked
    CloseOverlay,
    /// A key pressed anywhere on the page (`KeyboardEvent.key`)
    KeyPress(String),
    /// A click outside every view
    BackgroundClick,
    /// A wheel event on one of the scroll regions
    Wheel {
        region: Region,
        delta_y: f64,
        metrics: ScrollMetrics,
        /// Event timestamp in milliseconds
        now_ms: f64,
    },
}

impl Trigger {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Trigger::OpenProjects => "open_projects",
            Trigger::OpenAbout => "open_about",
            Trigger::SelectProject(_) => "select_project",
            Trigger::CloseOverlay => "close_overlay",
            Trigger::KeyPress(_) => "key_press",
            Trigger::BackgroundClick => "background_click",
            Trigger::Wheel { .. } => "wheel",
        }
    }
}

/// Result of handling a trigger
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The trigger does not apply in the current state
    Ignored,
    /// The trigger applied; `changed` is false when the state already matched
    Applied { changed: bool },
}

impl Outcome {
    pub fn changed(&self) -> bool {
        matches!(self, Outcome::Applied { changed: true })
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Outcome::Ignored)
    }
}
