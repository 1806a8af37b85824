use serde::{Deserialize, Serialize};

use crate::view::PrimaryView;

/// A scrollable region of the page
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    /// The landing page content wrapper
    Home,
    /// Inner scroll container of the projects panel
    Projects,
    /// Inner scroll container of the about panel
    About,
}

impl Region {
    pub fn all() -> &'static [Region] {
        &[Region::Home, Region::Projects, Region::About]
    }

    /// The primary view during which this region receives wheel input
    pub fn view(&self) -> PrimaryView {
        match self {
            Region::Home => PrimaryView::Home,
            Region::Projects => PrimaryView::Projects,
            Region::About => PrimaryView::About,
        }
    }
}

/// Scroll extent of a region at event time, in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, scroll_height: f64, client_height: f64) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    pub fn at_top(&self) -> bool {
        self.scroll_top == 0.0
    }

    /// Fractional scroll offsets from zoomed pages can overshoot, hence `<=`
    pub fn at_bottom(&self) -> bool {
        self.scroll_height - self.client_height <= self.scroll_top
    }
}

/// Extent a wheel event pushed against
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Top,
    Bottom,
}

/// Classifies wheel events on one region
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundaryDetector {
    region: Region,
}

impl BoundaryDetector {
    pub fn new(region: Region) -> Self {
        Self { region }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    /// Whether the detector listens while `current` is displayed
    pub fn is_active(&self, current: PrimaryView) -> bool {
        self.region.view() == current
    }

    /// Classify a wheel delta against the region's extent.
    ///
    /// Positive deltas are downward intent and report [`Boundary::Bottom`]
    /// only at the bottom; negative deltas report [`Boundary::Top`] only at
    /// the top. Interior positions and zero deltas report nothing.
    pub fn classify(&self, delta_y: f64, metrics: ScrollMetrics) -> Option<Boundary> {
        if delta_y > 0.0 && metrics.at_bottom() {
            Some(Boundary::Bottom)
        } else if delta_y < 0.0 && metrics.at_top() {
            Some(Boundary::Top)
        } else {
            None
        }
    }
}
