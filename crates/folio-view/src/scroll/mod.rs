//! Boundary scroll detection
//!
//! A wheel event on a region that is already at its top or bottom extent is
//! a navigation intent rather than a content scroll. One detector instance
//! exists per scrollable region; they differ only in configuration.

mod detector;
mod guard;

pub use detector::{Boundary, BoundaryDetector, Region, ScrollMetrics};
pub use guard::BoundaryGuard;
