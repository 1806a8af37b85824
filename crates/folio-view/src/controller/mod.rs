//! Transition Controller
//!
//! Maps external triggers onto [`ViewStore`] transitions and keeps the
//! address bar and the visual layer in step with the store.
//!
//! ## Navigation wheel
//!
//! Boundary scrolls cycle through the views in both directions:
//!
//! ```text
//!        down               down              down
//!  Home ───────▶ Projects ───────▶ About ───────▶ Home
//!  Home ◀─────── Projects ◀─────── About ◀─────── Home
//!         up                 up                up
//! ```
//!
//! ## Consistency
//!
//! After every applied trigger the controller re-renders through the
//! [`ViewSurface`] and rewrites whichever query parameters differ from the
//! [`UrlProjection`] of the new state. All calls must come from one logical
//! execution context; the controller holds no locks.

mod catalog;
mod load;
mod trigger;

pub use catalog::ProjectCatalog;
pub use load::InitReport;
pub use trigger::{Outcome, Trigger, ESCAPE_KEY};

use tracing::debug;

use crate::config::ViewConfig;
use crate::flags::{ViewFlags, ViewSurface};
use crate::location::{UrlProjection, UrlState};
use crate::scroll::{Boundary, BoundaryDetector, BoundaryGuard, Region, ScrollMetrics};
use crate::view::{PrimaryView, ProjectPayload, ViewState, ViewStore};

/// Owner of the page's view state and its two mirrors
pub struct TransitionController<U, S> {
    store: ViewStore,
    url: U,
    surface: S,
    config: ViewConfig,
    guard: BoundaryGuard,
}

impl<U: UrlState, S: ViewSurface> TransitionController<U, S> {
    /// Create a controller at home with the overlay closed.
    ///
    /// Nothing is read from or written to `url` until [`load`](Self::load).
    pub fn new(url: U, surface: S, config: ViewConfig) -> Self {
        let guard = BoundaryGuard::new(config.boundary_cooldown_ms);
        Self {
            store: ViewStore::new(),
            url,
            surface,
            config,
            guard,
        }
    }

    pub fn state(&self) -> &ViewState {
        self.store.state()
    }

    pub fn flags(&self) -> ViewFlags {
        ViewFlags::project(self.store.state())
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub fn url(&self) -> &U {
        &self.url
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Re-render the current state without changing it
    pub fn render(&mut self) {
        let flags = ViewFlags::project(self.store.state());
        self.surface.render(self.store.state(), &flags);
    }

    /// Apply one trigger
    pub fn handle(&mut self, trigger: Trigger) -> Outcome {
        let name = trigger.name();
        let before = self.store.state().clone();

        let applied = match trigger {
            Trigger::OpenProjects => {
                self.store.close_overlay();
                self.store.set_primary(PrimaryView::Projects);
                true
            }
            Trigger::OpenAbout => {
                self.store.close_overlay();
                self.store.set_primary(PrimaryView::About);
                true
            }
            Trigger::SelectProject(payload) => {
                self.open_project(payload);
                true
            }
            Trigger::CloseOverlay => self.dismiss_overlay(),
            Trigger::KeyPress(key) => key == ESCAPE_KEY && self.dismiss_overlay(),
            Trigger::BackgroundClick => {
                self.store.close_all();
                true
            }
            Trigger::Wheel {
                region,
                delta_y,
                metrics,
                now_ms,
            } => self.boundary_scroll(region, delta_y, metrics, now_ms),
        };

        if !applied {
            return Outcome::Ignored;
        }

        self.commit();
        let changed = *self.store.state() != before;
        if changed {
            debug!(
                trigger = name,
                from = %before.primary,
                to = %self.store.primary(),
                overlay = self.store.state().overlay_id().unwrap_or(""),
                "view transition"
            );
        }
        Outcome::Applied { changed }
    }

    /// The overlay always sits on top of the projects list
    fn open_project(&mut self, payload: ProjectPayload) {
        self.store.open_overlay(payload);
        self.store.set_primary(PrimaryView::Projects);
    }

    /// Close the overlay back onto the projects list, not home
    fn dismiss_overlay(&mut self) -> bool {
        if !self.store.state().overlay_open() {
            return false;
        }
        self.store.close_overlay();
        self.store.set_primary(PrimaryView::Projects);
        true
    }

    fn boundary_scroll(
        &mut self,
        region: Region,
        delta_y: f64,
        metrics: ScrollMetrics,
        now_ms: f64,
    ) -> bool {
        let detector = BoundaryDetector::new(region);
        if !detector.is_active(self.store.state().effective_primary()) {
            return false;
        }
        let Some(boundary) = detector.classify(delta_y, metrics) else {
            return false;
        };
        if !self.guard.allows(now_ms) {
            debug!(?region, ?boundary, "boundary scroll inside cooldown");
            return false;
        }

        match (region, boundary) {
            (Region::Home, Boundary::Bottom) | (Region::About, Boundary::Top) => {
                self.store.close_overlay();
                self.store.set_primary(PrimaryView::Projects);
            }
            (Region::Home, Boundary::Top) | (Region::Projects, Boundary::Bottom) => {
                self.store.close_overlay();
                self.store.set_primary(PrimaryView::About);
            }
            (Region::Projects, Boundary::Top) | (Region::About, Boundary::Bottom) => {
                self.store.close_all();
            }
        }
        self.guard.record(now_ms);
        true
    }

    /// Mirror the store into the address bar and the visual layer
    fn commit(&mut self) {
        let projection = UrlProjection::of(self.store.state());
        sync_param(&mut self.url, &self.config.view_param, projection.view.as_deref());
        sync_param(
            &mut self.url,
            &self.config.project_param,
            projection.project.as_deref(),
        );
        self.render();
    }
}

fn sync_param<U: UrlState>(url: &mut U, name: &str, value: Option<&str>) {
    if url.read(name).as_deref() != value {
        url.write(name, value);
    }
}
