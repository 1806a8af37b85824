//! Page-load initialization
//!
//! Seeds the store from the address bar. Runs once, before any input
//! listener is attached.

use tracing::{info, warn};

use super::{ProjectCatalog, TransitionController};
use crate::error::ViewError;
use crate::flags::ViewSurface;
use crate::location::UrlState;
use crate::view::PrimaryView;

/// URL problems recovered while loading
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InitReport {
    pub recovered: Vec<ViewError>,
}

impl InitReport {
    pub fn is_clean(&self) -> bool {
        self.recovered.is_empty()
    }
}

impl<U: UrlState, S: ViewSurface> TransitionController<U, S> {
    /// Resolve the initial view from the query string.
    ///
    /// - A valid view parameter selects that view.
    /// - An invalid view parameter is removed and the page falls back home.
    /// - A project parameter naming a known card opens it over the projects
    ///   view and removes the view parameter.
    /// - A project parameter naming no card is removed; the view parameter
    ///   is left as resolved above.
    pub fn load<C: ProjectCatalog + ?Sized>(&mut self, catalog: &C) -> InitReport {
        let mut report = InitReport::default();

        if let Some(value) = self.url.read(&self.config.view_param) {
            match PrimaryView::from_param(&value) {
                Some(view) => self.store.set_primary(view),
                None => {
                    warn!(
                        param = %self.config.view_param,
                        %value,
                        "dropping invalid view parameter"
                    );
                    self.url.write(&self.config.view_param, None);
                    self.store.close_all();
                    report.recovered.push(ViewError::InvalidUrlState {
                        param: self.config.view_param.clone(),
                        value,
                    });
                }
            }
        }

        if let Some(id) = self.url.read(&self.config.project_param) {
            match catalog.lookup(&id) {
                Some(payload) => {
                    self.store.open_overlay(payload);
                    self.store.set_primary(PrimaryView::Projects);
                }
                None => {
                    warn!(%id, "dropping project parameter with no matching card");
                    self.url.write(&self.config.project_param, None);
                    report.recovered.push(ViewError::MissingTarget(id));
                }
            }
        }

        self.commit();
        info!(
            primary = %self.store.primary(),
            overlay = self.store.state().overlay_id().unwrap_or(""),
            "initial view resolved"
        );
        report
    }
}
