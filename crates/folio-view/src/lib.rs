//! View controller for the folio portfolio page
//!
//! This crate owns the page's navigation state:
//! - Three mutually exclusive primary views (home, projects, about)
//! - A project detail overlay on top of the projects view
//! - Deep links through two query parameters, rewritten in place
//! - Boundary-scroll navigation cycling through the views
//!
//! ## Architecture
//!
//! - [`view`]: the [`ViewStore`] flag holder and its value types
//! - [`controller`]: [`TransitionController`], the only writer of the store
//! - [`location`]: the [`UrlState`] adapter contract and an in-memory address bar
//! - [`scroll`]: per-region boundary detection and the re-entrancy guard
//! - [`flags`]: pure projection of state onto style markers
//! - [`layout`]: tab geometry consumed by the stylesheet
//!
//! ## Example
//!
//! ```rust
//! use folio_view::{
//!     MemoryLocation, NullSurface, PrimaryView, ProjectPayload, TransitionController,
//!     Trigger, UrlState, ViewConfig,
//! };
//!
//! let url = MemoryLocation::new("https://folio.test/?=about").unwrap();
//! let mut controller = TransitionController::new(url, NullSurface, ViewConfig::default());
//! let cards: Vec<ProjectPayload> = Vec::new();
//!
//! controller.load(&cards);
//! assert_eq!(controller.state().primary, PrimaryView::About);
//!
//! controller.handle(Trigger::BackgroundClick);
//! assert_eq!(controller.url().read(""), None);
//! ```
//!
//! Nothing here touches the browser; `folio-web` binds the traits to the DOM.

pub mod config;
pub mod controller;
pub mod error;
pub mod flags;
pub mod layout;
pub mod location;
pub mod scroll;
pub mod view;

pub use config::ViewConfig;
pub use controller::{
    InitReport, Outcome, ProjectCatalog, TransitionController, Trigger, ESCAPE_KEY,
};
pub use error::{ViewError, ViewResult};
pub use flags::{NullSurface, RecordingSurface, ViewFlags, ViewSurface, ROOT_CLASSES};
pub use layout::LayoutGeometry;
pub use location::{MemoryLocation, UrlProjection, UrlState};
pub use scroll::{Boundary, BoundaryDetector, BoundaryGuard, Region, ScrollMetrics};
pub use view::{PrimaryView, ProjectPayload, ViewState, ViewStore};
