//! View state module
//!
//! Holds the single authoritative view value for the page: which primary
//! view is shown and which project, if any, is open in the detail overlay.

mod payload;
mod primary;
mod store;

pub use payload::ProjectPayload;
pub use primary::PrimaryView;
pub use store::{ViewState, ViewStore};
