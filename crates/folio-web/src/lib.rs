//! Browser shell for the folio portfolio page
//!
//! Binds the `folio-view` controller to the live document:
//! - [`BrowserLocation`]: query parameters via `location` and `history.replaceState`
//! - [`DomSurface`]: root style markers, scroll lock and the project modal
//! - [`DomCatalog`]: project cards read from `data-*` attributes
//! - [`Portfolio`]: the object JavaScript constructs and boots
//!
//! ## Usage
//!
//! ```js
//! import init, { Portfolio } from "./folio_web.js";
//!
//! await init();
//! const portfolio = new Portfolio();
//! portfolio.boot();
//! ```

use wasm_bindgen::prelude::*;

mod catalog;
mod config;
mod location;
mod logging;
mod portfolio;
mod surface;

pub use catalog::DomCatalog;
pub use config::{IntroTimings, PortfolioConfig, Selectors};
pub use location::BrowserLocation;
pub use portfolio::Portfolio;
pub use surface::DomSurface;

use folio_view::ViewError;

/// Log a message to the browser console
pub(crate) fn log(msg: &str) {
    web_sys::console::log_1(&msg.into());
}

/// Convert a failed browser call into a [`ViewError`]
pub(crate) fn dom_error(err: JsValue) -> ViewError {
    ViewError::Dom(
        err.as_string()
            .or_else(|| {
                err.dyn_ref::<js_sys::Error>()
                    .map(|e| String::from(e.message()))
            })
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}

/// Convert a [`ViewError`] for return across the wasm boundary
pub(crate) fn js_error(err: ViewError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Module start hook: panic reporting and log routing
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    logging::init();
}
