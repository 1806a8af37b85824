//! Address bar adapter over `window.location` and `window.history`

use folio_view::UrlState;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Url, UrlSearchParams, Window};

/// [`UrlState`] backed by the live address bar
///
/// Writes go through `history.replaceState`, so view changes never add
/// back-button entries.
pub struct BrowserLocation {
    window: Window,
}

impl BrowserLocation {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    /// Current query string including the leading `?`
    pub fn search(&self) -> String {
        self.window.location().search().unwrap_or_default()
    }

    fn replace(&self, name: &str, value: Option<&str>) -> Result<(), JsValue> {
        let href = self.window.location().href()?;
        let url = Url::new(&href)?;
        let params = url.search_params();
        match value {
            Some(value) => params.set(name, value),
            None => params.delete(name),
        }
        self.window
            .history()?
            .replace_state_with_url(&JsValue::NULL, "", Some(&url.href()))
    }
}

impl UrlState for BrowserLocation {
    fn read(&self, name: &str) -> Option<String> {
        let params = UrlSearchParams::new_with_str(&self.search()).ok()?;
        params.get(name)
    }

    fn write(&mut self, name: &str, value: Option<&str>) {
        if let Err(err) = self.replace(name, value) {
            warn!(param = name, error = ?err, "history.replaceState failed");
        }
    }
}
