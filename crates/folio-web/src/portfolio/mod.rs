//! The page object exported to JavaScript
//!
//! Owns the controller and every listener closure. JavaScript must keep the
//! `Portfolio` alive for the life of the page: dropping it frees closures
//! that are still attached as listeners.

mod intro;
mod listeners;

use std::cell::RefCell;
use std::rc::Rc;

use folio_view::{ProjectCatalog, TransitionController, Trigger, ViewError, ViewResult};
use wasm_bindgen::prelude::*;
use web_sys::{Document, Event, Window};

use crate::catalog::DomCatalog;
use crate::config::PortfolioConfig;
use crate::location::BrowserLocation;
use crate::surface::DomSurface;
use crate::{js_error, log};

pub(crate) type Controller = TransitionController<BrowserLocation, DomSurface>;

/// Everything event handlers need, shared behind one `Rc`
pub(crate) struct Shell {
    pub(crate) window: Window,
    pub(crate) document: Document,
    pub(crate) config: PortfolioConfig,
    pub(crate) catalog: DomCatalog,
    pub(crate) controller: RefCell<Controller>,
}

impl Shell {
    /// Feed one trigger to the controller.
    ///
    /// Events are delivered one at a time by the browser, so the borrow
    /// only fails if a render synchronously dispatched another event.
    pub(crate) fn dispatch(&self, trigger: Trigger) {
        match self.controller.try_borrow_mut() {
            Ok(mut controller) => {
                controller.handle(trigger);
            }
            Err(_) => {
                tracing::warn!(trigger = trigger.name(), "controller busy; event dropped");
            }
        }
    }
}

/// Portfolio page controller exported to JavaScript
#[wasm_bindgen]
pub struct Portfolio {
    shell: Rc<Shell>,
    listeners: Vec<Closure<dyn FnMut(Event)>>,
    booted: bool,
}

#[wasm_bindgen]
impl Portfolio {
    /// Create the page controller.
    ///
    /// `config_json` overrides selectors, parameter names and timings;
    /// omit it to use the defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Portfolio, JsValue> {
        let config = PortfolioConfig::from_json(config_json.as_deref()).map_err(js_error)?;
        Self::with_config(config).map_err(js_error)
    }

    /// Resolve the initial view, attach listeners and start the intro.
    ///
    /// Must be called once the DOM is ready. The initial view is fully
    /// applied before the first listener is attached.
    #[wasm_bindgen]
    pub fn boot(&mut self) -> Result<(), JsValue> {
        if self.booted {
            log("[folio] Already booted");
            return Ok(());
        }

        let report = self.shell.controller.borrow_mut().load(&self.shell.catalog);
        for recovered in &report.recovered {
            log(&format!("[folio] Recovered from {}", recovered));
        }

        intro::apply_layout(&self.shell).map_err(js_error)?;
        self.listeners = listeners::attach(&self.shell).map_err(js_error)?;
        intro::start(Rc::clone(&self.shell)).map_err(js_error)?;

        self.booted = true;
        log(&format!(
            "[folio] Booted in {} view with {} listeners",
            self.current_view(),
            self.listeners.len()
        ));
        Ok(())
    }

    /// Name of the current primary view
    #[wasm_bindgen(js_name = currentView)]
    pub fn current_view(&self) -> String {
        self.shell.controller.borrow().state().primary.to_string()
    }

    /// Id of the project open in the overlay, if any
    #[wasm_bindgen(js_name = openProjectId)]
    pub fn open_project_id(&self) -> Option<String> {
        self.shell
            .controller
            .borrow()
            .state()
            .overlay_id()
            .map(str::to_string)
    }

    /// Current view state as JSON
    #[wasm_bindgen(js_name = stateJson)]
    pub fn state_json(&self) -> Result<String, JsValue> {
        serde_json::to_string(self.shell.controller.borrow().state())
            .map_err(|e| js_error(ViewError::Dom(e.to_string())))
    }

    #[wasm_bindgen(js_name = openProjects)]
    pub fn open_projects(&self) {
        self.shell.dispatch(Trigger::OpenProjects);
    }

    #[wasm_bindgen(js_name = openAbout)]
    pub fn open_about(&self) {
        self.shell.dispatch(Trigger::OpenAbout);
    }

    /// Close every view, as a background click does
    #[wasm_bindgen(js_name = closeAll)]
    pub fn close_all(&self) {
        self.shell.dispatch(Trigger::BackgroundClick);
    }

    /// Open the overlay for the card with element id `id`.
    ///
    /// Returns false when no such card exists.
    #[wasm_bindgen(js_name = openProject)]
    pub fn open_project(&self, id: &str) -> bool {
        match self.shell.catalog.lookup(id) {
            Some(payload) => {
                self.shell.dispatch(Trigger::SelectProject(payload));
                true
            }
            None => false,
        }
    }

    #[wasm_bindgen(js_name = closeProject)]
    pub fn close_project(&self) {
        self.shell.dispatch(Trigger::CloseOverlay);
    }

    /// Recompute the tab geometry, e.g. after a font load changed metrics
    #[wasm_bindgen(js_name = updateLayout)]
    pub fn update_layout(&self) -> Result<(), JsValue> {
        intro::apply_layout(&self.shell).map_err(js_error)
    }
}

impl Portfolio {
    fn with_config(config: PortfolioConfig) -> ViewResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| ViewError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| ViewError::Dom("window has no document".to_string()))?;

        let location = BrowserLocation::new(window.clone());
        let surface = DomSurface::new(&document, &config.selectors)?;
        let catalog = DomCatalog::new(document.clone(), config.selectors.project_card.clone());
        let controller = TransitionController::new(location, surface, config.view.clone());

        Ok(Self {
            shell: Rc::new(Shell {
                window,
                document,
                config,
                catalog,
                controller: RefCell::new(controller),
            }),
            listeners: Vec::new(),
            booted: false,
        })
    }
}
