//! Entrance sequence, fade-ins and tab geometry
//!
//! None of this feeds back into view state. The sequence only decides
//! when the body scroll policy starts being applied.

use std::rc::Rc;

use folio_view::{LayoutGeometry, ViewResult};
use js_sys::Array;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::Shell;
use crate::dom_error;
use crate::surface::root_element;

const STEP_ONE_CLASS: &str = "step-1";
const STEP_TWO_CLASS: &str = "step-2";
const NAV_ACTIVE_CLASS: &str = "nav-active";
const VISIBLE_CLASS: &str = "visible";

/// Write the tab geometry custom properties for the current viewport
pub(crate) fn apply_layout(shell: &Shell) -> ViewResult<()> {
    let width = shell.window.inner_width().map_err(dom_error)?.as_f64().unwrap_or(0.0);
    let height = shell.window.inner_height().map_err(dom_error)?.as_f64().unwrap_or(0.0);
    let query = format!("(max-width: {}px)", shell.config.view.mobile_breakpoint_px);
    let mobile = match shell.window.match_media(&query) {
        Ok(Some(list)) => list.matches(),
        _ => shell.config.view.is_mobile(width),
    };

    let geometry = LayoutGeometry::compute(width, height, mobile);
    let style = root_element(&shell.document)?.style();
    for (name, value) in geometry.css_properties() {
        style.set_property(name, &value).map_err(dom_error)?;
    }
    Ok(())
}

fn after(shell: &Shell, delay_ms: i32, step: impl FnOnce() + 'static) -> ViewResult<()> {
    let callback = Closure::once_into_js(step);
    shell
        .window
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
        .map_err(dom_error)?;
    Ok(())
}

fn add_body_class(shell: &Shell, class: &str) {
    let body = shell.controller.borrow().surface().body().clone();
    if let Err(err) = body.class_list().add_1(class) {
        tracing::warn!(class, error = ?err, "failed to add intro class");
    }
}

/// Run the staggered entrance: white tab, yellow tab, then navigation
pub(crate) fn start(shell: Rc<Shell>) -> ViewResult<()> {
    let first = shell.config.intro.first_ms;
    let next = Rc::clone(&shell);
    after(&shell, first, move || {
        add_body_class(&next, STEP_ONE_CLASS);
        let second = next.config.intro.second_ms;
        let then = Rc::clone(&next);
        let scheduled = after(&next, second, move || {
            add_body_class(&then, STEP_TWO_CLASS);
            let settle = then.config.intro.settle_ms;
            let last = Rc::clone(&then);
            if let Err(err) = after(&then, settle, move || finish(&last)) {
                tracing::warn!(%err, "failed to schedule intro settle");
            }
        });
        if let Err(err) = scheduled {
            tracing::warn!(%err, "failed to schedule intro step two");
        }
    })
}

fn finish(shell: &Shell) {
    add_body_class(shell, NAV_ACTIVE_CLASS);
    {
        let mut controller = shell.controller.borrow_mut();
        controller.surface_mut().enable_scroll_policy();
        controller.render();
    }
    if let Err(err) = observe_fade_ins(shell) {
        tracing::warn!(%err, "fade-in observer unavailable");
    }
    tracing::debug!("intro finished");
}

/// Reveal `.fade-in` elements the first time they scroll into view
fn observe_fade_ins(shell: &Shell) -> ViewResult<()> {
    let callback = Closure::wrap(Box::new(|entries: Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(VISIBLE_CLASS);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(shell.config.intro.fade_threshold));
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom_error)?;

    let nodes = shell
        .document
        .query_selector_all(&shell.config.selectors.fade_in)
        .map_err(dom_error)?;
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) {
            observer.observe(&element);
        }
    }

    // observer lives as long as the page
    callback.forget();
    Ok(())
}
