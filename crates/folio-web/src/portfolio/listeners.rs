//! One listener per event source, all feeding [`Shell::dispatch`]

use std::rc::Rc;

use folio_view::{Region, ScrollMetrics, Trigger, ViewResult};
use wasm_bindgen::prelude::*;
use web_sys::{Element, Event, EventTarget, KeyboardEvent, WheelEvent};

use super::{intro, Shell};
use crate::dom_error;

type Listener = Closure<dyn FnMut(Event)>;

fn listen(
    target: &EventTarget,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> ViewResult<Listener> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    Ok(closure)
}

fn select_all(shell: &Shell, selector: &str) -> ViewResult<Vec<Element>> {
    let nodes = shell.document.query_selector_all(selector).map_err(dom_error)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

/// Attach every listener; the returned closures must outlive the page
pub(crate) fn attach(shell: &Rc<Shell>) -> ViewResult<Vec<Listener>> {
    let selectors = &shell.config.selectors;
    let mut listeners = Vec::new();

    for (selector, trigger) in [
        (&selectors.open_projects, Trigger::OpenProjects),
        (&selectors.open_about, Trigger::OpenAbout),
        (&selectors.modal_close, Trigger::CloseOverlay),
    ] {
        for element in select_all(shell, selector)? {
            let shell = Rc::clone(shell);
            let trigger = trigger.clone();
            listeners.push(listen(&element, "click", move |event: Event| {
                event.stop_propagation();
                shell.dispatch(trigger.clone());
            })?);
        }
    }

    for card in select_all(shell, &selectors.project_card)? {
        let shell = Rc::clone(shell);
        let element = card.clone();
        listeners.push(listen(&card, "click", move |event: Event| {
            event.stop_propagation();
            match shell.catalog.payload_of(&element) {
                Some(payload) => shell.dispatch(Trigger::SelectProject(payload)),
                None => tracing::warn!(id = %element.id(), "project card without id"),
            }
        })?);
    }

    for background in select_all(shell, &selectors.background)? {
        let shell = Rc::clone(shell);
        listeners.push(listen(&background, "click", move |event: Event| {
            // clicks bubbling up from inside a view are not background clicks
            if event.target() == event.current_target() {
                shell.dispatch(Trigger::BackgroundClick);
            }
        })?);
    }

    for (selector, region) in [
        (&selectors.home_region, Region::Home),
        (&selectors.projects_region, Region::Projects),
        (&selectors.about_region, Region::About),
    ] {
        let Some(element) = shell.document.query_selector(selector).map_err(dom_error)? else {
            tracing::warn!(%selector, ?region, "scroll region not found");
            continue;
        };
        let shell = Rc::clone(shell);
        let scroller = element.clone();
        listeners.push(listen(&element, "wheel", move |event: Event| {
            let Some(wheel) = event.dyn_ref::<WheelEvent>() else {
                return;
            };
            shell.dispatch(Trigger::Wheel {
                region,
                delta_y: wheel.delta_y(),
                metrics: ScrollMetrics::new(
                    scroller.scroll_top() as f64,
                    scroller.scroll_height() as f64,
                    scroller.client_height() as f64,
                ),
                now_ms: event.time_stamp(),
            });
        })?);
    }

    {
        let shell_ref = Rc::clone(shell);
        listeners.push(listen(&shell.document, "keydown", move |event: Event| {
            if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
                shell_ref.dispatch(Trigger::KeyPress(key.key()));
            }
        })?);
    }

    {
        let shell_ref = Rc::clone(shell);
        listeners.push(listen(&shell.window, "resize", move |_event: Event| {
            if let Err(err) = intro::apply_layout(&shell_ref) {
                tracing::warn!(%err, "layout update failed");
            }
        })?);
    }

    Ok(listeners)
}
