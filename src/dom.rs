//! Thin helpers over `web-sys` for querying elements and wiring listeners.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, NodeList, Window};

use crate::error::LandingError;

pub fn window() -> Result<Window, LandingError> {
    web_sys::window().ok_or(LandingError::NoWindow)
}

pub fn document(window: &Window) -> Result<Document, LandingError> {
    window.document().ok_or(LandingError::NoDocument)
}

/// First element matching `selector`, or `None`.
pub fn query(document: &Document, selector: &str) -> Result<Option<Element>, LandingError> {
    Ok(document.query_selector(selector)?)
}

/// Every element matching `selector` in document order.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, LandingError> {
    Ok(elements(&document.query_selector_all(selector)?))
}

/// Every descendant of `root` matching `selector`.
pub fn query_all_within(root: &Element, selector: &str) -> Result<Vec<Element>, LandingError> {
    Ok(elements(&root.query_selector_all(selector)?))
}

fn elements(list: &NodeList) -> Vec<Element> {
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(node) = list.item(i)
            && let Ok(element) = node.dyn_into::<Element>()
        {
            out.push(element);
        }
    }
    out
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

/// Add or remove `class` on `element`.
pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), LandingError> {
    let list = element.class_list();
    if on {
        list.add_1(class)?;
    } else {
        list.remove_1(class)?;
    }
    Ok(())
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// The closure is leaked into the JS heap; listeners are never detached.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), LandingError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Log a handler failure. Event callbacks have nowhere to return errors to.
pub fn report(behavior: &str, result: Result<(), LandingError>) {
    if let Err(err) = result {
        log::error!("{behavior}: {err}");
    }
}
