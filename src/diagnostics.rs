//! Console diagnostics: ready banner, page load time, uncaught errors.
//!
//! Purely observational. Nothing here changes page behavior, and the error
//! listener never suppresses the browser's own reporting.

#[cfg(test)]
#[path = "diagnostics_test.rs"]
mod diagnostics_test;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, ErrorEvent, Window};

use crate::dom;
use crate::error::LandingError;

/// Milliseconds from navigation start to the end of the load event.
///
/// `None` while `loadEventEnd` is still unset (zero) or otherwise not after
/// `navigationStart`.
#[must_use]
pub fn page_load_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (load_event_end > navigation_start).then_some(load_event_end - navigation_start)
}

/// Render milliseconds as seconds with two decimals, e.g. `1.23s`.
#[must_use]
pub fn format_seconds(ms: f64) -> String {
    format!("{:.2}s", ms / 1000.0)
}

/// Log the ready banner with the viewport size.
pub fn log_ready(window: &Window) {
    log::info!("landing page ready");
    match (window.inner_width(), window.inner_height()) {
        (Ok(width), Ok(height)) => {
            let width = width.as_f64().unwrap_or_default();
            let height = height.as_f64().unwrap_or_default();
            log::info!("viewport: {width}px x {height}px");
        }
        _ => log::debug!("viewport size unavailable"),
    }
}

/// Whether the window `load` event has already fired for this document.
#[must_use]
pub fn load_already_complete(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Log page load time once the `load` event has finished.
///
/// The wasm module can finish instantiating after `load`; in that case the
/// metric is scheduled straight away instead of waiting for the event.
pub fn install_load_timing(window: &Window, document: &Document) -> Result<(), LandingError> {
    if load_already_complete(&document.ready_state()) {
        schedule_load_time(window.clone());
        return Ok(());
    }
    let win = window.clone();
    dom::listen(window, "load", move |_| schedule_load_time(win.clone()))
}

// loadEventEnd is only set after every load listener has returned.
fn schedule_load_time(window: Window) {
    Timeout::new(0, move || log_load_time(&window)).forget();
}

fn log_load_time(window: &Window) {
    let Some(performance) = window.performance() else {
        return;
    };
    let timing = performance.timing();
    match page_load_ms(timing.navigation_start(), timing.load_event_end()) {
        Some(ms) => log::info!("page load time: {}", format_seconds(ms)),
        None => log::debug!("navigation timing not populated; skipping load time"),
    }
}

/// Log every uncaught script error. Observational only.
pub fn install_error_listener(window: &Window) -> Result<(), LandingError> {
    dom::listen(window, "error", |event| {
        let message = event.dyn_ref::<ErrorEvent>().map_or_else(|| event.type_(), ErrorEvent::message);
        log::error!("uncaught error: {message}");
    })
}
