//! Interaction script for the product landing page.
//!
//! This crate is compiled to WebAssembly and loaded by the static landing
//! page. It adds the page's cosmetic and navigational behavior: the mobile
//! menu, scroll-reveal animations, the FAQ accordion, the header shadow, and
//! smooth anchor scrolling, plus the `launchApp` entry point used by the
//! call-to-action buttons. Each behavior keeps its decision logic in plain
//! Rust types that are tested natively; the `web-sys` wiring on top is thin.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | Ready wiring and per-behavior install report |
//! | [`config`] | Selectors, classes, and thresholds with JSON overrides |
//! | [`menu`] | Mobile menu toggle |
//! | [`reveal`] | One-shot scroll reveal via `IntersectionObserver` |
//! | [`faq`] | Single-open FAQ accordion |
//! | [`header`] | Header shadow past a scroll threshold |
//! | [`smooth_scroll`] | Header-aware smooth scrolling for `#` links |
//! | [`launch`] | Redirect into the app, optionally in demo mode |
//! | [`diagnostics`] | Console logging of load time and uncaught errors |
//! | [`dom`] | Query and listener helpers |
//! | [`error`] | [`error::LandingError`] |
//! | [`consts`] | Default selectors and thresholds |

pub mod config;
pub mod consts;
pub mod controller;
pub mod diagnostics;
pub mod dom;
pub mod error;
pub mod faq;
pub mod header;
pub mod launch;
pub mod menu;
pub mod reveal;
pub mod smooth_scroll;

use wasm_bindgen::prelude::*;

use crate::config::LandingConfig;
use crate::error::LandingError;

/// Module entry point, run by the wasm-bindgen glue on instantiation.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = run() {
        log::error!("landing script disabled: {err}");
    }
}

fn run() -> Result<(), LandingError> {
    let window = dom::window()?;
    let document = dom::document(&window)?;

    // Invalid config falls back to defaults; warn once the logger is up.
    let (config, config_err) = match LandingConfig::from_document(&document) {
        Ok(config) => (config, None),
        Err(err) => (LandingConfig::default(), Some(err)),
    };
    if let Err(err) = console_log::init_with_level(config.log_level.as_log_level()) {
        log::warn!("console logger already installed: {err}");
    }
    if let Some(err) = config_err {
        log::warn!("ignoring #{}: {err}", consts::CONFIG_ELEMENT_ID);
    }

    launch::expose_global(&window, &config.app_base_path)?;
    controller::boot(&window, &document, config)
}

/// Navigate to the app. `"demo"` opens an anonymous demo session; any other
/// value, of any type, opens the app normally.
#[wasm_bindgen(js_name = launchApp)]
pub fn launch_app(mode: JsValue) {
    launch::launch_from_js(&mode);
}
