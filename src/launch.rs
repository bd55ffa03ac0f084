//! Redirect from the landing page into the application.

#[cfg(test)]
#[path = "launch_test.rs"]
mod launch_test;

use std::cell::RefCell;

use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::consts;
use crate::dom;
use crate::error::LandingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LaunchMode {
    #[default]
    Standard,
    /// Anonymous demo session.
    Demo,
}

impl LaunchMode {
    /// `"demo"` selects the demo; anything else, including nothing, is standard.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(consts::DEMO_MODE) => Self::Demo,
            _ => Self::Standard,
        }
    }
}

#[must_use]
pub fn launch_url(mode: LaunchMode, base: &str) -> String {
    match mode {
        LaunchMode::Demo => format!("{base}{}", consts::DEMO_QUERY),
        LaunchMode::Standard => base.to_owned(),
    }
}

/// Navigate the browser to the app for `mode`.
pub fn navigate(mode: LaunchMode, base: &str) -> Result<(), LandingError> {
    let url = launch_url(mode, base);
    dom::window()?.location().set_href(&url)?;
    log::info!("launching app ({mode:?}): {url}");
    Ok(())
}

thread_local! {
    static BASE_PATH: RefCell<String> = RefCell::new(consts::APP_BASE_PATH.to_owned());
}

/// Set the app path both `launchApp` entry points navigate to.
pub fn set_base_path(base: &str) {
    BASE_PATH.with(|path| base.clone_into(&mut path.borrow_mut()));
}

#[must_use]
pub fn base_path() -> String {
    BASE_PATH.with(|path| path.borrow().clone())
}

/// Shared body of the exported `launchApp` and `window.launchApp`.
///
/// Any non-string `mode` (a number, `undefined`, nothing at all) is standard.
pub fn launch_from_js(mode: &JsValue) {
    let mode = LaunchMode::parse(mode.as_string().as_deref());
    dom::report("launch", navigate(mode, &base_path()));
}

/// Set `window.launchApp(mode)` so inline `onclick` attributes can reach it.
pub fn expose_global(window: &Window, base: &str) -> Result<(), LandingError> {
    set_base_path(base);
    let launcher = Closure::<dyn Fn(JsValue)>::new(|mode: JsValue| launch_from_js(&mode));
    js_sys::Reflect::set(window, &JsValue::from_str(consts::LAUNCH_GLOBAL), launcher.as_ref())?;
    launcher.forget();
    Ok(())
}
