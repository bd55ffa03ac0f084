//! Scroll-triggered reveal.
//!
//! One shared `IntersectionObserver` watches every tagged element. The first
//! time an element intersects the viewport it gets the revealed class and is
//! unobserved, so reveal is one-shot and never reverts on scroll-out.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::LandingConfig;
use crate::consts;
use crate::controller::{Behavior, Install};
use crate::dom;
use crate::error::LandingError;

/// Monotonic per-element reveal flags.
#[derive(Debug, Clone, Default)]
pub struct RevealLedger {
    revealed: Vec<bool>,
}

impl RevealLedger {
    #[must_use]
    pub fn new(count: usize) -> Self {
        Self { revealed: vec![false; count] }
    }

    /// Record an intersection report for `index`.
    ///
    /// Returns `true` only on the first report where the element is
    /// intersecting; the caller reveals and unobserves it then. Out-of-range
    /// indexes are ignored.
    pub fn on_intersection(&mut self, index: usize, is_intersecting: bool) -> bool {
        match self.revealed.get_mut(index) {
            Some(flag) if is_intersecting && !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.revealed.iter().filter(|flag| !**flag).count()
    }
}

pub fn install(document: &Document, config: &LandingConfig) -> Result<Install, LandingError> {
    let elements = dom::query_all(document, &config.reveal_selector)?;
    if elements.is_empty() {
        return Ok(Install::Skipped);
    }

    let ledger = Rc::new(RefCell::new(RevealLedger::new(elements.len())));
    let tracked = Rc::new(elements);
    let revealed_class = config.revealed_class.clone();

    let callback = {
        let tracked = Rc::clone(&tracked);
        Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = tracked.iter().position(|el| *el == target) else {
                    continue;
                };
                let mut ledger = ledger.borrow_mut();
                if ledger.on_intersection(index, entry.is_intersecting()) {
                    dom::report(Behavior::Reveal.name(), reveal(&observer, &target, &revealed_class));
                    if ledger.pending() == 0 {
                        log::debug!("reveal: all {} elements revealed", tracked.len());
                    }
                }
            }
        })
    };

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    init.set_root_margin(consts::REVEAL_ROOT_MARGIN);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in tracked.iter() {
        observer.observe(element);
    }
    log::debug!("reveal: observing {} elements", tracked.len());
    Ok(Install::Active)
}

fn reveal(observer: &IntersectionObserver, target: &Element, class: &str) -> Result<(), LandingError> {
    dom::set_class(target, class, true)?;
    observer.unobserve(target);
    Ok(())
}
