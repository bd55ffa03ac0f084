//! Header shadow once the page has scrolled past a threshold.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Document, Window};

use crate::config::LandingConfig;
use crate::controller::{Behavior, Install};
use crate::dom;
use crate::error::LandingError;

/// Strictly greater than: an offset equal to the threshold is not scrolled.
#[must_use]
pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderScroll {
    pub threshold: f64,
    /// Offset seen on the most recent scroll event.
    pub last_offset: f64,
}

impl HeaderScroll {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, last_offset: 0.0 }
    }

    /// Store `offset` and return whether the header should look scrolled.
    pub fn record(&mut self, offset: f64) -> bool {
        self.last_offset = offset;
        is_scrolled(offset, self.threshold)
    }
}

pub fn install(window: &Window, document: &Document, config: &LandingConfig) -> Result<Install, LandingError> {
    let Some(header) = dom::query(document, &config.header_selector)? else {
        return Ok(Install::Skipped);
    };

    let marker = Rc::new(RefCell::new(HeaderScroll::new(config.scroll_threshold_px)));
    let scrolled_class = config.scrolled_class.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_| {
        let offset = match win.scroll_y() {
            Ok(offset) => offset,
            Err(err) => {
                dom::report(Behavior::Header.name(), Err(err.into()));
                return;
            }
        };
        let scrolled = marker.borrow_mut().record(offset);
        dom::report(Behavior::Header.name(), dom::set_class(&header, &scrolled_class, scrolled));
    })?;
    Ok(Install::Active)
}
