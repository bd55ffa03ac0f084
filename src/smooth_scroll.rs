//! Smooth scrolling for same-page anchor links, offset by the sticky header.

#[cfg(test)]
#[path = "smooth_scroll_test.rs"]
mod smooth_scroll_test;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config::LandingConfig;
use crate::controller::{Behavior, Install};
use crate::dom;
use crate::error::LandingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorHref<'a> {
    /// Exactly `#`.
    Bare,
    /// `#something`, used verbatim as a selector.
    Fragment(&'a str),
}

#[must_use]
pub fn classify(href: &str) -> AnchorHref<'_> {
    if href == "#" { AnchorHref::Bare } else { AnchorHref::Fragment(href) }
}

/// Geometry read at click time for a resolved target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetMetrics {
    /// Target top relative to the viewport.
    pub element_top: f64,
    /// Current vertical scroll offset of the page.
    pub current_scroll: f64,
    /// Height of the fixed header, 0 when there is none.
    pub header_height: f64,
}

#[must_use]
pub fn target_offset(element_top: f64, current_scroll: f64, header_height: f64) -> f64 {
    element_top + current_scroll - header_height
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnchorAction {
    /// Prevent navigation and do nothing else.
    SuppressOnly,
    /// Prevent navigation and smooth-scroll to this document offset.
    ScrollTo(f64),
    /// Leave the click to the browser.
    Default,
}

#[must_use]
pub fn resolve(href: AnchorHref<'_>, target: Option<TargetMetrics>) -> AnchorAction {
    match (href, target) {
        (AnchorHref::Bare, _) => AnchorAction::SuppressOnly,
        (AnchorHref::Fragment(_), Some(m)) => {
            AnchorAction::ScrollTo(target_offset(m.element_top, m.current_scroll, m.header_height))
        }
        (AnchorHref::Fragment(_), None) => AnchorAction::Default,
    }
}

pub fn install(window: &Window, document: &Document, config: &LandingConfig) -> Result<Install, LandingError> {
    let links = dom::query_all(document, &config.anchor_selector)?;
    if links.is_empty() {
        return Ok(Install::Skipped);
    }

    for link in &links {
        let anchor = link.clone();
        let win = window.clone();
        let doc = document.clone();
        let header_selector = config.header_selector.clone();
        dom::listen(link, "click", move |event| {
            dom::report(Behavior::SmoothScroll.name(), on_click(&win, &doc, &anchor, &event, &header_selector));
        })?;
    }
    log::debug!("smooth-scroll: {} anchors", links.len());
    Ok(Install::Active)
}

fn on_click(
    window: &Window,
    document: &Document,
    anchor: &Element,
    event: &Event,
    header_selector: &str,
) -> Result<(), LandingError> {
    let Some(raw) = anchor.get_attribute("href") else {
        return Ok(());
    };
    let href = classify(&raw);
    let target = match href {
        AnchorHref::Bare => None,
        AnchorHref::Fragment(selector) => find_target(document, selector),
    };
    let metrics = match target {
        Some(el) => Some(TargetMetrics {
            element_top: el.get_bounding_client_rect().top(),
            current_scroll: window.scroll_y()?,
            header_height: header_height(document, header_selector)?,
        }),
        None => None,
    };

    match resolve(href, metrics) {
        AnchorAction::SuppressOnly => event.prevent_default(),
        AnchorAction::ScrollTo(top) => {
            event.prevent_default();
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        AnchorAction::Default => {}
    }
    Ok(())
}

/// An unparseable fragment selector is treated as a missing target.
fn find_target(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("smooth-scroll: {selector} is not a valid selector: {err:?}");
            None
        }
    }
}

fn header_height(document: &Document, selector: &str) -> Result<f64, LandingError> {
    let Some(header) = dom::query(document, selector)? else {
        return Ok(0.0);
    };
    Ok(header.dyn_ref::<HtmlElement>().map_or(0.0, |el| f64::from(el.offset_height())))
}
