//! Mobile menu toggle.
//!
//! The open state lives on the navigation element as a class, so the DOM is
//! the source of truth: each click reads the class, computes the next
//! [`MenuState`], and writes back both the class and the button glyph.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use web_sys::{Document, Element};

use crate::config::{LandingConfig, MenuGlyphs};
use crate::consts;
use crate::controller::{Behavior, Install};
use crate::dom;
use crate::error::LandingError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    #[must_use]
    pub fn toggle(self) -> Self {
        Self { open: !self.open }
    }

    #[must_use]
    pub fn close(self) -> Self {
        Self { open: false }
    }

    /// Button glyph reflecting this state.
    #[must_use]
    pub fn glyph(self, glyphs: &MenuGlyphs) -> &str {
        if self.open { &glyphs.open } else { &glyphs.closed }
    }
}

pub fn install(document: &Document, config: &LandingConfig) -> Result<Install, LandingError> {
    let Some(button) = dom::query(document, &config.menu_button_selector)? else {
        return Ok(Install::Skipped);
    };
    let Some(nav) = dom::query(document, &config.nav_selector)? else {
        return Ok(Install::Skipped);
    };

    {
        let (btn, nav) = (button.clone(), nav.clone());
        let open_class = config.open_class.clone();
        let glyphs = config.glyphs.clone();
        dom::listen(&button, "click", move |_| {
            let current = MenuState { open: dom::has_class(&nav, &open_class) };
            dom::report(Behavior::Menu.name(), apply(&nav, &btn, current.toggle(), &open_class, &glyphs));
        })?;
    }

    for link in dom::query_all_within(&nav, consts::NAV_LINK_SELECTOR)? {
        let (btn, nav) = (button.clone(), nav.clone());
        let open_class = config.open_class.clone();
        let glyphs = config.glyphs.clone();
        dom::listen(&link, "click", move |_| {
            let current = MenuState { open: dom::has_class(&nav, &open_class) };
            dom::report(Behavior::Menu.name(), apply(&nav, &btn, current.close(), &open_class, &glyphs));
        })?;
    }

    Ok(Install::Active)
}

fn apply(
    nav: &Element,
    button: &Element,
    state: MenuState,
    open_class: &str,
    glyphs: &MenuGlyphs,
) -> Result<(), LandingError> {
    dom::set_class(nav, open_class, state.open)?;
    button.set_text_content(Some(state.glyph(glyphs)));
    Ok(())
}
