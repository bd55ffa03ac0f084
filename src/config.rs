//! Page configuration: selectors, class names, thresholds, and paths.
//!
//! Every field has a default matching the stock landing page markup, so the
//! config block is optional. A page can override any subset by embedding
//!
//! ```html
//! <script type="application/json" id="landing-config">
//!   { "scrollThresholdPx": 60, "appBasePath": "/beta/" }
//! </script>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;
use web_sys::Document;

use crate::consts;
use crate::error::LandingError;

/// The two menu button glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuGlyphs {
    pub closed: String,
    pub open: String,
}

impl Default for MenuGlyphs {
    fn default() -> Self {
        Self { closed: consts::GLYPH_CLOSED.to_owned(), open: consts::GLYPH_OPEN.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LandingConfig {
    pub menu_button_selector: String,
    pub nav_selector: String,
    pub open_class: String,
    pub glyphs: MenuGlyphs,
    pub reveal_selector: String,
    pub revealed_class: String,
    pub reveal_threshold: f64,
    pub faq_question_selector: String,
    pub faq_active_class: String,
    pub header_selector: String,
    pub scrolled_class: String,
    pub scroll_threshold_px: f64,
    pub anchor_selector: String,
    pub app_base_path: String,
    pub log_level: LogLevel,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            menu_button_selector: consts::MENU_BUTTON_SELECTOR.to_owned(),
            nav_selector: consts::NAV_SELECTOR.to_owned(),
            open_class: consts::OPEN_CLASS.to_owned(),
            glyphs: MenuGlyphs::default(),
            reveal_selector: consts::REVEAL_SELECTOR.to_owned(),
            revealed_class: consts::REVEALED_CLASS.to_owned(),
            reveal_threshold: consts::REVEAL_THRESHOLD,
            faq_question_selector: consts::FAQ_QUESTION_SELECTOR.to_owned(),
            faq_active_class: consts::FAQ_ACTIVE_CLASS.to_owned(),
            header_selector: consts::HEADER_SELECTOR.to_owned(),
            scrolled_class: consts::SCROLLED_CLASS.to_owned(),
            scroll_threshold_px: consts::SCROLL_THRESHOLD_PX,
            anchor_selector: consts::ANCHOR_SELECTOR.to_owned(),
            app_base_path: consts::APP_BASE_PATH.to_owned(),
            log_level: LogLevel::default(),
        }
    }
}

/// Console verbosity, mapped onto [`log::Level`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_log_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

impl LandingConfig {
    /// Parse a JSON override block. Missing keys keep their defaults.
    pub fn from_json(raw: &str) -> Result<Self, LandingError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the optional `#landing-config` block from the page.
    ///
    /// An absent or empty block yields the defaults.
    pub fn from_document(document: &Document) -> Result<Self, LandingError> {
        let Some(element) = document.get_element_by_id(consts::CONFIG_ELEMENT_ID) else {
            return Ok(Self::default());
        };
        let raw = element.text_content().unwrap_or_default();
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Self::from_json(&raw)
    }

    fn validate(&self) -> Result<(), LandingError> {
        if !(0.0..=1.0).contains(&self.reveal_threshold) {
            return Err(LandingError::Config(format!(
                "revealThreshold must be within 0..=1, got {}",
                self.reveal_threshold
            )));
        }
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(LandingError::Config(format!(
                "scrollThresholdPx must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if self.app_base_path.trim().is_empty() {
            return Err(LandingError::Config("appBasePath must not be empty".into()));
        }
        Ok(())
    }
}
