//! Default selectors, class names, and thresholds for the landing page markup.

// ── Mobile menu ─────────────────────────────────────────────────

pub const MENU_BUTTON_SELECTOR: &str = ".mobile-menu-btn";
pub const NAV_SELECTOR: &str = ".nav";
pub const NAV_LINK_SELECTOR: &str = "a";
pub const OPEN_CLASS: &str = "active";

/// Button glyph while the menu is closed (hamburger).
pub const GLYPH_CLOSED: &str = "☰";

/// Button glyph while the menu is open.
pub const GLYPH_OPEN: &str = "✕";

// ── Scroll reveal ───────────────────────────────────────────────

pub const REVEAL_SELECTOR: &str = ".scroll-reveal";
pub const REVEALED_CLASS: &str = "revealed";

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;

pub const REVEAL_ROOT_MARGIN: &str = "0px";

// ── FAQ ─────────────────────────────────────────────────────────

pub const FAQ_QUESTION_SELECTOR: &str = ".faq-question";
pub const FAQ_ACTIVE_CLASS: &str = "active";

// ── Header ──────────────────────────────────────────────────────

pub const HEADER_SELECTOR: &str = ".header";
pub const SCROLLED_CLASS: &str = "scrolled";

/// Vertical offset in CSS pixels above which the header counts as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

// ── Anchors ─────────────────────────────────────────────────────

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

// ── Launch ──────────────────────────────────────────────────────

pub const APP_BASE_PATH: &str = "/app/";
pub const DEMO_QUERY: &str = "?demo=true";
pub const DEMO_MODE: &str = "demo";

/// Name under which the launch entry point is exposed on `window`.
pub const LAUNCH_GLOBAL: &str = "launchApp";

// ── Config ──────────────────────────────────────────────────────

/// Id of the optional `<script type="application/json">` config block.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";
