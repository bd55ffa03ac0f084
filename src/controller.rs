//! Page interaction controller.
//!
//! Installs each behavior independently once the DOM is ready. A behavior
//! whose markup is absent is skipped; one that fails to install is logged
//! and does not prevent the others.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use web_sys::{Document, Window};

use crate::config::LandingConfig;
use crate::dom;
use crate::error::LandingError;
use crate::{diagnostics, faq, header, menu, reveal, smooth_scroll};

/// Outcome of installing one behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Install {
    /// Listeners attached.
    Active,
    /// Required markup not found; nothing attached.
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Menu,
    Reveal,
    Faq,
    Header,
    SmoothScroll,
}

impl Behavior {
    pub const ALL: [Self; 5] = [Self::Menu, Self::Reveal, Self::Faq, Self::Header, Self::SmoothScroll];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Menu => "menu",
            Self::Reveal => "reveal",
            Self::Faq => "faq",
            Self::Header => "header",
            Self::SmoothScroll => "smooth-scroll",
        }
    }
}

/// Per-behavior install outcomes, in [`Behavior::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub entries: Vec<(Behavior, Result<Install, LandingError>)>,
}

impl InstallReport {
    pub fn push(&mut self, behavior: Behavior, outcome: Result<Install, LandingError>) {
        self.entries.push((behavior, outcome));
    }

    #[must_use]
    pub fn active(&self) -> usize {
        self.count(|outcome| matches!(outcome, Ok(Install::Active)))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|outcome| matches!(outcome, Ok(Install::Skipped)))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(Result::is_err)
    }

    fn count(&self, pred: impl Fn(&Result<Install, LandingError>) -> bool) -> usize {
        self.entries.iter().filter(|(_, outcome)| pred(outcome)).count()
    }

    /// Write one line per behavior plus a summary to the console.
    pub fn log(&self) {
        for (behavior, outcome) in &self.entries {
            match outcome {
                Ok(Install::Active) => log::debug!("{}: active", behavior.name()),
                Ok(Install::Skipped) => log::debug!("{}: skipped, markup not found", behavior.name()),
                Err(err) => log::warn!("{}: install failed: {err}", behavior.name()),
            }
        }
        log::debug!("behaviors: {} active, {} skipped, {} failed", self.active(), self.skipped(), self.failed());
    }
}

/// Install all five page behaviors against the current document.
pub fn install_all(window: &Window, document: &Document, config: &LandingConfig) -> InstallReport {
    let mut report = InstallReport::default();
    for behavior in Behavior::ALL {
        let outcome = match behavior {
            Behavior::Menu => menu::install(document, config),
            Behavior::Reveal => reveal::install(document, config),
            Behavior::Faq => faq::install(document, config),
            Behavior::Header => header::install(window, document, config),
            Behavior::SmoothScroll => smooth_scroll::install(window, document, config),
        };
        report.push(behavior, outcome);
    }
    report
}

/// Run `on_ready` once the DOM has been parsed.
///
/// When the document has already finished loading (the module was
/// instantiated late), it runs immediately.
pub fn when_ready<F>(document: &Document, on_ready: F) -> Result<(), LandingError>
where
    F: FnOnce() + 'static,
{
    if document.ready_state() != "loading" {
        on_ready();
        return Ok(());
    }
    let mut pending = Some(on_ready);
    dom::listen(document, "DOMContentLoaded", move |_| {
        if let Some(run) = pending.take() {
            run();
        }
    })
}

/// Entry point used by `start`: ready wiring plus window-level diagnostics.
pub fn boot(window: &Window, document: &Document, config: LandingConfig) -> Result<(), LandingError> {
    diagnostics::install_load_timing(window, document)?;
    diagnostics::install_error_listener(window)?;

    let win = window.clone();
    let doc = document.clone();
    when_ready(document, move || {
        diagnostics::log_ready(&win);
        install_all(&win, &doc, &config).log();
    })
}
