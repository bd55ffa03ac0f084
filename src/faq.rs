//! FAQ accordion: at most one question open at a time.
//!
//! Each answer is the element immediately following its question. Clicking
//! a question closes every pair, then reopens the clicked one unless it was
//! the one already open.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::rc::Rc;

use web_sys::{Document, Element};

use crate::config::LandingConfig;
use crate::controller::{Behavior, Install};
use crate::dom;
use crate::error::LandingError;

/// Which question is open after clicking `clicked`.
#[must_use]
pub fn next_active(clicked: usize, clicked_was_active: bool) -> Option<usize> {
    if clicked_was_active { None } else { Some(clicked) }
}

/// Open flags for every question after clicking `clicked`.
///
/// Every flag is cleared first; the clicked one is then set unless it was
/// already open. At most one flag is `true` in the result.
#[must_use]
pub fn click_flags(active: &[bool], clicked: usize) -> Vec<bool> {
    let was_active = active.get(clicked).copied().unwrap_or(false);
    let mut next = vec![false; active.len()];
    if let Some(open) = next_active(clicked, was_active)
        && let Some(flag) = next.get_mut(open)
    {
        *flag = true;
    }
    next
}

pub fn install(document: &Document, config: &LandingConfig) -> Result<Install, LandingError> {
    let questions = dom::query_all(document, &config.faq_question_selector)?;
    if questions.is_empty() {
        return Ok(Install::Skipped);
    }

    let questions = Rc::new(questions);
    for (index, question) in questions.iter().enumerate() {
        let questions = Rc::clone(&questions);
        let active_class = config.faq_active_class.clone();
        dom::listen(question, "click", move |_| {
            dom::report(Behavior::Faq.name(), on_click(&questions, index, &active_class));
        })?;
    }
    log::debug!("faq: {} questions", questions.len());
    Ok(Install::Active)
}

fn on_click(questions: &[Element], clicked: usize, class: &str) -> Result<(), LandingError> {
    let active: Vec<bool> = questions.iter().map(|q| dom::has_class(q, class)).collect();
    let next = click_flags(&active, clicked);

    for (index, question) in questions.iter().enumerate() {
        dom::set_class(question, class, false)?;
        dom::set_class(&answer_of(question, index)?, class, false)?;
    }
    for ((index, question), open) in questions.iter().enumerate().zip(next) {
        if !open {
            continue;
        }
        dom::set_class(question, class, true)?;
        dom::set_class(&answer_of(question, index)?, class, true)?;
    }
    Ok(())
}

fn answer_of(question: &Element, index: usize) -> Result<Element, LandingError> {
    question.next_element_sibling().ok_or(LandingError::MissingAnswer { index })
}
