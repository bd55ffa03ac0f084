use super::*;

// =============================================================
// MenuState
// =============================================================

#[test]
fn default_is_closed() {
    assert!(!MenuState::default().open);
}

#[test]
fn toggle_inverts() {
    let closed = MenuState::default();
    assert!(closed.toggle().open);
    assert!(!closed.toggle().toggle().open);
}

#[test]
fn open_after_n_toggles_iff_n_is_odd() {
    let mut state = MenuState::default();
    for n in 1..=25 {
        state = state.toggle();
        assert_eq!(state.open, n % 2 == 1, "after {n} toggles");
    }
}

#[test]
fn close_always_closes() {
    assert!(!MenuState { open: true }.close().open);
    assert!(!MenuState { open: false }.close().open);
}

#[test]
fn close_after_any_toggle_sequence() {
    let mut state = MenuState::default();
    for n in 0..10 {
        for _ in 0..n {
            state = state.toggle();
        }
        assert!(!state.close().open);
    }
}

// =============================================================
// Glyphs
// =============================================================

#[test]
fn glyph_tracks_state() {
    let glyphs = MenuGlyphs::default();
    assert_eq!(MenuState { open: false }.glyph(&glyphs), "☰");
    assert_eq!(MenuState { open: true }.glyph(&glyphs), "✕");
}

#[test]
fn closed_glyph_after_close() {
    let glyphs = MenuGlyphs::default();
    let state = MenuState { open: true }.close();
    assert_eq!(state.glyph(&glyphs), glyphs.closed);
}

#[test]
fn custom_glyphs_are_used() {
    let glyphs = MenuGlyphs { closed: "menu".into(), open: "close".into() };
    assert_eq!(MenuState::default().toggle().glyph(&glyphs), "close");
}
