use super::*;

#[test]
fn demo_string_selects_demo() {
    assert_eq!(LaunchMode::parse(Some("demo")), LaunchMode::Demo);
}

#[test]
fn other_strings_select_standard() {
    assert_eq!(LaunchMode::parse(Some("start")), LaunchMode::Standard);
    assert_eq!(LaunchMode::parse(Some("")), LaunchMode::Standard);
    assert_eq!(LaunchMode::parse(Some("DEMO")), LaunchMode::Standard);
}

#[test]
fn absent_mode_is_standard() {
    assert_eq!(LaunchMode::parse(None), LaunchMode::Standard);
}

#[test]
fn demo_url_appends_flag() {
    assert_eq!(launch_url(LaunchMode::Demo, "/app/"), "/app/?demo=true");
}

#[test]
fn standard_url_is_base_path() {
    assert_eq!(launch_url(LaunchMode::Standard, "/app/"), "/app/");
}

#[test]
fn parse_then_build_for_every_input() {
    let cases = [(Some("demo"), "/app/?demo=true"), (Some("signup"), "/app/"), (None, "/app/")];
    for (raw, expected) in cases {
        assert_eq!(launch_url(LaunchMode::parse(raw), "/app/"), expected, "mode {raw:?}");
    }
}

#[test]
fn custom_base_path() {
    assert_eq!(launch_url(LaunchMode::Demo, "/beta/"), "/beta/?demo=true");
}

// =============================================================
// Base path
// =============================================================

#[test]
fn base_path_defaults_to_app() {
    assert_eq!(base_path(), "/app/");
}

#[test]
fn configured_base_path_feeds_launch_url() {
    set_base_path("/beta/");
    assert_eq!(launch_url(LaunchMode::parse(Some("demo")), &base_path()), "/beta/?demo=true");
    assert_eq!(launch_url(LaunchMode::parse(None), &base_path()), "/beta/");
}
