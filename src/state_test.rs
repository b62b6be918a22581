use super::*;
use crate::config::RuntimeConfiguration;

fn make_state() -> LadderState {
    LadderState::new(&RuntimeConfiguration::new().unwrap())
}

// =============================================================
// Tabs + theme
// =============================================================

#[test]
fn unknown_tab_names_fall_back_to_dashboard() {
    assert_eq!(Tab::from_name("students"), Tab::Students);
    assert_eq!(Tab::from_name("settings"), Tab::Settings);
    assert_eq!(Tab::from_name("dashboard"), Tab::Dashboard);
    assert_eq!(Tab::from_name("nonsense"), Tab::Dashboard);
    assert_eq!(Tab::from_name(""), Tab::Dashboard);
}

#[test]
fn tab_names_round_trip() {
    for tab in Tab::ALL {
        assert_eq!(Tab::from_name(tab.name()), tab);
    }
}

#[test]
fn theme_toggles_back_and_forth() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert_eq!(Theme::Light.toggle_label(), "Dark Mode");
    assert_eq!(Theme::Dark.toggle_label(), "Light Mode");
}

#[test]
fn ui_starts_on_the_dashboard_with_nothing_selected() {
    let ui = UiState::default();
    assert_eq!(ui.active_tab, Tab::Dashboard);
    assert!(ui.selected_student.is_none());
    assert_eq!(ui.theme, Theme::Light);
}

// =============================================================
// Shell rendering
// =============================================================

#[test]
fn render_includes_htmx_and_theme_class() {
    let state = make_state();

    let dark = state.render(Theme::Dark, html! { p { "hi" } }).into_string();
    assert!(dark.contains("htmx.org"));
    assert!(dark.contains("htmx-ext-sse"));
    assert!(dark.contains("<html class=\"dark\">"));
    assert!(dark.contains("<p>hi</p>"));

    let light = state.render(Theme::Light, html! {}).into_string();
    assert!(light.contains("<html>"));
}

// =============================================================
// State plumbing
// =============================================================

#[tokio::test]
async fn state_starts_with_the_seeded_roster() {
    let state = make_state();
    assert_eq!(state.roster().await.len(), 3);
    assert_eq!(state.settings().await.inactivity_days, 7);
}

#[tokio::test]
async fn sse_subscribers_receive_sent_events() {
    let state = make_state();
    let mut rx = state.subscribe_to_sse_feed();
    state.send_sse_event(SseEvent::Roster);
    assert_eq!(rx.recv().await.unwrap(), SseEvent::Roster);
}

#[tokio::test]
async fn roster_mutations_are_visible_across_clones() {
    let state = make_state();
    let clone = state.clone();
    clone.roster_mut().await.remove("2").unwrap();
    assert_eq!(state.roster().await.len(), 2);
}
