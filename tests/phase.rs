use std::time::Duration;

use cwc_page::config::Config;
use cwc_page::page::Page;
use cwc_page::phase::{
    Phase, PhaseController, GROUP_SECTION, KNOCKOUT_SECTION, PHASE_TITLE,
};

// Endpoints nothing listens on: every fetch fails fast and the fallback
// datasets take over, keeping these tests offline.
fn offline_config() -> Config {
    Config {
        scorers_url: "http://127.0.0.1:9/scorers.json".to_string(),
        standings_url: "http://127.0.0.1:9/standings".to_string(),
        fixtures_url: "http://127.0.0.1:9/fixtures".to_string(),
        api_key: "test-key".to_string(),
        mount_wait: Duration::from_millis(250),
    }
}

fn phase_page() -> Page {
    let page = Page::new();
    page.mount("section", GROUP_SECTION);
    let knockout = page.mount("section", KNOCKOUT_SECTION);
    knockout.add_class("hidden");
    page.mount("div", "knockout-fixtures");
    page.mount("h2", PHASE_TITLE).set_text("FASE DE GRUPOS");
    page.mount("p", "phase-description");
    page.mount("div", "phase-instruction");
    page
}

#[test]
fn starts_in_the_group_phase() {
    let page = phase_page();
    let controller = PhaseController::new(page, offline_config());
    assert_eq!(controller.phase(), Phase::Groups);
    assert!(!controller.fixtures_populated());
}

#[test]
fn toggle_round_trip_swaps_sections_and_texts() {
    let page = phase_page();
    let mut controller = PhaseController::new(page.clone(), offline_config());

    controller.advance();
    assert_eq!(controller.phase(), Phase::Knockout);
    assert!(page.find_by_id(GROUP_SECTION).unwrap().has_class("hidden"));
    assert!(!page.find_by_id(KNOCKOUT_SECTION).unwrap().has_class("hidden"));
    assert_eq!(
        page.find_by_id(PHASE_TITLE).unwrap().text(),
        "OITAVAS DE FINAL"
    );
    assert!(controller.fixtures_populated());
    // The feed is unreachable, so the seed pairings appear.
    let fixtures = page.find_by_id("knockout-fixtures").unwrap().html();
    assert!(fixtures.contains("Manchester City"));
    assert_eq!(fixtures.matches("Oitavas de Final #").count(), 8);

    controller.back();
    assert_eq!(controller.phase(), Phase::Groups);
    assert!(!page.find_by_id(GROUP_SECTION).unwrap().has_class("hidden"));
    assert!(page.find_by_id(KNOCKOUT_SECTION).unwrap().has_class("hidden"));
    assert_eq!(page.find_by_id(PHASE_TITLE).unwrap().text(), "FASE DE GRUPOS");
}

#[test]
fn navigation_is_direction_gated() {
    let page = phase_page();
    let mut controller = PhaseController::new(page, offline_config());

    // Backward from the initial phase does nothing.
    controller.back();
    assert_eq!(controller.phase(), Phase::Groups);

    controller.advance();
    assert_eq!(controller.phase(), Phase::Knockout);

    // Forward from knockout does nothing either.
    controller.advance();
    assert_eq!(controller.phase(), Phase::Knockout);
}

#[test]
fn fixtures_render_only_on_first_knockout_entry() {
    let page = phase_page();
    let mut controller = PhaseController::new(page.clone(), offline_config());

    controller.advance();
    assert!(controller.fixtures_populated());

    // Mark the mount; re-entering knockout must not rebuild it.
    let mount = page.find_by_id("knockout-fixtures").unwrap();
    mount.set_html("<p>sentinel</p>");

    controller.back();
    controller.advance();
    assert_eq!(mount.html(), "<p>sentinel</p>");
}

#[test]
fn missing_sections_do_not_break_the_toggle() {
    let page = Page::new();
    let mut controller = PhaseController::new(page.clone(), offline_config());
    controller.advance();
    assert_eq!(controller.phase(), Phase::Knockout);
    assert!(page
        .logs()
        .iter()
        .any(|line| line.contains("Phase section missing")));
}
