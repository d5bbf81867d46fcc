use std::sync::{Arc, Mutex};

use cwc_page::fallback::{seed_fixtures, seed_scorers, seed_standings};
use cwc_page::fixtures_render::{
    fill_fixtures, format_kickoff, status_badge_class, status_label,
};
use cwc_page::page::Page;
use cwc_page::scorer_render::{
    fill_scorer_ranking, fill_scorer_strip, fill_topscore_panel, STRIP_LIMIT, TOPSCORE_LIMIT,
};
use cwc_page::standings_render::{
    render_group_select, render_standings_group, StandingsPanel, GROUP_SELECT_MOUNT,
    STANDINGS_MOUNT,
};
use cwc_page::state::{top_scorers, DataOrigin, ScorerEntry};

const STRIP_CARD: &str = "flex-shrink-0";
const RANKING_ROW: &str = "<tr class='hover:bg-amber-50";
const TOPSCORE_ROW: &str = "inline-flex justify-start items-center gap-2 sm:gap-4";

fn scorer(name: &str, goals: u32) -> ScorerEntry {
    ScorerEntry {
        name: name.to_string(),
        photo: format!("https://img.example.net/players/{goals}.png"),
        crest: "https://img.example.net/crest.png".to_string(),
        position: "Atacante".to_string(),
        goals,
    }
}

fn squad(count: usize) -> Vec<ScorerEntry> {
    (0..count)
        .map(|idx| scorer(&format!("Jogador {idx:02}"), (idx % 7) as u32))
        .collect()
}

#[test]
fn strip_never_shows_more_than_ten() {
    let page = Page::new();
    let mount = page.mount("div", "artilheiros-copa");
    fill_scorer_strip(&mount, &squad(25));
    assert_eq!(mount.html().matches(STRIP_CARD).count(), STRIP_LIMIT);
}

#[test]
fn topscore_panel_never_shows_more_than_fifteen() {
    let page = Page::new();
    let mount = page.mount("div", "topscore-rankings");
    fill_topscore_panel(&mount, &squad(40));
    assert_eq!(mount.html().matches(TOPSCORE_ROW).count(), TOPSCORE_LIMIT);
}

#[test]
fn full_ranking_shows_every_entry() {
    let page = Page::new();
    let mount = page.mount("div", "ranking-artilheiros");
    fill_scorer_ranking(&mount, &squad(25));
    assert_eq!(mount.html().matches(RANKING_ROW).count(), 25);
}

#[test]
fn small_datasets_render_without_padding() {
    let page = Page::new();
    let mount = page.mount("div", "artilheiros-copa");
    fill_scorer_strip(&mount, &squad(4));
    assert_eq!(mount.html().matches(STRIP_CARD).count(), 4);
}

#[test]
fn ordering_is_descending_and_stable() {
    let entries = vec![
        scorer("Alva", 3),
        scorer("Bento", 2),
        scorer("Caio", 2),
        scorer("Davi", 1),
        scorer("Edu", 1),
    ];

    let sorted = top_scorers(&entries, None);
    let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["Alva", "Bento", "Caio", "Davi", "Edu"]);

    let page = Page::new();
    let mount = page.mount("div", "ranking-artilheiros");
    fill_scorer_ranking(&mount, &entries);
    let html = mount.html();
    let pos = |name: &str| html.find(name).expect("name should be rendered");
    assert!(pos("Alva") < pos("Bento"));
    assert!(pos("Bento") < pos("Caio"));
    assert!(pos("Caio") < pos("Davi"));
    assert!(pos("Davi") < pos("Edu"));
    // Rank 1 goes to the three-goal entry.
    assert!(html.contains("text-amber-600'>1</td>"));
}

#[test]
fn rendering_twice_replaces_content() {
    let page = Page::new();
    let mount = page.mount("div", "artilheiros-copa");
    let entries = squad(12);
    fill_scorer_strip(&mount, &entries);
    fill_scorer_strip(&mount, &entries);
    assert_eq!(mount.html().matches(STRIP_CARD).count(), STRIP_LIMIT);

    let ranking = page.mount("div", "ranking-artilheiros");
    fill_scorer_ranking(&ranking, &entries);
    fill_scorer_ranking(&ranking, &entries);
    assert_eq!(ranking.html().matches(RANKING_ROW).count(), 12);
}

#[test]
fn seed_scorers_render_in_every_variant() {
    let entries = seed_scorers();
    assert!(!entries.is_empty());

    let page = Page::new();
    let strip = page.mount("div", "artilheiros-copa");
    let ranking = page.mount("div", "ranking-artilheiros");
    let panel = page.mount("div", "topscore-rankings");

    fill_scorer_strip(&strip, &entries);
    fill_scorer_ranking(&ranking, &entries);
    fill_topscore_panel(&panel, &entries);

    for html in [strip.html(), ranking.html(), panel.html()] {
        assert!(!html.is_empty());
        assert!(html.contains("Musiala"));
    }
    // Musiala leads the seed data with three goals.
    assert!(strip.html().contains("3 <span"));
}

#[test]
fn top_three_rows_are_distinguished() {
    let page = Page::new();
    let ranking = page.mount("div", "ranking-artilheiros");
    fill_scorer_ranking(&ranking, &squad(10));
    let html = ranking.html();
    assert_eq!(html.matches("bg-amber-25").count(), 3);
    assert_eq!(html.matches("text-amber-600").count(), 2); // heading + rank 1

    let panel = page.mount("div", "topscore-rankings");
    fill_topscore_panel(&panel, &squad(10));
    assert_eq!(panel.html().matches("border-amber-400").count(), 3);
}

fn standings_page() -> (Page, Arc<Mutex<StandingsPanel>>) {
    let page = Page::new();
    page.mount("select", GROUP_SELECT_MOUNT);
    page.mount("div", STANDINGS_MOUNT);
    (page, Arc::new(Mutex::new(StandingsPanel::new())))
}

#[test]
fn standings_render_one_group_at_a_time() {
    let (page, panel) = standings_page();
    panel
        .lock()
        .unwrap()
        .set_data(seed_standings(), DataOrigin::Remote);

    assert_eq!(panel.lock().unwrap().groups().len(), 2);
    render_group_select(&page, &panel);
    render_standings_group(&page, &panel, 0);

    let select = page.find_by_id(GROUP_SELECT_MOUNT).unwrap();
    assert!(select.html().contains("Grupo A"));
    assert!(select.html().contains("Grupo B"));

    let container = page.find_by_id(STANDINGS_MOUNT).unwrap();
    assert!(container.html().contains("Manchester City"));
    assert!(!container.html().contains("Real Madrid"));

    // Switching the index rebuilds rather than patches.
    render_standings_group(&page, &panel, 1);
    let html = page.find_by_id(STANDINGS_MOUNT).unwrap().html();
    assert!(html.contains("Real Madrid"));
    assert!(!html.contains("Manchester City"));
    assert_eq!(html.matches("<table").count(), 1);
    assert_eq!(panel.lock().unwrap().selected(), 1);
}

#[test]
fn fallback_standings_carry_the_demo_notice() {
    let (page, panel) = standings_page();
    panel
        .lock()
        .unwrap()
        .set_data(seed_standings(), DataOrigin::Fallback);

    assert_eq!(panel.lock().unwrap().origin(), DataOrigin::Fallback);
    render_group_select(&page, &panel);
    render_standings_group(&page, &panel, 0);

    let html = page.find_by_id(STANDINGS_MOUNT).unwrap().html();
    assert!(html.contains("Dados de demonstração"));
    assert!(html.contains("Manchester City"));
}

#[test]
fn out_of_range_group_shows_empty_message() {
    let (page, panel) = standings_page();
    panel
        .lock()
        .unwrap()
        .set_data(seed_standings(), DataOrigin::Remote);

    render_standings_group(&page, &panel, 7);
    let html = page.find_by_id(STANDINGS_MOUNT).unwrap().html();
    assert!(html.contains("Nenhum dado disponível"));
    assert!(!html.contains("<table"));
}

#[test]
fn empty_group_list_disables_the_selector() {
    let (page, panel) = standings_page();
    render_group_select(&page, &panel);
    let html = page.find_by_id(GROUP_SELECT_MOUNT).unwrap().html();
    assert!(html.contains("Nenhum grupo disponível"));
}

#[test]
fn seed_fixtures_render_eight_cards() {
    let page = Page::new();
    let mount = page.mount("div", "knockout-fixtures");
    let fixtures = seed_fixtures();
    fill_fixtures(&mount, &fixtures);
    let html = mount.html();
    assert_eq!(html.matches("Oitavas de Final #").count(), 8);
    assert!(html.contains("A REALIZAR"));
    assert!(html.contains("Apostar neste jogo"));
    // Unplayed matches show dashes for both scores.
    assert!(html.contains(">-</span>"));

    // Re-rendering replaces, never accumulates.
    fill_fixtures(&mount, &fixtures);
    assert_eq!(mount.html().matches("Oitavas de Final #").count(), 8);
}

#[test]
fn empty_fixture_list_shows_notice() {
    let page = Page::new();
    let mount = page.mount("div", "knockout-fixtures");
    fill_fixtures(&mount, &[]);
    assert!(mount.html().contains("Nenhuma partida das oitavas"));
}

#[test]
fn status_labels_cover_the_closed_set() {
    for (short, label) in [
        ("NS", "A REALIZAR"),
        ("FT", "ENCERRADO"),
        ("LIVE", "AO VIVO"),
        ("HT", "INTERVALO"),
        ("PST", "ADIADO"),
        ("CANC", "CANCELADO"),
        ("SUSP", "SUSPENSO"),
        ("ABD", "ABANDONADO"),
        ("TBD", "A DEFINIR"),
        ("SCHEDULED", "AGENDADO"),
    ] {
        assert_eq!(status_label(short, None), label);
    }
}

#[test]
fn unknown_status_falls_back_to_long_label() {
    assert_eq!(
        status_label("2H", Some("Second Half")),
        "SECOND HALF"
    );
    assert_eq!(status_label("2H", Some("  ")), "AGENDADO");
    assert_eq!(status_label("2H", None), "AGENDADO");
}

#[test]
fn badge_severity_follows_status() {
    assert_eq!(status_badge_class("NS"), "bg-blue-100 text-blue-800");
    assert_eq!(status_badge_class("FT"), "bg-gray-100 text-gray-800");
    assert_eq!(status_badge_class("LIVE"), "bg-red-100 text-red-800");
    assert_eq!(status_badge_class("PST"), "bg-yellow-100 text-yellow-800");
    assert_eq!(status_badge_class("2H"), "bg-green-100 text-green-800");
}

#[test]
fn kickoff_dates_format_or_pass_through() {
    let (date, time) = format_kickoff("2025-06-30T20:00:00+00:00");
    assert_eq!(date, "30/06/2025");
    assert_eq!(time.as_deref(), Some("20:00"));

    let (raw, none) = format_kickoff("a definir");
    assert_eq!(raw, "a definir");
    assert!(none.is_none());
}
