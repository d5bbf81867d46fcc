use std::fs;
use std::path::PathBuf;

use cwc_page::fixtures_fetch::parse_fixtures_json;
use cwc_page::scorers_fetch::parse_scorers_json;
use cwc_page::standings_fetch::parse_standings_json;

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

#[test]
fn parses_scorers_fixture() {
    let raw = read_fixture("scorers.json");
    let entries = parse_scorers_json(&raw).expect("fixture should parse");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0].name, "Neves");
    assert_eq!(entries[0].goals, 4);
    assert_eq!(entries[0].position, "Meio-campo");
    // Goal counts arrive as strings or numbers; both parse.
    assert_eq!(entries[1].goals, 2);
    assert_eq!(entries[2].goals, 2);
}

#[test]
fn scorer_defaults_cover_missing_fields() {
    let raw = read_fixture("scorers.json");
    let entries = parse_scorers_json(&raw).expect("fixture should parse");
    // "Lima" has no position, the last record no name and no goal count.
    assert_eq!(entries[3].position, "N/A");
    assert_eq!(entries[4].name, "Nome não disponível");
    assert_eq!(entries[4].goals, 0);
}

#[test]
fn malformed_goal_string_parses_to_zero() {
    let raw = r#"[{"jogador-nome":"Teste","jogador-gols":"abc"}]"#;
    let entries = parse_scorers_json(raw).expect("record should parse");
    assert_eq!(entries[0].goals, 0);
    assert!(entries[0].photo.is_empty());
}

#[test]
fn empty_scorer_bodies_error() {
    assert!(parse_scorers_json("").is_err());
    assert!(parse_scorers_json("null").is_err());
    assert!(parse_scorers_json("{}").is_err());
}

#[test]
fn parses_standings_fixture() {
    let raw = read_fixture("standings.json");
    let groups = parse_standings_json(&raw).expect("fixture should parse");
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].label, "Grupo A");
    assert_eq!(groups[1].label, "Grupo B");

    let city = &groups[0].rows[0];
    assert_eq!(city.team.name, "Manchester City");
    assert_eq!(city.rank, 1);
    assert_eq!(city.points, 9);
    assert_eq!(city.played, 3);
    assert_eq!(city.goals_for, 8);
    assert_eq!(city.goals_against, 2);
    assert_eq!(city.goals_diff, 6);
}

#[test]
fn standings_without_expected_path_error() {
    assert!(parse_standings_json(r#"{"response":[]}"#).is_err());
    assert!(parse_standings_json(r#"{"errors":["rate limit"]}"#).is_err());
    assert!(parse_standings_json("null").is_err());
}

#[test]
fn parses_fixtures_fixture() {
    let raw = read_fixture("fixtures.json");
    let fixtures = parse_fixtures_json(&raw).expect("fixture should parse");
    assert_eq!(fixtures.len(), 2);

    let finished = &fixtures[0];
    assert_eq!(finished.id, 1321727);
    assert_eq!(finished.status_short, "FT");
    assert_eq!(finished.goals_home, Some(1));
    assert_eq!(finished.goals_away, Some(0));

    let pending = &fixtures[1];
    assert_eq!(pending.status_short, "NS");
    assert_eq!(pending.status_long.as_deref(), Some("Not Started"));
    assert_eq!(pending.goals_home, None);
    assert_eq!(pending.goals_away, None);
}

#[test]
fn empty_fixture_rounds_error() {
    // A round with no matches is treated as a failed fetch.
    assert!(parse_fixtures_json(r#"{"response":[]}"#).is_err());
    assert!(parse_fixtures_json("null").is_err());
    assert!(parse_fixtures_json(r#"{"message":"no key"}"#).is_err());
}
