use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::Config;
use crate::fallback;
use crate::http_client::{fetch_json, http_client};
use crate::page::Page;
use crate::state::{Fixture, TeamRef};

pub fn fetch_knockout_fixtures(cfg: &Config) -> Result<Vec<Fixture>> {
    let client = http_client()?;
    let body = fetch_json(
        client,
        &cfg.fixtures_url,
        &[("x-apisports-key", cfg.api_key.as_str())],
    )
    .context("fixtures request failed")?;
    parse_fixtures_json(&body)
}

pub fn parse_fixtures_json(raw: &str) -> Result<Vec<Fixture>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty fixtures response"));
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid fixtures json")?;
    let rows = v
        .get("response")
        .and_then(|r| r.as_array())
        .ok_or_else(|| anyhow::anyhow!("fixtures payload missing response array"))?;

    let fixtures: Vec<Fixture> = rows.iter().filter_map(parse_fixture).collect();
    // A round with no fixtures counts as a failed fetch, as the source
    // page treated it.
    if fixtures.is_empty() {
        return Err(anyhow::anyhow!("fixtures response contained no matches"));
    }
    Ok(fixtures)
}

fn parse_fixture(v: &Value) -> Option<Fixture> {
    let meta = v.get("fixture")?;
    let id = meta.get("id")?.as_u64()?;
    let date = meta
        .get("date")
        .and_then(|d| d.as_str())
        .unwrap_or_default()
        .to_string();
    let status = meta.get("status").unwrap_or(&Value::Null);
    let status_short = status
        .get("short")
        .and_then(|s| s.as_str())
        .unwrap_or_default()
        .to_string();
    let status_long = status
        .get("long")
        .and_then(|s| s.as_str())
        .map(|s| s.to_string());

    let teams = v.get("teams")?;
    let home = parse_team(teams.get("home")?)?;
    let away = parse_team(teams.get("away")?)?;

    let goals = v.get("goals").unwrap_or(&Value::Null);
    let goals_home = goals.get("home").and_then(|g| g.as_u64()).map(|g| g as u8);
    let goals_away = goals.get("away").and_then(|g| g.as_u64()).map(|g| g as u8);

    Some(Fixture {
        id,
        date,
        status_short,
        status_long,
        home,
        away,
        goals_home,
        goals_away,
    })
}

fn parse_team(v: &Value) -> Option<TeamRef> {
    let name = v.get("name")?.as_str()?.to_string();
    let logo = v
        .get("logo")
        .and_then(|l| l.as_str())
        .unwrap_or_default()
        .to_string();
    Some(TeamRef { name, logo })
}

/// Fetches the knockout round once; on any failure logs a warning and
/// returns the fixed substitute pairings.
pub fn load_fixtures(cfg: &Config, page: &Page) -> Vec<Fixture> {
    match fetch_knockout_fixtures(cfg) {
        Ok(fixtures) => {
            page.push_log(format!(
                "[INFO] Knockout fixtures loaded: {} matches",
                fixtures.len()
            ));
            fixtures
        }
        Err(err) => {
            page.push_log(format!("[WARN] Knockout fixtures fetch failed: {err}"));
            fallback::seed_fixtures()
        }
    }
}
