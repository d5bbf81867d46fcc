use anyhow::{Context, Result};
use serde_json::Value;

use crate::config::Config;
use crate::fallback;
use crate::http_client::{fetch_json, http_client};
use crate::page::Page;
use crate::state::{group_letter_label, DataOrigin, StandingsGroup, TeamRef, TeamStanding};

pub fn fetch_standings(cfg: &Config) -> Result<Vec<StandingsGroup>> {
    let client = http_client()?;
    let body = fetch_json(
        client,
        &cfg.standings_url,
        &[("x-apisports-key", cfg.api_key.as_str())],
    )
    .context("standings request failed")?;
    parse_standings_json(&body)
}

pub fn parse_standings_json(raw: &str) -> Result<Vec<StandingsGroup>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty standings response"));
    }
    let v: Value = serde_json::from_str(trimmed).context("invalid standings json")?;
    let groups = v
        .get("response")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("league"))
        .and_then(|l| l.get("standings"))
        .and_then(|s| s.as_array())
        .ok_or_else(|| anyhow::anyhow!("standings payload missing response[0].league.standings"))?;

    // Empty groups stay in the list so indices and group letters keep
    // matching the feed; the select renderer skips them.
    let mut out = Vec::with_capacity(groups.len());
    for (idx, group) in groups.iter().enumerate() {
        let rows: Vec<TeamStanding> = group
            .as_array()
            .map(|items| items.iter().filter_map(parse_team_standing).collect())
            .unwrap_or_default();
        let label = rows
            .first()
            .and_then(|row| row.group.clone())
            .map(|g| g.replace("Group", "Grupo"))
            .unwrap_or_else(|| group_letter_label(idx));
        out.push(StandingsGroup { label, rows });
    }
    Ok(out)
}

fn parse_team_standing(v: &Value) -> Option<TeamStanding> {
    let team = v.get("team")?;
    let name = team.get("name")?.as_str()?.to_string();
    let logo = team
        .get("logo")
        .and_then(|l| l.as_str())
        .unwrap_or_default()
        .to_string();

    let all = v.get("all").unwrap_or(&Value::Null);
    let goals = all.get("goals").unwrap_or(&Value::Null);

    Some(TeamStanding {
        rank: pick_u32(v, "rank"),
        team: TeamRef { name, logo },
        points: pick_i32(v, "points"),
        played: pick_u32(all, "played"),
        win: pick_u32(all, "win"),
        draw: pick_u32(all, "draw"),
        lose: pick_u32(all, "lose"),
        goals_for: pick_u32(goals, "for"),
        goals_against: pick_u32(goals, "against"),
        goals_diff: pick_i32(v, "goalsDiff"),
        group: v
            .get("group")
            .and_then(|g| g.as_str())
            .map(|g| g.to_string()),
    })
}

fn pick_u32(v: &Value, key: &str) -> u32 {
    v.get(key).and_then(|x| x.as_u64()).unwrap_or(0) as u32
}

fn pick_i32(v: &Value, key: &str) -> i32 {
    v.get(key).and_then(|x| x.as_i64()).unwrap_or(0) as i32
}

/// Fetches the standings once; on any failure logs a warning and returns
/// the substitute groups tagged as fallback so the panel can show its
/// demo-data notice.
pub fn load_standings(cfg: &Config, page: &Page) -> (Vec<StandingsGroup>, DataOrigin) {
    match fetch_standings(cfg) {
        Ok(groups) => {
            page.push_log(format!("[INFO] Standings loaded: {} groups", groups.len()));
            (groups, DataOrigin::Remote)
        }
        Err(err) => {
            page.push_log(format!("[WARN] Standings fetch failed: {err}"));
            (fallback::seed_standings(), DataOrigin::Fallback)
        }
    }
}
