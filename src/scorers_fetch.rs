use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;

use crate::config::Config;
use crate::fallback;
use crate::http_client::{fetch_json, http_client};
use crate::page::Page;
use crate::state::ScorerEntry;

// Wire shape of the scorer feed: a flat array of records with hyphenated
// Portuguese keys; the goal count arrives as a string.
#[derive(Debug, Deserialize)]
struct ScorerRecord {
    #[serde(rename = "jogador-nome")]
    name: Option<String>,
    #[serde(rename = "jogador-foto", default)]
    photo: String,
    #[serde(rename = "jogador-escudo", default)]
    crest: String,
    #[serde(rename = "jogador-posicao")]
    position: Option<String>,
    #[serde(rename = "jogador-gols")]
    goals: Option<Value>,
}

impl ScorerRecord {
    fn into_entry(self) -> ScorerEntry {
        ScorerEntry {
            name: self
                .name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| "Nome não disponível".to_string()),
            photo: self.photo,
            crest: self.crest,
            position: self
                .position
                .filter(|pos| !pos.trim().is_empty())
                .unwrap_or_else(|| "N/A".to_string()),
            goals: parse_goals(self.goals.as_ref()),
        }
    }
}

fn parse_goals(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n.as_u64().unwrap_or(0) as u32,
        Some(Value::String(s)) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

pub fn fetch_scorers(cfg: &Config) -> Result<Vec<ScorerEntry>> {
    let client = http_client()?;
    let body = fetch_json(client, &cfg.scorers_url, &[]).context("scorers request failed")?;
    parse_scorers_json(&body)
}

pub fn parse_scorers_json(raw: &str) -> Result<Vec<ScorerEntry>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Err(anyhow::anyhow!("empty scorers response"));
    }
    let records: Vec<ScorerRecord> =
        serde_json::from_str(trimmed).context("invalid scorers json")?;
    Ok(records.into_iter().map(ScorerRecord::into_entry).collect())
}

/// Fetches the scorer feed once; on any failure logs a warning and returns
/// the fixed substitute dataset.
pub fn load_scorers(cfg: &Config, page: &Page) -> Vec<ScorerEntry> {
    match fetch_scorers(cfg) {
        Ok(entries) => {
            page.push_log(format!("[INFO] Scorers loaded: {} players", entries.len()));
            entries
        }
        Err(err) => {
            page.push_log(format!("[WARN] Scorers fetch failed: {err}"));
            fallback::seed_scorers()
        }
    }
}
