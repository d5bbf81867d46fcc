use std::sync::{Arc, Mutex};

/// One row of the scorer feed, normalized from the wire shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerEntry {
    pub name: String,
    pub photo: String,
    pub crest: String,
    pub position: String,
    pub goals: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamRef {
    pub name: String,
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamStanding {
    pub rank: u32,
    pub team: TeamRef,
    pub points: i32,
    pub played: u32,
    pub win: u32,
    pub draw: u32,
    pub lose: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub goals_diff: i32,
    pub group: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandingsGroup {
    pub label: String,
    pub rows: Vec<TeamStanding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub id: u64,
    pub date: String,
    pub status_short: String,
    pub status_long: Option<String>,
    pub home: TeamRef,
    pub away: TeamRef,
    pub goals_home: Option<u8>,
    pub goals_away: Option<u8>,
}

/// Where a loaded dataset came from. Fallback data gets a visible notice
/// in the standings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrigin {
    Remote,
    Fallback,
}

/// Compact scorer row published for external page scripts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScorerSummary {
    pub name: String,
    pub photo: String,
    pub position: String,
    pub goals: u32,
}

pub type SharedScorers = Arc<Mutex<Vec<ScorerSummary>>>;

pub fn new_shared_scorers() -> SharedScorers {
    Arc::new(Mutex::new(Vec::new()))
}

/// Orders scorers by goal count, highest first. The sort is stable, so
/// entries with equal counts keep their feed order.
pub fn top_scorers(entries: &[ScorerEntry], limit: Option<usize>) -> Vec<ScorerEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.goals.cmp(&a.goals));
    if let Some(limit) = limit {
        sorted.truncate(limit);
    }
    sorted
}

pub fn summarize_scorers(entries: &[ScorerEntry]) -> Vec<ScorerSummary> {
    entries
        .iter()
        .map(|entry| ScorerSummary {
            name: entry.name.clone(),
            photo: entry.photo.clone(),
            position: entry.position.clone(),
            goals: entry.goals,
        })
        .collect()
}

/// Label for groups whose feed rows carry no `group` field:
/// `Grupo A`, `Grupo B`, ... by position in the feed.
pub fn group_letter_label(idx: usize) -> String {
    if idx < 26 {
        format!("Grupo {}", (b'A' + idx as u8) as char)
    } else {
        format!("Grupo {}", idx + 1)
    }
}
