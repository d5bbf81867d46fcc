use std::env;
use std::time::Duration;

const DEFAULT_SCORERS_URL: &str =
    "https://cdn.jsdelivr.net/gh/mu-costa/artilheiros@refs/heads/main/artilheiros.json";
const DEFAULT_STANDINGS_URL: &str =
    "https://v3.football.api-sports.io/standings?league=15&season=2025";
const DEFAULT_FIXTURES_URL: &str =
    "https://v3.football.api-sports.io/fixtures?league=15&season=2025&round=8th%20Finals";
const DEFAULT_API_KEY: &str = "6ab9fabfb32d18cad9adb9525d1076ac";

const DEFAULT_MOUNT_WAIT_MS: u64 = 5_000;

#[derive(Debug, Clone)]
pub struct Config {
    pub scorers_url: String,
    pub standings_url: String,
    pub fixtures_url: String,
    pub api_key: String,
    /// How long renderers wait for their mount point to appear.
    pub mount_wait: Duration,
}

impl Config {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let mount_wait_ms = env::var("MOUNT_WAIT_MS")
            .ok()
            .and_then(|val| val.parse::<u64>().ok())
            .unwrap_or(DEFAULT_MOUNT_WAIT_MS)
            .clamp(100, 60_000);
        Self {
            scorers_url: env_or_default("SCORERS_API_URL", &defaults.scorers_url),
            standings_url: env_or_default("STANDINGS_API_URL", &defaults.standings_url),
            fixtures_url: env_or_default("FIXTURES_API_URL", &defaults.fixtures_url),
            api_key: env_or_default("APISPORTS_KEY", &defaults.api_key),
            mount_wait: Duration::from_millis(mount_wait_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorers_url: DEFAULT_SCORERS_URL.to_string(),
            standings_url: DEFAULT_STANDINGS_URL.to_string(),
            fixtures_url: DEFAULT_FIXTURES_URL.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            mount_wait: Duration::from_millis(DEFAULT_MOUNT_WAIT_MS),
        }
    }
}

fn env_or_default(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => default.to_string(),
    }
}
