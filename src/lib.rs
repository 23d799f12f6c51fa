//! NBA matchup prediction from season statistics
//!
//! Fetches three season aggregates per team and reduces them to a winner
//! with a fixed point-accumulation rule.

pub mod data;
pub mod predict;
pub mod season;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stats API identifier for a team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamId(pub i64);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team({})", self.0)
    }
}

/// An NBA franchise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub abbreviation: String,
    pub nickname: String,
    pub city: String,
}

impl Team {
    /// Case-insensitive match on the full name, abbreviation or nickname
    pub fn matches_name(&self, name: &str) -> bool {
        let name_lower = name.trim().to_lowercase();
        if name_lower.is_empty() {
            return false;
        }
        self.name.to_lowercase() == name_lower
            || self.abbreviation.to_lowercase() == name_lower
            || self.nickname.to_lowercase() == name_lower
    }
}

/// Application-wide errors
#[derive(Debug, Error)]
pub enum GamelineError {
    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Stats provider error on {endpoint}: {message}")]
    Provider { endpoint: String, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, GamelineError>;

/// Application configuration loaded from gameline.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub provider: ProviderConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub base_url: String,
    pub user_agent: String,
    pub timeout_secs: u64,
    /// Fixed wait before every request, to stay under the upstream quota
    pub request_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            provider: ProviderConfig {
                base_url: "https://stats.nba.com/stats".to_string(),
                user_agent: "Mozilla/5.0 (X11; Linux x86_64) gameline/0.1".to_string(),
                timeout_secs: 30,
                request_delay_ms: 1000,
            },
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GamelineError::Config(format!("Failed to read config file {}: {}", path, e))
        })?;
        toml::from_str(&content)
            .map_err(|e| GamelineError::Config(format!("Failed to parse config: {}", e)))
    }

    pub fn save(&self, path: &str) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| GamelineError::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celtics() -> Team {
        Team {
            id: TeamId(1610612738),
            name: "Boston Celtics".to_string(),
            abbreviation: "BOS".to_string(),
            nickname: "Celtics".to_string(),
            city: "Boston".to_string(),
        }
    }

    #[test]
    fn test_matches_name() {
        let team = celtics();
        assert!(team.matches_name("boston celtics"));
        assert!(team.matches_name("  Boston Celtics "));
        assert!(team.matches_name("bos"));
        assert!(team.matches_name("CELTICS"));
        assert!(!team.matches_name("Boston"));
        assert!(!team.matches_name(""));
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.provider.request_delay_ms, 1000);
        assert_eq!(parsed.provider.base_url, config.provider.base_url);
    }

    #[test]
    fn test_config_load_missing_file() {
        let err = Config::load("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, GamelineError::Config(_)));
    }
}
