//! Client for the stats.nba.com JSON API
//!
//! Every endpoint answers with named result sets of `headers` plus `rowSet`
//! rows. Rows are decoded by header name into typed values here, so nothing
//! past this module sees the tabular shape.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ORIGIN, REFERER};
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

use super::provider::{PlayerLine, RosterSummary, StatsProvider};
use crate::{GamelineError, ProviderConfig, Result, Team, TeamId};

const TEAM_DASHBOARD: &str = "teamdashboardbygeneralsplits";
const PLAYER_DASHBOARD: &str = "teamplayerdashboard";
const LEAGUE_TEAM_STATS: &str = "leaguedashteamstats";

/// Raw endpoint response
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(rename = "resultSets")]
    pub result_sets: Vec<ResultSet>,
}

/// One named table in a response
#[derive(Debug, Clone, Deserialize)]
pub struct ResultSet {
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet")]
    pub row_set: Vec<Vec<Value>>,
}

impl StatsResponse {
    pub fn result_set(&self, name: &str) -> Result<&ResultSet> {
        self.result_sets
            .iter()
            .find(|rs| rs.name == name)
            .ok_or_else(|| GamelineError::Parse(format!("Missing result set {}", name)))
    }
}

impl ResultSet {
    fn column(&self, header: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|h| h == header)
            .ok_or_else(|| {
                GamelineError::Parse(format!("{} has no column {}", self.name, header))
            })
    }

    fn cell<'a>(&self, row: &'a [Value], header: &str) -> Result<&'a Value> {
        let idx = self.column(header)?;
        row.get(idx).ok_or_else(|| {
            GamelineError::Parse(format!("{} row too short for {}", self.name, header))
        })
    }

    fn number(&self, row: &[Value], header: &str) -> Result<f64> {
        self.cell(row, header)?.as_f64().ok_or_else(|| {
            GamelineError::Parse(format!("{}.{} is not a number", self.name, header))
        })
    }

    fn text(&self, row: &[Value], header: &str) -> Result<String> {
        self.cell(row, header)?
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| GamelineError::Parse(format!("{}.{} is not text", self.name, header)))
    }
}

/// Season points per game from the team's overall dashboard
pub fn team_points_per_game(response: &StatsResponse) -> Result<f64> {
    let overall = response.result_set("OverallTeamDashboard")?;
    let row = overall
        .row_set
        .first()
        .ok_or_else(|| GamelineError::Parse("OverallTeamDashboard is empty".to_string()))?;

    let points = overall.number(row, "PTS")?;
    let games = overall.number(row, "GP")?;
    if games <= 0.0 {
        return Err(GamelineError::Parse("No games played".to_string()));
    }
    Ok(points / games)
}

/// Per-player averages for everyone on the roster who has played
pub fn roster_summary(response: &StatsResponse) -> Result<RosterSummary> {
    let players = response.result_set("PlayersSeasonTotals")?;
    let mut lines = Vec::with_capacity(players.row_set.len());

    for row in &players.row_set {
        let games = players.number(row, "GP")?;
        if games <= 0.0 {
            continue;
        }
        lines.push(PlayerLine {
            name: players.text(row, "PLAYER_NAME")?,
            games_played: games as u32,
            ppg: players.number(row, "PTS")? / games,
            rpg: players.number(row, "REB")? / games,
            apg: players.number(row, "AST")? / games,
        });
    }

    Ok(RosterSummary::from_players(lines))
}

/// A team's win percentage from the league-wide team table
pub fn win_percentage(response: &StatsResponse, team: TeamId) -> Result<f64> {
    let league = response.result_set("LeagueDashTeamStats")?;
    for row in &league.row_set {
        if league.number(row, "TEAM_ID")? as i64 == team.0 {
            return league.number(row, "W_PCT");
        }
    }
    Err(GamelineError::Parse(format!(
        "{} not in LeagueDashTeamStats",
        team
    )))
}

/// Regular-season base-measure parameters shared by every endpoint
fn base_params(season: &str) -> Vec<(&'static str, String)> {
    let mut params: Vec<(&'static str, String)> = [
        ("LeagueID", "00"),
        ("SeasonType", "Regular Season"),
        ("MeasureType", "Base"),
        ("PerMode", "Totals"),
        ("PaceAdjust", "N"),
        ("PlusMinus", "N"),
        ("Rank", "N"),
        ("Month", "0"),
        ("OpponentTeamID", "0"),
        ("Period", "0"),
        ("LastNGames", "0"),
        ("PORound", "0"),
        ("DateFrom", ""),
        ("DateTo", ""),
        ("GameSegment", ""),
        ("Location", ""),
        ("Outcome", ""),
        ("SeasonSegment", ""),
        ("VsConference", ""),
        ("VsDivision", ""),
        ("ShotClockRange", ""),
    ]
    .iter()
    .map(|&(k, v)| (k, v.to_string()))
    .collect();
    params.push(("Season", season.to_string()));
    params
}

/// Rate-limited blocking client for stats.nba.com
pub struct NbaStatsClient {
    client: reqwest::blocking::Client,
    base_url: String,
    request_delay: Duration,
}

impl NbaStatsClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
        headers.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
        headers.insert("x-nba-stats-origin", HeaderValue::from_static("stats"));
        headers.insert("x-nba-stats-token", HeaderValue::from_static("true"));

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(NbaStatsClient {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_delay: Duration::from_millis(config.request_delay_ms),
        })
    }

    /// Wait out the request delay, then fetch one endpoint
    fn get(&self, endpoint: &str, params: &[(&str, String)]) -> Result<StatsResponse> {
        std::thread::sleep(self.request_delay);

        let url = format!("{}/{}", self.base_url, endpoint);
        log::debug!("GET {}", url);

        let resp = self.client.get(&url).query(params).send()?;
        if !resp.status().is_success() {
            return Err(GamelineError::Provider {
                endpoint: endpoint.to_string(),
                message: format!("status {}", resp.status()),
            });
        }
        Ok(resp.json()?)
    }
}

impl StatsProvider for NbaStatsClient {
    fn team_points_per_game(&self, team: &Team, season: &str) -> Result<f64> {
        let mut params = base_params(season);
        params.push(("TeamID", team.id.0.to_string()));
        let response = self.get(TEAM_DASHBOARD, &params)?;
        team_points_per_game(&response)
    }

    fn roster(&self, team: &Team, season: &str) -> Result<RosterSummary> {
        let mut params = base_params(season);
        params.push(("TeamID", team.id.0.to_string()));
        let response = self.get(PLAYER_DASHBOARD, &params)?;
        roster_summary(&response)
    }

    fn win_percentage(&self, team: &Team, season: &str) -> Result<f64> {
        let response = self.get(LEAGUE_TEAM_STATS, &base_params(season))?;
        win_percentage(&response, team.id)
    }
}
