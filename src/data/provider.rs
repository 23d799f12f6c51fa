//! Stats provider seam and profile assembly
//!
//! Providers may fail per metric. `fetch_profile` turns every failure into a
//! zero value plus a recorded `MetricFailure`, so the scoring engine only ever
//! sees fully-populated profiles.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::predict::TeamSeasonProfile;
use crate::{GamelineError, Result, Team};

/// One active player's per-game averages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub name: String,
    pub games_played: u32,
    pub ppg: f64,
    pub rpg: f64,
    pub apg: f64,
}

/// Active roster with its summed scoring average
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RosterSummary {
    pub players: Vec<PlayerLine>,
    pub total_ppg: f64,
}

impl RosterSummary {
    /// Sum the PPG of players who have already been filtered to the active roster
    pub fn from_players(players: Vec<PlayerLine>) -> Self {
        let total_ppg = players.iter().map(|p| p.ppg).sum();
        RosterSummary { players, total_ppg }
    }
}

/// The three metrics a profile is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Metric {
    TeamPointsPerGame,
    RosterPointsPerGame,
    WinPercentage,
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::TeamPointsPerGame => write!(f, "team points per game"),
            Metric::RosterPointsPerGame => write!(f, "roster points per game"),
            Metric::WinPercentage => write!(f, "win percentage"),
        }
    }
}

/// A metric that could not be fetched and was replaced by 0
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricFailure {
    pub metric: Metric,
    pub reason: String,
}

/// A fetched value, or the zero default with the failure that caused it
#[derive(Debug, Clone, PartialEq)]
pub struct MetricFetch<T> {
    pub value: T,
    pub failure: Option<MetricFailure>,
}

impl<T: Default> MetricFetch<T> {
    /// Clamp a fallible fetch to its default, logging the failure
    pub fn clamp(metric: Metric, team: &Team, result: Result<T>) -> Self {
        match result {
            Ok(value) => MetricFetch {
                value,
                failure: None,
            },
            Err(e) => {
                log::warn!("Failed to fetch {} for {}: {}", metric, team.name, e);
                MetricFetch {
                    value: T::default(),
                    failure: Some(MetricFailure {
                        metric,
                        reason: e.to_string(),
                    }),
                }
            }
        }
    }
}

/// Source of season aggregates for a team
pub trait StatsProvider {
    /// Team points per game for the season
    fn team_points_per_game(&self, team: &Team, season: &str) -> Result<f64>;

    /// Active roster per-game averages for the season
    fn roster(&self, team: &Team, season: &str) -> Result<RosterSummary>;

    /// Season win percentage, 0-1
    fn win_percentage(&self, team: &Team, season: &str) -> Result<f64>;
}

/// A populated profile plus everything the console shows about it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileReport {
    pub profile: TeamSeasonProfile,
    pub roster: Vec<PlayerLine>,
    pub failures: Vec<MetricFailure>,
}

impl ProfileReport {
    /// True when every metric was fetched
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

fn check_non_negative(metric: Metric, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(GamelineError::Parse(format!(
            "{} out of range: {}",
            metric, value
        )))
    }
}

fn check_fraction(metric: Metric, value: f64) -> Result<f64> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(GamelineError::Parse(format!(
            "{} out of range: {}",
            metric, value
        )))
    }
}

/// Fetch the three metrics in order and build a zero-defaulted profile
pub fn fetch_profile<P>(provider: &P, team: &Team, season: &str) -> ProfileReport
where
    P: StatsProvider + ?Sized,
{
    log::info!("Fetching {} stats for {}", season, team.name);

    let team_ppg = MetricFetch::clamp(
        Metric::TeamPointsPerGame,
        team,
        provider
            .team_points_per_game(team, season)
            .and_then(|v| check_non_negative(Metric::TeamPointsPerGame, v)),
    );

    let roster = MetricFetch::clamp(
        Metric::RosterPointsPerGame,
        team,
        provider.roster(team, season).and_then(|r| {
            check_non_negative(Metric::RosterPointsPerGame, r.total_ppg)?;
            Ok(r)
        }),
    );

    let win_pct = MetricFetch::clamp(
        Metric::WinPercentage,
        team,
        provider
            .win_percentage(team, season)
            .and_then(|v| check_fraction(Metric::WinPercentage, v)),
    );

    let failures: Vec<MetricFailure> = [team_ppg.failure, roster.failure, win_pct.failure]
        .into_iter()
        .flatten()
        .collect();

    let mut profile = TeamSeasonProfile::empty(team.clone());
    profile.team_ppg = team_ppg.value;
    profile.roster_ppg = roster.value.total_ppg;
    profile.win_pct = win_pct.value;

    ProfileReport {
        profile,
        roster: roster.value.players,
        failures,
    }
}
