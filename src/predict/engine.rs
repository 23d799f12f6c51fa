//! Point-accumulation scoring engine
//!
//! Three season comparisons award one point each to the stronger side. Equal
//! metrics award the away slot, which always holds the second team entered. A
//! half-point home-court bonus is pre-seeded on whichever slot holds the
//! declared home team; the other slot never receives it.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Team;

/// Season aggregates for one team, already defaulted to 0 where a fetch failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamSeasonProfile {
    pub team: Team,
    /// Team points per game
    pub team_ppg: f64,
    /// Sum of active-roster per-player points per game
    pub roster_ppg: f64,
    /// Wins over games played, 0-1
    pub win_pct: f64,
}

impl TeamSeasonProfile {
    /// Profile with every metric at 0
    pub fn empty(team: Team) -> Self {
        TeamSeasonProfile {
            team,
            team_ppg: 0.0,
            roster_ppg: 0.0,
            win_pct: 0.0,
        }
    }
}

/// Slot in a matchup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Home,
    Away,
}

/// Scoring rules in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    HomeAdvantage,
    TeamScoring,
    RosterScoring,
    WinPercentage,
}

impl Rule {
    pub fn weight(&self) -> f64 {
        match self {
            Rule::HomeAdvantage => 0.5,
            Rule::TeamScoring | Rule::RosterScoring | Rule::WinPercentage => 1.0,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::HomeAdvantage => write!(f, "Home court"),
            Rule::TeamScoring => write!(f, "Team PPG"),
            Rule::RosterScoring => write!(f, "Roster PPG"),
            Rule::WinPercentage => write!(f, "Win %"),
        }
    }
}

/// A single rule's award
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RuleAward {
    pub rule: Rule,
    pub side: Side,
    pub points: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    HomeWins,
    AwayWins,
    Tie,
}

/// Result of scoring a matchup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupVerdict {
    pub home_points: f64,
    pub away_points: f64,
    pub outcome: Outcome,
    pub awards: Vec<RuleAward>,
}

impl MatchupVerdict {
    /// Winning side, or None for a tie
    pub fn winner(&self) -> Option<Side> {
        match self.outcome {
            Outcome::HomeWins => Some(Side::Home),
            Outcome::AwayWins => Some(Side::Away),
            Outcome::Tie => None,
        }
    }

    /// Points accumulated by one side
    pub fn points_for(&self, side: Side) -> f64 {
        match side {
            Side::Home => self.home_points,
            Side::Away => self.away_points,
        }
    }
}

/// Two profiles in entry order and the slot holding the declared home team
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchupInput {
    /// First team entered
    pub home: TeamSeasonProfile,
    /// Second team entered, takes equal metrics
    pub away: TeamSeasonProfile,
    /// Slot that gets the home-court bonus, if any
    pub advantage: Option<Side>,
}

impl MatchupInput {
    /// Pair two profiles in entry order and locate the declared home team.
    ///
    /// The slots never move, so equal metrics stay with the second team no
    /// matter which team is declared home. A declaration naming neither team
    /// applies no bonus.
    pub fn from_declaration(
        first: TeamSeasonProfile,
        second: TeamSeasonProfile,
        declared_home: &str,
    ) -> Self {
        let advantage = if first.team.matches_name(declared_home) {
            Some(Side::Home)
        } else if second.team.matches_name(declared_home) {
            Some(Side::Away)
        } else {
            log::info!(
                "'{}' matches neither team, no home advantage applied",
                declared_home.trim()
            );
            None
        };

        MatchupInput {
            home: first,
            away: second,
            advantage,
        }
    }

    /// True when either team gets the home-court bonus
    pub fn home_advantage_applies(&self) -> bool {
        self.advantage.is_some()
    }

    /// Profile sitting in a slot
    pub fn profile(&self, side: Side) -> &TeamSeasonProfile {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }

    pub fn score(&self) -> MatchupVerdict {
        score_matchup(&self.home, &self.away, self.advantage)
    }
}

/// Award a comparison rule: strictly greater wins, anything else goes away
fn compare(rule: Rule, home: f64, away: f64) -> RuleAward {
    let side = if home > away { Side::Home } else { Side::Away };
    RuleAward {
        rule,
        side,
        points: rule.weight(),
    }
}

/// Score a matchup, with the home-court bonus on the home slot when it applies
pub fn score(
    home: &TeamSeasonProfile,
    away: &TeamSeasonProfile,
    home_advantage: bool,
) -> MatchupVerdict {
    score_matchup(home, away, home_advantage.then_some(Side::Home))
}

/// Score a matchup with the home-court bonus on any slot
pub fn score_matchup(
    home: &TeamSeasonProfile,
    away: &TeamSeasonProfile,
    advantage: Option<Side>,
) -> MatchupVerdict {
    let mut awards = Vec::with_capacity(4);

    if let Some(side) = advantage {
        awards.push(RuleAward {
            rule: Rule::HomeAdvantage,
            side,
            points: Rule::HomeAdvantage.weight(),
        });
    }

    awards.push(compare(Rule::TeamScoring, home.team_ppg, away.team_ppg));
    awards.push(compare(Rule::RosterScoring, home.roster_ppg, away.roster_ppg));
    awards.push(compare(Rule::WinPercentage, home.win_pct, away.win_pct));

    let (home_points, away_points) =
        awards
            .iter()
            .fold((0.0, 0.0), |(h, a), award| match award.side {
                Side::Home => (h + award.points, a),
                Side::Away => (h, a + award.points),
            });

    let outcome = if home_points > away_points {
        Outcome::HomeWins
    } else if away_points > home_points {
        Outcome::AwayWins
    } else {
        Outcome::Tie
    };

    MatchupVerdict {
        home_points,
        away_points,
        outcome,
        awards,
    }
}
