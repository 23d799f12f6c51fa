//! Matchup scoring and verdict display

pub mod engine;
pub mod report;

pub use engine::{score, MatchupInput, MatchupVerdict, Outcome, TeamSeasonProfile};
