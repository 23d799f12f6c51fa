//! Season statistics retrieval
//!
//! Team directory, the provider seam, and the stats.nba.com client.

pub mod nba_stats;
pub mod provider;
pub mod teams;

pub use nba_stats::NbaStatsClient;
pub use provider::{fetch_profile, ProfileReport, StatsProvider};
