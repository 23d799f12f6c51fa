//! Console rendering for profiles and verdicts

use super::engine::{MatchupInput, MatchupVerdict, Side};
use crate::data::ProfileReport;
use crate::{GamelineError, Result};

/// How `render_prediction` lays out its output
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use table or json.", s)),
        }
    }
}

/// Raw metrics and active roster for one team
pub fn format_profile(report: &ProfileReport) -> String {
    let profile = &report.profile;
    let mut lines = vec![
        profile.team.name.clone(),
        format!("  Average Points Per Game: {:.2}", profile.team_ppg),
        format!("  Roster Points Per Game:  {:.2}", profile.roster_ppg),
        format!("  Win Percentage:          {:.2}%", profile.win_pct * 100.0),
    ];

    if !report.roster.is_empty() {
        lines.push(format!(
            "  {:<26}{:>7}{:>7}{:>7}",
            "Player", "PPG", "RPG", "APG"
        ));
        lines.extend(report.roster.iter().map(|p| {
            format!("  {:<26}{:>7.1}{:>7.1}{:>7.1}", p.name, p.ppg, p.rpg, p.apg)
        }));
    }

    if !report.is_complete() {
        lines.extend(
            report
                .failures
                .iter()
                .map(|f| format!("  (unavailable: {}, counted as 0)", f.metric)),
        );
    }

    lines.join("\n") + "\n"
}

fn side_name(input: &MatchupInput, side: Side) -> &str {
    &input.profile(side).team.name
}

/// Point totals, rule breakdown and the announcement
pub fn format_verdict(input: &MatchupInput, verdict: &MatchupVerdict) -> String {
    let first = side_name(input, Side::Home);
    let second = side_name(input, Side::Away);

    let announcement = match verdict.winner() {
        Some(side) => format!("{} wins!", side_name(input, side)),
        None => "It's a tie!".to_string(),
    };

    let breakdown: String = verdict
        .awards
        .iter()
        .map(|award| {
            format!(
                "│  {:<12} +{} {}\n",
                award.rule.to_string(),
                award.points,
                side_name(input, award.side)
            )
        })
        .collect();

    format!(
        r#"
┌─────────────────────────────────────────────────┐
│  {} vs {}
├─────────────────────────────────────────────────┤
{}├─────────────────────────────────────────────────┤
│  {} Points: {}
│  {} Points: {}
│  Prediction: {}
└─────────────────────────────────────────────────┘
"#,
        first,
        second,
        breakdown,
        first,
        verdict.points_for(Side::Home),
        second,
        verdict.points_for(Side::Away),
        announcement
    )
}

/// Machine-readable verdict
pub fn verdict_json(
    season: &str,
    input: &MatchupInput,
    verdict: &MatchupVerdict,
) -> serde_json::Value {
    let winner = verdict.winner().map(|side| side_name(input, side).to_string());
    let home_team = input.advantage.map(|side| side_name(input, side).to_string());
    serde_json::json!({
        "season": season,
        "first": input.home,
        "second": input.away,
        "home_team": home_team,
        "first_points": verdict.points_for(Side::Home),
        "second_points": verdict.points_for(Side::Away),
        "outcome": verdict.outcome,
        "winner": winner,
        "awards": verdict.awards,
    })
}

/// Everything `predict` writes to stdout for one matchup
pub fn render_prediction(
    format: OutputFormat,
    season: &str,
    reports: [&ProfileReport; 2],
    input: &MatchupInput,
    verdict: &MatchupVerdict,
) -> Result<String> {
    match format {
        OutputFormat::Table => {
            let profiles: Vec<String> = reports.iter().map(|r| format_profile(r)).collect();
            Ok(format!(
                "{}\n{}",
                profiles.join("\n"),
                format_verdict(input, verdict)
            ))
        }
        OutputFormat::Json => {
            let json = verdict_json(season, input, verdict);
            serde_json::to_string_pretty(&json)
                .map(|text| text + "\n")
                .map_err(|e| GamelineError::Parse(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::{Metric, MetricFailure, PlayerLine};
    use crate::predict::{Outcome, TeamSeasonProfile};
    use crate::{Team, TeamId};

    fn profile(id: i64, name: &str, team_ppg: f64, roster_ppg: f64, win_pct: f64) -> TeamSeasonProfile {
        TeamSeasonProfile {
            team: Team {
                id: TeamId(id),
                name: name.to_string(),
                abbreviation: String::new(),
                nickname: String::new(),
                city: String::new(),
            },
            team_ppg,
            roster_ppg,
            win_pct,
        }
    }

    fn report(profile: TeamSeasonProfile) -> ProfileReport {
        ProfileReport {
            profile,
            roster: vec![],
            failures: vec![],
        }
    }

    #[test]
    fn test_format_profile() {
        let report = ProfileReport {
            profile: profile(1, "Denver Nuggets", 115.456, 112.0, 0.6),
            roster: vec![PlayerLine {
                name: "Center".to_string(),
                games_played: 30,
                ppg: 26.4,
                rpg: 12.1,
                apg: 9.0,
            }],
            failures: vec![MetricFailure {
                metric: Metric::WinPercentage,
                reason: "timeout".to_string(),
            }],
        };

        let text = format_profile(&report);
        assert!(text.contains("Average Points Per Game: 115.46"));
        assert!(text.contains("Win Percentage:          60.00%"));
        assert!(text.contains("Center"));
        assert!(text.contains("unavailable: win percentage"));
    }

    #[test]
    fn test_format_verdict_announces_winner() {
        let input = MatchupInput {
            home: profile(1, "Home Team", 20.0, 100.0, 0.60),
            away: profile(2, "Away Team", 18.0, 95.0, 0.55),
            advantage: Some(Side::Home),
        };
        let verdict = input.score();

        let text = format_verdict(&input, &verdict);
        assert!(text.contains("Home Team Points: 3.5"));
        assert!(text.contains("Away Team Points: 0"));
        assert!(text.contains("Prediction: Home Team wins!"));
        assert!(text.contains("Home court"));
    }

    #[test]
    fn test_verdict_json() {
        let input = MatchupInput {
            home: profile(1, "Lakers", 1.0, 1.0, 0.1),
            away: profile(2, "Celtics", 1.0, 1.0, 0.1),
            advantage: Some(Side::Away),
        };
        let verdict = input.score();
        assert_eq!(verdict.outcome, Outcome::AwayWins);

        let json = verdict_json("2024-25", &input, &verdict);
        assert_eq!(json["winner"], "Celtics");
        assert_eq!(json["home_team"], "Celtics");
        assert_eq!(json["second_points"], 3.5);
        assert_eq!(json["awards"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn test_json_rendering_is_a_single_document() {
        let first = report(profile(1, "Lakers", 110.0, 112.0, 0.5));
        let second = report(profile(2, "Celtics", 118.0, 120.0, 0.7));
        let input = MatchupInput::from_declaration(
            first.profile.clone(),
            second.profile.clone(),
            "Lakers",
        );
        let verdict = input.score();

        let text = render_prediction(
            OutputFormat::Json,
            "2024-25",
            [&first, &second],
            &input,
            &verdict,
        )
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed["season"], "2024-25");
        assert!(!text.contains("Fetching"));
        assert!(!text.contains('┌'));
    }

    #[test]
    fn test_table_rendering_lists_profiles_then_verdict() {
        let first = report(profile(1, "Lakers", 110.0, 112.0, 0.5));
        let second = report(profile(2, "Celtics", 118.0, 120.0, 0.7));
        let input = MatchupInput::from_declaration(
            first.profile.clone(),
            second.profile.clone(),
            "Neither",
        );
        let verdict = input.score();

        let text = render_prediction(
            OutputFormat::Table,
            "2024-25",
            [&first, &second],
            &input,
            &verdict,
        )
        .unwrap();
        let lakers = text.find("Lakers\n").unwrap();
        let celtics = text.find("Celtics\n").unwrap();
        let prediction = text.find("Prediction: Celtics wins!").unwrap();
        assert!(lakers < celtics && celtics < prediction);
    }
}
