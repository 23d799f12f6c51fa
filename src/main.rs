//! NBA matchup prediction CLI
//!
//! Compares two teams on season scoring, roster scoring and record.

use clap::{Parser, Subcommand};
use gameline::predict::report::OutputFormat;
use gameline::{Config, Result};

#[derive(Parser)]
#[command(name = "gameline")]
#[command(about = "Predict NBA matchups from season statistics", long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, default_value = "gameline.toml")]
    config: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Predict the winner of a matchup (prompts for anything not given)
    Predict {
        /// First team name
        first: Option<String>,
        /// Second team name
        second: Option<String>,
        /// Team with home court advantage
        #[arg(long)]
        home: Option<String>,
        /// Season label, e.g. 2024-25 (default: current season)
        #[arg(long)]
        season: Option<String>,
        /// Output format
        #[arg(long, default_value = "table")]
        format: OutputFormat,
    },
    /// Show the season label for a date
    Season {
        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
    },
    /// List known teams
    Teams,
    /// Write a default config file
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    // Load or create config
    let config = if std::path::Path::new(&cli.config).exists() {
        match Config::load(&cli.config) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        Config::default()
    };

    let result = match cli.command {
        Commands::Predict {
            first,
            second,
            home,
            season,
            format,
        } => commands::predict(&config, first, second, home, season, format),
        Commands::Season { date } => commands::season(date),
        Commands::Teams => commands::teams(),
        Commands::Init => commands::init(&cli.config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

mod commands {
    use super::*;
    use gameline::data::{fetch_profile, teams, NbaStatsClient};
    use gameline::predict::report::render_prediction;
    use gameline::predict::MatchupInput;
    use gameline::{season as seasons, GamelineError};
    use std::io::{BufRead, Write};

    /// Ask on stderr so stdout only carries the prediction
    fn prompt(message: &str) -> Result<String> {
        eprint!("{}", message);
        std::io::stderr().flush()?;
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    /// Progress goes to stdout for tables and to the log for JSON
    fn progress(format: OutputFormat, message: &str) {
        match format {
            OutputFormat::Table => println!("{}", message),
            OutputFormat::Json => log::info!("{}", message.trim()),
        }
    }

    pub fn init(config_path: &str) -> Result<()> {
        let config = Config::default();
        config.save(config_path)?;
        println!("Created default config at {}", config_path);

        println!("\nNext steps:");
        println!("  1. Edit {} to customize settings", config_path);
        println!("  2. Run 'gameline predict \"Team A\" \"Team B\" --home \"Team A\"'");

        Ok(())
    }

    pub fn season(date: Option<String>) -> Result<()> {
        let label = match date {
            Some(d) => {
                let date = chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                    .map_err(|e| GamelineError::Parse(format!("Invalid date {}: {}", d, e)))?;
                seasons::season_for_date(date)
            }
            None => seasons::current_season(),
        };
        println!("{}", label);
        Ok(())
    }

    pub fn teams() -> Result<()> {
        println!("{:<26} {:<5} {}", "Team", "Abbr", "ID");
        println!("───────────────────────────────────────────────");
        for team in teams::all_teams() {
            println!("{:<26} {:<5} {}", team.name, team.abbreviation, team.id.0);
        }
        Ok(())
    }

    pub fn predict(
        config: &Config,
        first: Option<String>,
        second: Option<String>,
        home: Option<String>,
        season: Option<String>,
        format: OutputFormat,
    ) -> Result<()> {
        let season = season.unwrap_or_else(seasons::current_season);
        progress(format, &format!("Fetching data for the {} season...\n", season));

        let first_name = match first {
            Some(name) => name,
            None => prompt("Enter the first team name: ")?,
        };
        let second_name = match second {
            Some(name) => name,
            None => prompt("Enter the second team name: ")?,
        };
        let declared_home = match home {
            Some(name) => name,
            None => prompt(&format!(
                "Who has home court advantage? ({}/{}): ",
                first_name, second_name
            ))?,
        };

        let resolved = teams::resolve_team(&first_name)
            .and_then(|a| Ok((a, teams::resolve_team(&second_name)?)));
        let (first_team, second_team) = match resolved {
            Ok(pair) => pair,
            Err(e) => {
                eprintln!("One or both teams not found. Please check the spelling and try again.");
                return Err(e);
            }
        };

        progress(format, "Fetching data for both teams...\n");
        let client = NbaStatsClient::new(&config.provider)?;
        let first_report = fetch_profile(&client, &first_team, &season);
        let second_report = fetch_profile(&client, &second_team, &season);

        let input = MatchupInput::from_declaration(
            first_report.profile.clone(),
            second_report.profile.clone(),
            &declared_home,
        );
        let verdict = input.score();

        let output = render_prediction(
            format,
            &season,
            [&first_report, &second_report],
            &input,
            &verdict,
        )?;
        print!("{}", output);

        Ok(())
    }
}
