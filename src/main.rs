//! Trackd Stats CLI
//!
//! Computes round statistics, shot dispersion and the Trackd Handicap from
//! a player's recorded rounds, and writes them as a JSON report.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use trackd_stats::commands::{
    display_schema, display_version, execute_report, validate_report_file, ReportArgs,
};
use trackd_stats::utils::config::{load_settings, Settings};

/// Trackd Stats - golf round analytics
#[derive(Parser, Debug)]
#[command(name = "trackd-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute a stats report for one player
    Report {
        /// Settings file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Player id
        #[arg(short, long)]
        user: Option<String>,

        /// JSON snapshot of rounds and holes
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Backend base URL
        #[arg(long)]
        url: Option<String>,

        /// Backend API key
        #[arg(long, env = "TRACKD_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Time range: 3m, 6m, 12m or all
        #[arg(short, long)]
        range: Option<String>,

        /// Course name, or "all"
        #[arg(long)]
        course: Option<String>,

        /// Tee club for the dispersion split, or "all"
        #[arg(long)]
        tee_club: Option<String>,

        /// Approach club for the dispersion split, or "all"
        #[arg(long)]
        approach_club: Option<String>,

        /// Scramble shot type: pitch, chip, bunker or all
        #[arg(long)]
        shot_type: Option<String>,

        /// Reference time for the range cutoff (RFC 3339, defaults to now)
        #[arg(long)]
        now: Option<String>,

        /// Output path for JSON report
        #[arg(short, long, default_value = "report.json")]
        output: PathBuf,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,
    },

    /// Validate a report JSON file
    Validate {
        /// Path to report JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            config,
            user,
            snapshot,
            url,
            api_key,
            range,
            course,
            tee_club,
            approach_club,
            shot_type,
            now,
            output,
            summary,
        } => {
            let settings = match config {
                Some(path) => load_settings(&path)
                    .with_context(|| format!("Failed to load settings from {}", path.display()))?,
                None => Settings::default(),
            };

            let mut args = ReportArgs::from_settings(&settings);

            if let Some(user) = user {
                args.user_id = user;
            }
            // a source on the command line replaces whichever one the settings named
            if snapshot.is_some() || url.is_some() {
                args.snapshot = snapshot;
                args.url = url;
            }
            if api_key.is_some() {
                args.api_key = api_key;
            }
            if let Some(range) = range {
                args.time_range = range;
            }
            if let Some(course) = course {
                args.course = course;
            }
            if let Some(club) = tee_club {
                args.tee_club = club;
            }
            if let Some(club) = approach_club {
                args.approach_club = club;
            }
            if let Some(shot_type) = shot_type {
                args.shot_type = shot_type;
            }
            if let Some(now) = now {
                let parsed = DateTime::parse_from_rfc3339(&now)
                    .with_context(|| format!("Invalid --now timestamp: {}", now))?;
                args.now = Some(parsed.with_timezone(&Utc));
            }
            args.output_json = Some(output);
            args.print_summary = summary;

            execute_report(args)?;
        }

        Commands::Validate { file } => {
            validate_report_file(file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
