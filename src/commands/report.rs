//! Report command implementation.
//!
//! The report command:
//! 1. Reads the player's rounds and holes from the chosen source
//! 2. Runs the round aggregator, dispersion analyzer and handicap engine
//! 3. Writes the JSON report and/or prints a summary

use super::models::ReportArgs;
use crate::aggregator::filters::parse_shot_type_filter;
use crate::aggregator::{DispersionQuery, RoundQuery, TimeRange};
use crate::engine::{load_report, ReportRequest};
use crate::model::StatsReport;
use crate::output::{render_summary, write_report};
use crate::source::{FileSource, RestSource, RoundSource};
use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::{debug, info};
use std::time::Instant;

/// Execute the report command
///
/// # Errors
/// * Invalid arguments
/// * Data source failures
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<StatsReport> {
    let start_time = Instant::now();

    validate_args(&args)?;
    let request = build_request(&args)?;
    let now = args.now.unwrap_or_else(Utc::now);

    info!("Building report for user: {}", args.user_id);
    debug!("Report request: {:?}", request);

    let source = open_source(&args)?;
    let report = load_report(source.as_ref(), &args.user_id, &request, now)
        .context("Failed to load rounds")?;

    info!(
        "Aggregated {} rounds, handicap from {} of {} differentials",
        report.rounds.stats.total_rounds,
        report.handicap.rounds_used,
        report.handicap.rounds_available
    );

    if let Some(path) = &args.output_json {
        write_report(&report, path).context("Failed to write report JSON")?;
        info!("✓ Report written to: {}", path.display());
    }

    if args.print_summary {
        println!("\n{}", "=".repeat(80));
        println!("{}", render_summary(&report));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(report)
}

/// Pick the data source named by the arguments
fn open_source(args: &ReportArgs) -> Result<Box<dyn RoundSource>> {
    if let Some(path) = &args.snapshot {
        return Ok(Box::new(FileSource::new(path)));
    }

    let url = args
        .url
        .as_deref()
        .ok_or_else(|| anyhow!("No data source configured"))?;
    let api_key = args.api_key.as_deref().unwrap_or_default();
    let source = RestSource::new(url, api_key).context("Failed to create REST client")?;

    Ok(Box::new(source))
}

/// Parse the filter strings into engine queries
pub fn build_request(args: &ReportArgs) -> Result<ReportRequest> {
    let time_range: TimeRange = args.time_range.parse().map_err(|e: String| anyhow!(e))?;
    let shot_type = parse_shot_type_filter(&args.shot_type).map_err(|e| anyhow!(e))?;

    // club and course names parse infallibly
    let rounds = RoundQuery {
        time_range,
        course: args.course.parse()?,
    };
    let dispersion = DispersionQuery {
        tee_club: args.tee_club.parse()?,
        approach_club: args.approach_club.parse()?,
        shot_type,
    };

    Ok(ReportRequest {
        rounds,
        dispersion,
        bag_order: args.bag_order.clone(),
    })
}

/// Validate report arguments
///
/// Can be called before `execute_report` for early validation.
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    if args.user_id.trim().is_empty() {
        anyhow::bail!("User id cannot be empty");
    }

    match (&args.snapshot, &args.url) {
        (None, None) => anyhow::bail!("Either a snapshot file or a backend URL is required"),
        (Some(_), Some(_)) => anyhow::bail!("Use either a snapshot file or a backend URL, not both"),
        (None, Some(url)) => {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                anyhow::bail!("Backend URL must start with http:// or https://");
            }
            if args.api_key.as_deref().map_or(true, str::is_empty) {
                anyhow::bail!("An API key is required for the backend URL");
            }
        }
        (Some(_), None) => {}
    }

    build_request(args).map(|_| ())
}
