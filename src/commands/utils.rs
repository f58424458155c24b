use crate::aggregator::format_handicap;
use crate::output::read_report;
use crate::utils::config::SCHEMA_VERSION;
use anyhow::Result;
use std::path::PathBuf;

/// Validate a report JSON file
pub fn validate_report_file(file_path: PathBuf) -> Result<()> {
    println!("Validating report: {}", file_path.display());

    let report = read_report(&file_path)?;

    if report.version != SCHEMA_VERSION {
        anyhow::bail!(
            "Unsupported report version {} (expected {})",
            report.version,
            SCHEMA_VERSION
        );
    }

    println!("✓ Valid report JSON");
    println!("  Version: {}", report.version);
    println!("  User: {}", report.user_id);
    println!("  Generated: {}", report.generated_at);
    println!("  Rounds: {}", report.rounds.stats.total_rounds);
    println!("  Handicap: {}", format_handicap(report.handicap.handicap));
    println!("  Scramble clubs: {}", report.dispersion.scramble.clubs.len());

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Trackd Stats Report Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string            - Schema version (e.g., '1.0.0')");
        println!("  userId: string             - Player the report belongs to");
        println!("  generatedAt: string        - RFC 3339 reference time");
        println!("  filters: object            - Range, course, club and shot filters used");
        println!("  rounds.stats: object       - totalRounds, bestScore, avgScore, avgOverPar,");
        println!("                               avgPutts, firPercent, girPercent, scramblePercent,");
        println!("                               courses (null = no data)");
        println!("  rounds.series: object      - metric -> [{{label, value}}] by month");
        println!("  dispersion.teeShots: object  - total, fwHit, left, right, short (%)");
        println!("  dispersion.approach: object  - total, onGreen, long, left, right, short (%)");
        println!("  dispersion.scramble: object  - total, clubs[{{club, attempts, successes, successRate}}]");
        println!("  dispersion.teeClubs: array   - Tee clubs in bag order");
        println!("  dispersion.approachClubs: array - Approach clubs in bag order");
        println!("  handicap: object           - handicap (null below 3 rounds), roundsUsed, roundsAvailable");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Trackd Stats v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Round statistics, shot dispersion and handicap scoring for Trackd.");
}
