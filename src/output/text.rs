//! Terminal summary of a stats report.

use crate::aggregator::format_handicap;
use crate::model::{Metric, StatsReport};

const RULE_WIDTH: usize = 48;

fn heading(lines: &mut Vec<String>, title: &str) {
    lines.push(String::new());
    lines.push(format!("  {}", title));
    lines.push(format!("  ┏{}┓", "━".repeat(RULE_WIDTH)));
}

fn row(lines: &mut Vec<String>, label: &str, value: &str) {
    lines.push(format!("  ┃ {:<28} {:>17} ┃", label, value));
}

fn close(lines: &mut Vec<String>) {
    lines.push(format!("  ┗{}┛", "━".repeat(RULE_WIDTH)));
}

fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

fn tenth(value: Option<f64>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}", v))
}

fn pct(value: Option<u32>) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{}%", v))
}

fn signed(value: Option<f64>) -> String {
    match value {
        Some(v) if v > 0.0 => format!("+{:.1}", v),
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

/// Render the report as boxed tables
pub fn render_summary(report: &StatsReport) -> String {
    let mut lines = Vec::new();
    let stats = &report.rounds.stats;

    lines.push(format!(
        "  Trackd stats for {} ({} / course: {})",
        report.user_id, report.filters.time_range, report.filters.course
    ));

    heading(&mut lines, "ROUNDS");
    row(&mut lines, "Rounds", &stats.total_rounds.to_string());
    row(&mut lines, "Best score", &or_dash(stats.best_score));
    row(&mut lines, "Average score", &tenth(stats.avg_score));
    row(&mut lines, "Average vs par (per 18)", &signed(stats.avg_over_par));
    row(&mut lines, "Putts per hole", &tenth(stats.avg_putts));
    row(&mut lines, "Fairways hit", &pct(stats.fir_percent));
    row(&mut lines, "Greens in regulation", &pct(stats.gir_percent));
    row(&mut lines, "Scrambling", &pct(stats.scramble_percent));
    close(&mut lines);

    heading(&mut lines, "HANDICAP");
    row(&mut lines, "Trackd Handicap", &format_handicap(report.handicap.handicap));
    row(
        &mut lines,
        "Rounds used",
        &format!(
            "{} of {}",
            report.handicap.rounds_used, report.handicap.rounds_available
        ),
    );
    close(&mut lines);

    let series = &report.rounds.series;
    if !series.is_empty() {
        heading(&mut lines, "MONTHLY TREND");
        for metric in Metric::ALL {
            let points = series.get(metric);
            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                row(
                    &mut lines,
                    metric.label(),
                    &format!("{} {} → {} {}", first.label, first.value, last.label, last.value),
                );
            }
        }
        close(&mut lines);
    }

    let tee = &report.dispersion.tee_shots;
    heading(
        &mut lines,
        &format!("TEE SHOTS ({}, {} shots)", report.filters.tee_club, tee.total),
    );
    row(&mut lines, "Fairway", &format!("{}%", tee.fw_hit));
    row(&mut lines, "Left", &format!("{}%", tee.left));
    row(&mut lines, "Right", &format!("{}%", tee.right));
    row(&mut lines, "Short", &format!("{}%", tee.short));
    close(&mut lines);

    let approach = &report.dispersion.approach;
    heading(
        &mut lines,
        &format!(
            "APPROACH ({}, {} shots)",
            report.filters.approach_club, approach.total
        ),
    );
    row(&mut lines, "On green", &format!("{}%", approach.on_green));
    row(&mut lines, "Long", &format!("{}%", approach.long));
    row(&mut lines, "Left", &format!("{}%", approach.left));
    row(&mut lines, "Right", &format!("{}%", approach.right));
    row(&mut lines, "Short", &format!("{}%", approach.short));
    close(&mut lines);

    let scramble = &report.dispersion.scramble;
    heading(
        &mut lines,
        &format!(
            "SCRAMBLE BY CLUB ({}, {} attempts)",
            report.filters.shot_type, scramble.total
        ),
    );
    if scramble.clubs.is_empty() {
        row(&mut lines, "No scramble attempts", "");
    }
    for club in &scramble.clubs {
        row(
            &mut lines,
            &club.club,
            &format!("{}/{} ({}%)", club.successes, club.attempts, club.success_rate),
        );
    }
    close(&mut lines);

    lines.join("\n")
}
