use chrono::{TimeZone, Utc};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;
use trackd_stats::commands::{execute_report, validate_args, ReportArgs};

fn snapshot_args() -> ReportArgs {
    ReportArgs {
        user_id: "u1".to_string(),
        snapshot: Some(PathBuf::from("rounds.json")),
        ..Default::default()
    }
}

#[test]
fn test_validate_args_valid() {
    assert!(validate_args(&snapshot_args()).is_ok());
}

#[test]
fn test_validate_args_empty_user() {
    let args = ReportArgs {
        user_id: "  ".to_string(),
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_no_source() {
    let args = ReportArgs {
        snapshot: None,
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_both_sources() {
    let args = ReportArgs {
        url: Some("https://db.example.com".to_string()),
        api_key: Some("key".to_string()),
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_invalid_url_scheme() {
    let args = ReportArgs {
        snapshot: None,
        url: Some("ftp://db.example.com".to_string()),
        api_key: Some("key".to_string()),
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_url_needs_key() {
    let args = ReportArgs {
        snapshot: None,
        url: Some("https://db.example.com".to_string()),
        api_key: None,
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_bad_range() {
    let args = ReportArgs {
        time_range: "fortnight".to_string(),
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_validate_args_bad_shot_type() {
    let args = ReportArgs {
        shot_type: "flop".to_string(),
        ..snapshot_args()
    };

    assert!(validate_args(&args).is_err());
}

#[test]
fn test_execute_report_end_to_end() {
    let mut snapshot = NamedTempFile::new().unwrap();
    write!(
        snapshot,
        r#"{{
          "rounds": [
            {{ "id": "r1", "course_name": "Links", "total_score": 5, "played_at": "2024-05-04T10:00:00Z", "user_id": "u1" }}
          ],
          "holes": [
            {{ "round_id": "r1", "hole_number": 1, "par": 4, "score": 5, "fir": true, "fir_direction": "hit",
               "gir": false, "gir_direction": "left", "scramble": "no", "putts": 2,
               "tee_club": "Driver", "approach_club": "8i", "scramble_club": "SW", "scramble_shot_type": "chip" }}
          ]
        }}"#
    )
    .unwrap();

    let out_dir = tempfile::tempdir().unwrap();
    let output = out_dir.path().join("report.json");

    let args = ReportArgs {
        snapshot: Some(snapshot.path().to_path_buf()),
        time_range: "3m".to_string(),
        now: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        output_json: Some(output.clone()),
        ..snapshot_args()
    };

    let report = execute_report(args).unwrap();

    assert!(output.exists());
    assert_eq!(report.generated_at, "2024-06-01T00:00:00Z");
    assert_eq!(report.rounds.stats.total_rounds, 1);
    assert_eq!(report.rounds.stats.avg_over_par, Some(18.0));
    assert_eq!(report.rounds.stats.fir_percent, Some(100));
    assert_eq!(report.rounds.stats.scramble_percent, Some(0));
    assert_eq!(report.dispersion.approach.left, 100);
    assert_eq!(report.dispersion.scramble.clubs[0].club, "SW");
    assert_eq!(report.handicap.handicap, None);
    assert_eq!(report.handicap.rounds_available, 1);
}

#[test]
fn test_execute_report_missing_snapshot() {
    let args = ReportArgs {
        snapshot: Some(PathBuf::from("/no/such/snapshot.json")),
        output_json: None,
        ..snapshot_args()
    };

    assert!(execute_report(args).is_err());
}
