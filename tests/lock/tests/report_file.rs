//! Report files: write, read back, and reject tampering.

use rivercross_harness::report::{read_report, write_report, ReportError, REPORT_SCHEMA_VERSION};
use rivercross_harness::runner::{run_comparison, RunConfig};
use rivercross_search::strategy::StrategyKind;
use serde_json::Value;

fn write_default(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("comparison.json");
    write_report(&run_comparison(&RunConfig::default()).unwrap(), &path).unwrap();
    path
}

fn edit(path: &std::path::Path, f: impl FnOnce(&mut Value)) {
    let mut envelope: Value = serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap();
    f(&mut envelope);
    std::fs::write(path, serde_json::to_vec(&envelope).unwrap()).unwrap();
}

#[test]
fn report_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default(&dir);
    let (report, digest) = read_report(&path).unwrap();
    assert_eq!(digest.algorithm(), "sha256");
    assert_eq!(report["schema_version"], REPORT_SCHEMA_VERSION);
    assert_eq!(report["initial"], "(3,3,L)");
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), StrategyKind::ALL.len());
    for r in results {
        assert_eq!(r["move_count"], 11);
        assert_eq!(r["termination"], "goal_reached");
    }
}

#[test]
fn timings_are_outside_the_digest() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default(&dir);
    let (_, before) = read_report(&path).unwrap();
    edit(&path, |env| env["timings"]["wall_time_ns"] = Value::from(1));
    let (_, after) = read_report(&path).unwrap();
    assert_eq!(before, after);
}

#[test]
fn edited_results_fail_verification() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default(&dir);
    edit(&path, |env| env["report"]["results"][1]["strategy"] = Value::from("bfs"));
    let err = read_report(&path).unwrap_err();
    assert!(matches!(err, ReportError::DigestMismatch { .. }), "{err}");
}

#[test]
fn unknown_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default(&dir);
    edit(&path, |env| env["report"]["schema_version"] = Value::from("rivercross.comparison.v0"));
    let err = read_report(&path).unwrap_err();
    assert_eq!(
        err,
        ReportError::VersionMismatch {
            found: "rivercross.comparison.v0".into()
        }
    );
}

#[test]
fn missing_digest_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_default(&dir);
    edit(&path, |env| {
        env.as_object_mut().unwrap().remove("digest");
    });
    assert_eq!(
        read_report(&path).unwrap_err(),
        ReportError::MissingField { field: "digest" }
    );
}
