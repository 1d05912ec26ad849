//! Comparison report: canonical JSON, digest, and file persistence.
//!
//! # File layout
//!
//! ```text
//! {
//!   "digest":  "sha256:...",         digest of "report" (canonical bytes)
//!   "report":  { ... },              deterministic part
//!   "timings": { ... }               observational, not covered by the digest
//! }
//! ```
//!
//! The whole file is written as canonical JSON. Reading a report back
//! recomputes the digest and fails if it does not match.

use std::path::Path;

use rivercross_kernel::proof::canon::{canonical_json_bytes, CanonError};
use rivercross_kernel::proof::hash::{canonical_hash, ContentHash};
use rivercross_kernel::proof::hash_domain::HashDomain;
use rivercross_search::result::SearchResult;
use serde_json::{json, Value};

use crate::runner::ComparisonRun;

/// Identifies the report layout.
pub const REPORT_SCHEMA_VERSION: &str = "rivercross.comparison.v1";

/// Error building, writing or reading a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    /// Canonical JSON serialization failed.
    Canon { detail: String },
    /// I/O error on the report file.
    Io { detail: String },
    /// The file is not valid JSON.
    Parse { detail: String },
    /// A required top-level field is missing or has the wrong type.
    MissingField { field: &'static str },
    /// `schema_version` is not recognized.
    VersionMismatch { found: String },
    /// Stored digest does not match the recomputed one.
    DigestMismatch { stored: String, recomputed: String },
}

impl std::fmt::Display for ReportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Canon { detail } => write!(f, "canonical JSON error: {detail}"),
            Self::Io { detail } => write!(f, "I/O error: {detail}"),
            Self::Parse { detail } => write!(f, "report is not valid JSON: {detail}"),
            Self::MissingField { field } => write!(f, "report is missing field {field:?}"),
            Self::VersionMismatch { found } => {
                write!(f, "unsupported report schema version: {found}")
            }
            Self::DigestMismatch { stored, recomputed } => {
                write!(f, "digest mismatch: stored {stored}, recomputed {recomputed}")
            }
        }
    }
}

impl std::error::Error for ReportError {}

impl From<CanonError> for ReportError {
    fn from(e: CanonError) -> Self {
        Self::Canon {
            detail: e.to_string(),
        }
    }
}

/// The deterministic part of the report.
///
/// # Errors
///
/// Returns [`CanonError`] if a per-strategy tree digest cannot be computed.
pub fn report_value(run: &ComparisonRun) -> Result<Value, CanonError> {
    let results = run
        .results
        .iter()
        .map(result_to_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(json!({
        "initial": run.initial.to_string(),
        "policy": {
            "astar_order": run.policy.astar_order.name(),
            "greedy_heuristic": run.policy.greedy_heuristic.name(),
            "invalid_state_penalty": run.policy.invalid_state_penalty,
        },
        "results": results,
        "schema_version": REPORT_SCHEMA_VERSION,
    }))
}

fn result_to_json(result: &SearchResult) -> Result<Value, CanonError> {
    Ok(json!({
        "move_count": result.move_count(),
        "moves": result
            .path_nodes()
            .filter_map(|n| n.mv().map(|mv| mv.short_label()))
            .collect::<Vec<_>>(),
        "stats": {
            "closed": result.stats.closed,
            "explored": result.stats.explored,
            "frontier_high_water": result.stats.frontier_high_water,
            "generated": result.stats.generated,
            "open": result.stats.open,
        },
        "strategy": result.strategy.name(),
        "termination": result.termination.tag(),
        "tree_digest": result.digest()?.as_str(),
    }))
}

fn timings_value(run: &ComparisonRun) -> Value {
    let per_strategy: serde_json::Map<String, Value> = run
        .results
        .iter()
        .map(|r| {
            (
                r.strategy.name().to_string(),
                json!({ "elapsed_ms": r.elapsed_millis(), "elapsed_ns": r.elapsed_nanos() }),
            )
        })
        .collect();
    json!({
        "strategies": per_strategy,
        "wall_time_ns": u64::try_from(run.wall_time.as_nanos()).unwrap_or(u64::MAX),
    })
}

/// Digest of the deterministic part under [`HashDomain::ComparisonReport`].
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn report_digest(run: &ComparisonRun) -> Result<ContentHash, CanonError> {
    digest_of(&report_value(run)?)
}

fn digest_of(report: &Value) -> Result<ContentHash, CanonError> {
    let bytes = canonical_json_bytes(report)?;
    Ok(canonical_hash(HashDomain::ComparisonReport, &bytes))
}

/// Canonical bytes of the full report file, plus its digest.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn report_bytes(run: &ComparisonRun) -> Result<(Vec<u8>, ContentHash), CanonError> {
    let report = report_value(run)?;
    let digest = digest_of(&report)?;
    let envelope = json!({
        "digest": digest.as_str(),
        "report": report,
        "timings": timings_value(run),
    });
    Ok((canonical_json_bytes(&envelope)?, digest))
}

/// Write the report to `path`, returning its digest.
///
/// # Errors
///
/// Returns [`ReportError::Canon`] or [`ReportError::Io`].
pub fn write_report(run: &ComparisonRun, path: &Path) -> Result<ContentHash, ReportError> {
    let (bytes, digest) = report_bytes(run)?;
    std::fs::write(path, bytes).map_err(|e| ReportError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    log::info!("wrote report {} ({digest})", path.display());
    Ok(digest)
}

/// Read a report file, verify its digest, and return the deterministic part.
///
/// # Errors
///
/// Returns a [`ReportError`] if the file cannot be read or parsed, a field
/// is missing, the schema version is unknown, or the digest does not match.
pub fn read_report(path: &Path) -> Result<(Value, ContentHash), ReportError> {
    let bytes = std::fs::read(path).map_err(|e| ReportError::Io {
        detail: format!("{}: {e}", path.display()),
    })?;
    let envelope: Value = serde_json::from_slice(&bytes).map_err(|e| ReportError::Parse {
        detail: e.to_string(),
    })?;

    let stored = envelope
        .get("digest")
        .and_then(Value::as_str)
        .ok_or(ReportError::MissingField { field: "digest" })?;
    let report = envelope
        .get("report")
        .ok_or(ReportError::MissingField { field: "report" })?;
    let version = report
        .get("schema_version")
        .and_then(Value::as_str)
        .ok_or(ReportError::MissingField {
            field: "schema_version",
        })?;
    if version != REPORT_SCHEMA_VERSION {
        return Err(ReportError::VersionMismatch {
            found: version.to_string(),
        });
    }

    let recomputed = digest_of(report)?;
    if recomputed.as_str() != stored {
        return Err(ReportError::DigestMismatch {
            stored: stored.to_string(),
            recomputed: recomputed.as_str().to_string(),
        });
    }
    Ok((report.clone(), recomputed))
}
