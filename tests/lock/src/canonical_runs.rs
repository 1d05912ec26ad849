//! Single source of truth for the canonical runs.
//!
//! Used by both the `search_fixture` binary and the cross-process tests, so
//! the two cannot drift apart on what "the canonical run" means.

use rivercross_harness::report::report_digest;
use rivercross_harness::runner::{run_comparison, RunConfig};
use rivercross_kernel::carrier::state::RiverState;
use rivercross_search::policy::SearchPolicy;
use rivercross_search::result::SearchResult;
use rivercross_search::search::search;
use rivercross_search::strategy::StrategyKind;

/// Short labels of the eleven-move solution every strategy finds from the
/// standard start.
pub const SOLUTION: [&str; 11] = [
    "2C->", "1C<-", "2C->", "1C<-", "2M->", "1M1C<-", "2M->", "1C<-", "2C->", "1M<-", "1M1C->",
];

/// Run `kind` from the standard start with the default policy.
///
/// # Panics
///
/// Panics if the default policy is rejected (indicates a bug in the
/// policy defaults, not a usage error).
#[must_use]
pub fn canonical_run(kind: StrategyKind) -> SearchResult {
    search(kind, RiverState::INITIAL, &SearchPolicy::default()).expect("default policy is valid")
}

/// Short labels of the moves along a result's path.
#[must_use]
pub fn path_labels(result: &SearchResult) -> Vec<String> {
    result
        .path_nodes()
        .filter_map(|n| n.mv().map(|mv| mv.short_label()))
        .collect()
}

/// `key=value` lines describing the canonical runs.
///
/// # Panics
///
/// Panics if a run cannot be digested.
#[must_use]
pub fn fixture_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for kind in StrategyKind::ALL {
        let result = canonical_run(kind);
        let digest = result.digest().expect("tree digest");
        lines.push(format!("{}.tree_digest={}", kind.name(), digest.as_str()));
        lines.push(format!("{}.nodes={}", kind.name(), result.tree.len()));
        lines.push(format!("{}.moves={}", kind.name(), path_labels(&result).join(",")));
        lines.push(format!("{}.termination={}", kind.name(), result.termination.tag()));
    }
    let run = run_comparison(&RunConfig {
        concurrent: false,
        ..RunConfig::default()
    })
    .expect("comparison run");
    let digest = report_digest(&run).expect("report digest");
    lines.push(format!("report_digest={}", digest.as_str()));
    lines
}
