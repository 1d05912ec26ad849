//! In-process determinism: repeated runs and concurrent runs produce the
//! same trees, byte for byte.

use lock_tests::canonical_runs::canonical_run;
use rivercross_harness::report::report_digest;
use rivercross_harness::runner::{run_comparison, RunConfig};
use rivercross_search::strategy::StrategyKind;

#[test]
fn repeated_runs_produce_identical_bytes_n10() {
    for kind in StrategyKind::ALL {
        let first = canonical_run(kind).to_canonical_json_bytes().unwrap();
        for _ in 1..10 {
            let again = canonical_run(kind).to_canonical_json_bytes().unwrap();
            assert_eq!(first, again, "{kind} produced different bytes");
        }
    }
}

#[test]
fn concurrent_and_sequential_reports_share_a_digest() {
    let concurrent = run_comparison(&RunConfig::default()).unwrap();
    let sequential = run_comparison(&RunConfig {
        concurrent: false,
        ..RunConfig::default()
    })
    .unwrap();
    assert_eq!(
        report_digest(&concurrent).unwrap(),
        report_digest(&sequential).unwrap()
    );
}

#[test]
fn concurrent_results_match_standalone_runs() {
    for _ in 0..5 {
        let run = run_comparison(&RunConfig::default()).unwrap();
        for result in &run.results {
            let alone = canonical_run(result.strategy);
            assert_eq!(result.tree, alone.tree, "{}", result.strategy);
            assert_eq!(result.path, alone.path, "{}", result.strategy);
            assert_eq!(result.digest().unwrap(), alone.digest().unwrap());
        }
    }
}

#[test]
fn tree_digests_differ_between_strategies() {
    let digests: std::collections::BTreeSet<String> = StrategyKind::ALL
        .into_iter()
        .map(|k| canonical_run(k).digest().unwrap().as_str().to_string())
        .collect();
    assert_eq!(digests.len(), StrategyKind::ALL.len());
}

#[test]
fn canonical_tree_json_has_sorted_keys_and_no_timing() {
    let bytes = canonical_run(StrategyKind::BreadthFirst)
        .to_canonical_json_bytes()
        .unwrap();
    let text = String::from_utf8(bytes).unwrap();
    assert!(text.starts_with("{\"initial\":"));
    assert!(!text.contains("elapsed"));
    assert!(!text.contains(' '));
}
