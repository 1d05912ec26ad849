//! Node counts and frontier statistics for the standard start.
//!
//! These lock the exact exploration order of each strategy: a change in
//! move generation order, tie-breaking, or duplicate handling shows up
//! here first.

use lock_tests::canonical_runs::{canonical_run, path_labels, SOLUTION};
use rivercross_kernel::carrier::state::RiverState;
use rivercross_search::contract::{AbortAfter, LevelReport};
use rivercross_search::policy::{AStarOrder, GreedyHeuristic, SearchPolicy};
use rivercross_search::result::Termination;
use rivercross_search::search::search;
use rivercross_search::strategy::bfs::{self, BfsSearch, BfsStep};
use rivercross_search::strategy::StrategyKind;

#[test]
fn bfs_counts() {
    let r = canonical_run(StrategyKind::BreadthFirst);
    assert_eq!(r.tree.len(), 15);
    assert_eq!(r.stats.explored, 15);
    assert_eq!(r.stats.open, 1);
    assert_eq!(r.stats.frontier_high_water, 3);
}

#[test]
fn bfs_level_reports() {
    let mut stepper = BfsSearch::new(RiverState::INITIAL);
    let mut levels = Vec::new();
    let termination = loop {
        match stepper.step() {
            BfsStep::Level(report) => levels.push(report),
            BfsStep::Done(t) => break t,
        }
    };
    assert!(matches!(termination, Termination::GoalReached { .. }));

    let expected: Vec<LevelReport> = [
        (1, 3, 4),
        (2, 1, 5),
        (3, 1, 6),
        (4, 1, 7),
        (5, 1, 8),
        (6, 1, 9),
        (7, 1, 10),
        (8, 1, 11),
        (9, 1, 12),
        (10, 2, 14),
        (11, 1, 15),
    ]
    .into_iter()
    .map(|(depth, frontier_len, seen)| LevelReport {
        depth,
        frontier_len,
        visited: seen,
        generated: seen,
    })
    .collect();
    assert_eq!(levels, expected);
}

#[test]
fn bfs_abort_keeps_partial_tree() {
    let r = bfs::run_with_gate(RiverState::INITIAL, &mut AbortAfter(3));
    assert_eq!(r.termination, Termination::Aborted { depth: 3 });
    assert!(r.path.is_empty());
    assert_eq!(r.tree.len(), 6);
    assert_eq!(r.stats.explored, 6);
    assert_eq!(r.stats.open, 1);
}

#[test]
fn dfs_counts() {
    let r = canonical_run(StrategyKind::DepthFirst);
    assert_eq!(r.tree.len(), 33);
    assert_eq!(r.stats.explored, 13);
    assert_eq!(r.stats.open, 0);
}

#[test]
fn greedy_counts_per_heuristic() {
    let r = canonical_run(StrategyKind::Greedy);
    assert_eq!(r.tree.len(), 47);
    assert_eq!(r.stats.explored, 13);

    let policy = SearchPolicy {
        greedy_heuristic: GreedyHeuristic::LeftBankOccupancy,
        ..SearchPolicy::default()
    };
    let r = search(StrategyKind::Greedy, RiverState::INITIAL, &policy).unwrap();
    assert_eq!(r.tree.len(), 43);
    assert_eq!(r.stats.explored, 11);
    assert_eq!(path_labels(&r), SOLUTION);
}

#[test]
fn astar_counts_per_order() {
    let r = canonical_run(StrategyKind::AStar);
    assert_eq!(r.tree.len(), 52);
    assert_eq!(r.stats.closed, 15);
    assert_eq!(r.stats.open, 1);
    assert_eq!(r.stats.frontier_high_water, 3);

    let policy = SearchPolicy {
        astar_order: AStarOrder::DescendingF,
        ..SearchPolicy::default()
    };
    let r = search(StrategyKind::AStar, RiverState::INITIAL, &policy).unwrap();
    assert_eq!(r.tree.len(), 46);
    assert_eq!(r.stats.closed, 13);
    assert_eq!(r.stats.open, 3);
    assert_eq!(r.stats.frontier_high_water, 4);
    assert_eq!(path_labels(&r), SOLUTION);
}

#[test]
fn every_tree_keeps_its_unsafe_leaves_unexpanded() {
    for kind in [StrategyKind::DepthFirst, StrategyKind::Greedy, StrategyKind::AStar] {
        let r = canonical_run(kind);
        let unsafe_nodes: Vec<_> = r.tree.iter().filter(|n| !n.state().is_valid()).collect();
        assert!(!unsafe_nodes.is_empty(), "{kind}");
        assert!(unsafe_nodes.iter().all(|n| n.children().is_empty()), "{kind}");
    }
    let bfs = canonical_run(StrategyKind::BreadthFirst);
    assert!(bfs.tree.iter().all(|n| n.state().is_valid()));
}
