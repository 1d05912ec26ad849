//! Every strategy reaches the goal from the standard start, and each
//! reported path replays as a chain of legal moves.

use std::collections::{BTreeMap, VecDeque};

use lock_tests::canonical_runs::{canonical_run, path_labels, SOLUTION};
use rivercross_kernel::carrier::load::Load;
use rivercross_kernel::carrier::state::{Bank, PARTY_SIZE};
use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::{apply, infer_move};
use rivercross_search::node::NodeId;
use rivercross_search::result::Termination;
use rivercross_search::strategy::StrategyKind;

#[test]
fn every_strategy_finds_the_eleven_move_solution() {
    for kind in StrategyKind::ALL {
        let result = canonical_run(kind);
        assert!(result.is_goal_reached(), "{kind}: {:?}", result.termination);
        assert_eq!(result.move_count(), 11, "{kind}");
        assert_eq!(path_labels(&result), SOLUTION, "{kind}");
    }
}

#[test]
fn paths_run_from_root_to_goal() {
    for kind in StrategyKind::ALL {
        let result = canonical_run(kind);
        assert_eq!(result.path.first(), Some(&NodeId::ROOT), "{kind}");
        let Termination::GoalReached { node } = result.termination else {
            panic!("{kind} did not reach the goal");
        };
        assert_eq!(result.path.last(), Some(&node), "{kind}");
        assert_eq!(result.goal().map(|n| *n.state()), Some(RiverState::GOAL));
    }
}

#[test]
fn paths_replay_through_the_move_generator() {
    for kind in StrategyKind::ALL {
        let result = canonical_run(kind);
        let nodes: Vec<_> = result.path_nodes().collect();
        assert_eq!(*nodes[0].state(), RiverState::INITIAL);

        for pair in nodes.windows(2) {
            let (from, to) = (pair[0], pair[1]);
            assert!(to.state().is_valid(), "{kind}: unsafe state {} on path", to.state());
            assert_eq!(to.parent(), Some(from.id()), "{kind}");
            assert_eq!(to.g(), from.g() + 1, "{kind}");

            let mv = infer_move(from.state(), to.state()).expect("consecutive states are one move apart");
            assert_eq!(to.mv(), Some(mv), "{kind}");
            let replayed = apply(from.state(), mv.load).expect("move is applicable");
            assert_eq!(replayed.state, *to.state(), "{kind}");
        }
    }
}

#[test]
fn boat_alternates_along_every_path() {
    for kind in StrategyKind::ALL {
        let result = canonical_run(kind);
        for pair in result.path_nodes().collect::<Vec<_>>().windows(2) {
            assert_eq!(pair[0].state().boat().opposite(), pair[1].state().boat(), "{kind}");
        }
    }
}

#[test]
fn astar_matches_the_breadth_first_optimum() {
    let bfs = canonical_run(StrategyKind::BreadthFirst);
    let astar = canonical_run(StrategyKind::AStar);
    assert!(StrategyKind::BreadthFirst.is_optimal());
    assert_eq!(astar.move_count(), bfs.move_count());
    assert_eq!(path_labels(&astar), path_labels(&bfs));
}

/// Shortest move count from `start` to every reachable valid state, found by
/// enumerating every (M, C, boat) state and the loads that connect them,
/// without going through the move generator or any strategy.
fn enumerated_distances(start: RiverState) -> BTreeMap<RiverState, usize> {
    let mut states = Vec::new();
    for m in 0..=PARTY_SIZE {
        for c in 0..=PARTY_SIZE {
            for boat in [Bank::Left, Bank::Right] {
                let state = RiverState::new(m, c, boat);
                if state.is_valid() {
                    states.push(state);
                }
            }
        }
    }
    let neighbours = |from: &RiverState| -> Vec<RiverState> {
        states
            .iter()
            .copied()
            .filter(|to| {
                to.boat() == from.boat().opposite()
                    && Load::ALL.iter().any(|load| {
                        let (dm, dc) = (load.missionaries(), load.cannibals());
                        match from.boat() {
                            Bank::Left => {
                                from.missionaries_left().checked_sub(dm) == Some(to.missionaries_left())
                                    && from.cannibals_left().checked_sub(dc) == Some(to.cannibals_left())
                            }
                            Bank::Right => {
                                from.missionaries_left() + dm == to.missionaries_left()
                                    && from.cannibals_left() + dc == to.cannibals_left()
                            }
                        }
                    })
            })
            .collect()
    };

    let mut distances = BTreeMap::from([(start, 0)]);
    let mut queue = VecDeque::from([start]);
    while let Some(state) = queue.pop_front() {
        let next = distances[&state] + 1;
        for to in neighbours(&state) {
            distances.entry(to).or_insert_with(|| {
                queue.push_back(to);
                next
            });
        }
    }
    distances
}

#[test]
fn bfs_cost_matches_exhaustive_enumeration() {
    let distances = enumerated_distances(RiverState::INITIAL);
    let optimum = distances[&RiverState::GOAL];
    assert_eq!(optimum, 11);
    assert_eq!(canonical_run(StrategyKind::BreadthFirst).move_count(), optimum);
    for kind in StrategyKind::ALL {
        assert!(canonical_run(kind).move_count() >= optimum, "{kind}");
    }
}

#[test]
fn bfs_keeps_the_safe_root_moves_and_opens_with_two_cannibals() {
    let result = canonical_run(StrategyKind::BreadthFirst);
    let root_moves: Vec<String> = result
        .tree
        .children(NodeId::ROOT)
        .filter_map(|n| n.mv().map(|mv| mv.short_label()))
        .collect();
    assert_eq!(root_moves, ["1C->", "2C->", "1M1C->"]);
    assert_eq!(path_labels(&result).first().map(String::as_str), Some("2C->"));
}
