//! Shared helpers for rivercross benchmark suites.

use rivercross_kernel::carrier::state::{Bank, RiverState};
use rivercross_search::policy::{AStarOrder, GreedyHeuristic, SearchPolicy};
use rivercross_search::result::SearchResult;

/// A named policy variant.
pub struct PolicyCase {
    pub name: &'static str,
    pub policy: SearchPolicy,
}

/// Every combination of greedy heuristic and A* ordering.
#[must_use]
pub fn policy_cases() -> Vec<PolicyCase> {
    let mut cases = Vec::new();
    for greedy_heuristic in GreedyHeuristic::ALL {
        for astar_order in AStarOrder::ALL {
            cases.push(PolicyCase {
                name: match (greedy_heuristic, astar_order) {
                    (GreedyHeuristic::BankOccupancy, AStarOrder::AscendingF) => "default",
                    (GreedyHeuristic::BankOccupancy, AStarOrder::DescendingF) => "descending",
                    (GreedyHeuristic::LeftBankOccupancy, AStarOrder::AscendingF) => "left_bank",
                    (GreedyHeuristic::LeftBankOccupancy, AStarOrder::DescendingF) => {
                        "left_bank_descending"
                    }
                },
                policy: SearchPolicy {
                    greedy_heuristic,
                    astar_order,
                    ..SearchPolicy::default()
                },
            });
        }
    }
    cases
}

/// Start states worth timing: the standard puzzle, a mid-puzzle state, and
/// an unsolvable one.
#[must_use]
pub fn start_cases() -> [(&'static str, RiverState); 3] {
    [
        ("standard", RiverState::INITIAL),
        ("midway", RiverState::new(1, 1, Bank::Right)),
        ("unsolvable", RiverState::new(3, 3, Bank::Right)),
    ]
}

/// Bytes of the result's JSON view through plain `serde_json`, as a
/// baseline for the canonical encoder.
///
/// # Panics
///
/// Panics if serialization fails. Benchmark setup failures are fatal.
#[must_use]
pub fn plain_json_bytes(result: &SearchResult) -> Vec<u8> {
    serde_json::to_vec(&result.to_json_value()).expect("serialization")
}
