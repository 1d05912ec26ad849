//! Starts with no reachable goal: every strategy reports exhaustion with an
//! empty path and a single-node tree.

use rivercross_kernel::carrier::state::{Bank, RiverState};
use rivercross_search::policy::SearchPolicy;
use rivercross_search::result::Termination;
use rivercross_search::search::search;
use rivercross_search::strategy::StrategyKind;

fn starts() -> [RiverState; 3] {
    [
        // Cannibals outnumber the lone missionary on the left.
        RiverState::new(1, 3, Bank::Left),
        // Everyone on the left, boat on the right.
        RiverState::new(3, 3, Bank::Right),
        // More people than the puzzle has.
        RiverState::new(5, 5, Bank::Left),
    ]
}

#[test]
fn degenerate_starts_exhaust_immediately() {
    for start in starts() {
        for kind in StrategyKind::ALL {
            let r = search(kind, start, &SearchPolicy::default()).unwrap();
            assert_eq!(r.termination, Termination::FrontierExhausted, "{kind} from {start}");
            assert!(r.path.is_empty(), "{kind} from {start}");
            assert_eq!(r.move_count(), 0);
            assert_eq!(r.tree.len(), 1, "{kind} from {start}");
            assert_eq!(*r.root().state(), start);
            assert!(r.goal().is_none());
        }
    }
}

#[test]
fn goal_start_is_a_zero_move_solution() {
    for kind in StrategyKind::ALL {
        let r = search(kind, RiverState::GOAL, &SearchPolicy::default()).unwrap();
        assert!(r.is_goal_reached(), "{kind}: {:?}", r.termination);
        assert_eq!(r.path.len(), 1, "{kind}");
        assert_eq!(r.move_count(), 0, "{kind}");
    }
}
