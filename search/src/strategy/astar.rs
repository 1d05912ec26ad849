//! A* search over an open list with a closed set.
//!
//! Node values: `h = 6 - 2*M_left - 2*C_left`, and
//! `f = g + h + penalty`, where the penalty subtracts the policy's
//! `invalid_state_penalty` once per unsafe bank.
//!
//! Loop: pop by priority, close the popped state, stop on a goal. Otherwise
//! attach every generated child, so unsafe children stay visible in the
//! tree, and push the ones that are valid and not closed. Children go in
//! generator order, or by descending `f` under [`AStarOrder::DescendingF`]
//! (stable, so equal `f` keeps generator order). There is no
//! decrease-key; a state can be pushed several times and each copy is
//! expanded when popped.

use std::cmp::Reverse;
use std::time::Instant;

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::{successors, Transition};

use crate::frontier::AStarFrontier;
use crate::heuristic::{safety_penalty, Heuristic, TransferEstimate};
use crate::node::NodeId;
use crate::policy::{AStarOrder, SearchPolicy};
use crate::result::{SearchResult, SearchStats, Termination};
use crate::strategy::StrategyKind;
use crate::tree::SearchTree;

/// Run A* from `initial`.
///
/// An invalid `initial` state is recorded as the root but never pushed.
#[must_use]
pub fn run(initial: RiverState, policy: &SearchPolicy) -> SearchResult {
    let started = Instant::now();
    let heuristic = TransferEstimate;
    let penalty = policy.invalid_state_penalty;

    let h0 = heuristic.estimate(&initial);
    let f0 = h0 + safety_penalty(&initial, penalty);
    let mut tree = SearchTree::with_root(initial, h0, f0);
    let mut open = AStarFrontier::new(policy.astar_order);
    if initial.is_valid() {
        open.push(NodeId::ROOT, initial, f0);
    }

    let mut termination = Termination::FrontierExhausted;
    let mut expansions: u64 = 0;
    while let Some((id, state)) = open.pop() {
        open.close(state);
        if state.is_goal() {
            termination = Termination::GoalReached { node: id };
            break;
        }
        expansions += 1;

        let g = i64::from(tree[id].g()) + 1;
        let mut children: Vec<(Transition, i64, i64)> = successors(&state)
            .into_iter()
            .map(|transition| {
                let h = heuristic.estimate(&transition.state);
                let f = g + h + safety_penalty(&transition.state, penalty);
                (transition, h, f)
            })
            .collect();
        if policy.astar_order == AStarOrder::DescendingF {
            // Stable: equal f keeps generator order.
            children.sort_by_key(|&(_, _, f)| Reverse(f));
        }
        for (transition, h, f) in children {
            let child = tree.attach(id, &transition, h, f);
            if transition.state.is_valid() && !open.is_closed(&transition.state) {
                log::trace!("astar: push {} f={f}", transition.state);
                open.push(child, transition.state, f);
            }
        }
    }
    let elapsed = started.elapsed();

    log::debug!(
        "astar[{}]: {} after {expansions} expansions ({} nodes, {} closed, {} open)",
        policy.astar_order.name(),
        termination.tag(),
        tree.len(),
        open.closed_len(),
        open.len()
    );
    let stats = SearchStats {
        explored: open.closed_len(),
        open: open.len(),
        closed: open.closed_len(),
        generated: tree.len(),
        frontier_high_water: open.high_water(),
    };
    SearchResult::assemble(StrategyKind::AStar, tree, termination, stats, elapsed)
}
