//! Greedy best-first search with ordered backtracking.
//!
//! Every generated child is attached, valid or not. The walk then recurses
//! into valid, unvisited children in ascending heuristic order, ties broken
//! by generator order, and falls back to the next child on a dead end.
//!
//! Node values: `h` is the heuristic, `f = g + h`.

use std::collections::BTreeSet;
use std::time::Instant;

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::successors;

use crate::heuristic::Heuristic;
use crate::node::NodeId;
use crate::policy::SearchPolicy;
use crate::result::{SearchResult, SearchStats, Termination};
use crate::strategy::StrategyKind;
use crate::tree::SearchTree;

struct GreedyWalk<'h> {
    heuristic: &'h dyn Heuristic,
    tree: SearchTree,
    visited: BTreeSet<RiverState>,
    deepest: usize,
}

impl GreedyWalk<'_> {
    fn descend(&mut self, id: NodeId, frames: usize) -> Option<NodeId> {
        let state = *self.tree[id].state();
        if !state.is_valid() {
            return None;
        }
        if state.is_goal() {
            return Some(id);
        }
        self.visited.insert(state);
        self.deepest = self.deepest.max(frames);

        let g = i64::from(self.tree[id].g()) + 1;
        let mut children: Vec<NodeId> = successors(&state)
            .iter()
            .map(|transition| {
                let h = self.heuristic.estimate(&transition.state);
                self.tree.attach(id, transition, h, g + h)
            })
            .collect();
        // Stable: equal estimates keep generator order.
        children.sort_by_key(|child| self.tree[*child].h());

        for child in children {
            let child_state = *self.tree[child].state();
            if !child_state.is_valid() || self.visited.contains(&child_state) {
                continue;
            }
            log::trace!("greedy: {state} -> {child_state} (h={})", self.tree[child].h());
            if let Some(goal) = self.descend(child, frames + 1) {
                return Some(goal);
            }
        }
        None
    }
}

/// Run greedy best-first search from `initial` with the policy's heuristic.
#[must_use]
pub fn run(initial: RiverState, policy: &SearchPolicy) -> SearchResult {
    let started = Instant::now();
    let heuristic = policy.greedy_heuristic.heuristic();
    let h0 = heuristic.estimate(&initial);
    let mut walk = GreedyWalk {
        heuristic,
        tree: SearchTree::with_root(initial, h0, h0),
        visited: BTreeSet::new(),
        deepest: 0,
    };
    let termination = walk
        .descend(NodeId::ROOT, 1)
        .map_or(Termination::FrontierExhausted, |node| Termination::GoalReached { node });
    let elapsed = started.elapsed();

    log::debug!(
        "greedy[{}]: {} ({} nodes, {} visited)",
        policy.greedy_heuristic.name(),
        termination.tag(),
        walk.tree.len(),
        walk.visited.len()
    );
    let stats = SearchStats {
        explored: walk.visited.len(),
        open: 0,
        closed: walk.visited.len(),
        generated: walk.tree.len(),
        frontier_high_water: walk.deepest,
    };
    SearchResult::assemble(StrategyKind::Greedy, walk.tree, termination, stats, elapsed)
}
