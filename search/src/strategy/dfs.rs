//! Depth-first search in generator order.
//!
//! At each node: an invalid state ends the branch without being marked
//! visited; a goal state ends the search; otherwise the state is marked
//! visited and its children are taken in generator order. Each child is
//! attached just before it is considered, and recursed into if its state is
//! not yet visited. The first goal found wins, so siblings after the branch
//! that reached it are never attached. Visited states are never reopened.

use std::collections::BTreeSet;
use std::time::Instant;

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::successors;

use crate::node::NodeId;
use crate::result::{SearchResult, SearchStats, Termination};
use crate::strategy::StrategyKind;
use crate::tree::SearchTree;

struct DepthFirst {
    tree: SearchTree,
    visited: BTreeSet<RiverState>,
    deepest: usize,
}

impl DepthFirst {
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
        for transition in successors(&state) {
            let child = self.tree.attach(id, &transition, 0, g);
            if self.visited.contains(&transition.state) {
                continue;
            }
            log::trace!("dfs: {state} --{}--> {}", transition.mv.short_label(), transition.state);
            if let Some(goal) = self.descend(child, frames + 1) {
                return Some(goal);
            }
        }
        None
    }
}

/// Run depth-first search from `initial`.
#[must_use]
pub fn run(initial: RiverState) -> SearchResult {
    let started = Instant::now();
    let mut walk = DepthFirst {
        tree: SearchTree::with_root(initial, 0, 0),
        visited: BTreeSet::new(),
        deepest: 0,
    };
    let termination = walk
        .descend(NodeId::ROOT, 1)
        .map_or(Termination::FrontierExhausted, |node| Termination::GoalReached { node });
    let elapsed = started.elapsed();

    log::debug!(
        "dfs: {} ({} nodes, {} visited)",
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
    SearchResult::assemble(StrategyKind::DepthFirst, walk.tree, termination, stats, elapsed)
}
