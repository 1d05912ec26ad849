//! Breadth-first search, one level per step.
//!
//! [`BfsSearch`] is a resumable stepper: each [`BfsSearch::step`] call either
//! finishes the run or expands the whole current frontier and hands back a
//! [`LevelReport`]. The caller decides between steps whether to continue,
//! which is how the console pauses between levels without any I/O in here.
//!
//! Per level:
//!
//! 1. If a frontier node is a goal, stop with the first such node.
//! 2. Otherwise expand every frontier node in order. A child is kept only if
//!    its state is valid and not yet visited; kept children are marked
//!    visited, attached to their parent and form the next frontier.
//! 3. If no child was kept, stop: the frontier is exhausted.
//!
//! Only kept children enter the tree.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use rivercross_kernel::carrier::state::RiverState;
use rivercross_kernel::operators::apply::successors;

use crate::contract::{AlwaysContinue, LevelDecision, LevelGate, LevelReport};
use crate::node::NodeId;
use crate::result::{SearchResult, SearchStats, Termination};
use crate::strategy::StrategyKind;
use crate::tree::SearchTree;

/// Outcome of one [`BfsSearch::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BfsStep {
    /// A level was expanded; the run can continue.
    Level(LevelReport),
    /// The run is over. Repeated calls keep returning this.
    Done(Termination),
}

/// Resumable breadth-first search.
#[derive(Debug)]
pub struct BfsSearch {
    tree: SearchTree,
    frontier: Vec<NodeId>,
    visited: BTreeSet<RiverState>,
    depth: u32,
    high_water: usize,
    termination: Option<Termination>,
    busy: Duration,
}

impl BfsSearch {
    /// Start a search. An invalid `initial` state is never put in the
    /// frontier, so the first step reports exhaustion.
    #[must_use]
    pub fn new(initial: RiverState) -> Self {
        let tree = SearchTree::with_root(initial, 0, 0);
        let mut visited = BTreeSet::new();
        let mut frontier = Vec::new();
        if initial.is_valid() {
            visited.insert(initial);
            frontier.push(NodeId::ROOT);
        }
        Self {
            tree,
            high_water: frontier.len(),
            frontier,
            visited,
            depth: 0,
            termination: None,
            busy: Duration::ZERO,
        }
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &SearchTree {
        &self.tree
    }

    /// Current frontier, in expansion order.
    #[must_use]
    pub fn frontier(&self) -> &[NodeId] {
        &self.frontier
    }

    /// Number of levels expanded so far.
    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// Advance by one level. Time spent here counts towards the run's
    /// elapsed time; time between steps does not.
    pub fn step(&mut self) -> BfsStep {
        let started = Instant::now();
        let outcome = self.advance();
        self.busy += started.elapsed();
        outcome
    }

    /// Stop the run. Has no effect if it already terminated.
    pub fn abort(&mut self) {
        if self.termination.is_none() {
            log::debug!("bfs: aborted after {} levels", self.depth);
            self.termination = Some(Termination::Aborted { depth: self.depth });
        }
    }

    /// Consume the stepper into a result. A run that never terminated is
    /// reported as aborted at its current depth.
    #[must_use]
    pub fn finish(mut self) -> SearchResult {
        self.abort();
        let termination = self
            .termination
            .unwrap_or(Termination::Aborted { depth: self.depth });
        let stats = SearchStats {
            explored: self.visited.len(),
            open: self.frontier.len(),
            closed: self.visited.len(),
            generated: self.tree.len(),
            frontier_high_water: self.high_water,
        };
        SearchResult::assemble(StrategyKind::BreadthFirst, self.tree, termination, stats, self.busy)
    }

    fn advance(&mut self) -> BfsStep {
        if let Some(termination) = self.termination {
            return BfsStep::Done(termination);
        }

        let goal = self
            .frontier
            .iter()
            .copied()
            .find(|id| self.tree[*id].state().is_goal());
        if let Some(node) = goal {
            return self.terminate(Termination::GoalReached { node });
        }
        if self.frontier.is_empty() {
            return self.terminate(Termination::FrontierExhausted);
        }

        let current = std::mem::take(&mut self.frontier);
        let mut next = Vec::new();
        for parent in current {
            let state = *self.tree[parent].state();
            let g = i64::from(self.tree[parent].g()) + 1;
            for transition in successors(&state) {
                if transition.state.is_valid() && self.visited.insert(transition.state) {
                    let child = self.tree.attach(parent, &transition, 0, g);
                    log::trace!("bfs: {state} --{}--> {}", transition.mv.short_label(), transition.state);
                    next.push(child);
                }
            }
        }
        self.depth += 1;

        if next.is_empty() {
            return self.terminate(Termination::FrontierExhausted);
        }
        self.frontier = next;
        self.high_water = self.high_water.max(self.frontier.len());

        BfsStep::Level(LevelReport {
            depth: self.depth,
            frontier_len: self.frontier.len(),
            visited: self.visited.len(),
            generated: self.tree.len(),
        })
    }

    fn terminate(&mut self, termination: Termination) -> BfsStep {
        log::debug!(
            "bfs: {} at depth {} ({} nodes, {} visited)",
            termination.tag(),
            self.depth,
            self.tree.len(),
            self.visited.len()
        );
        self.termination = Some(termination);
        BfsStep::Done(termination)
    }
}

/// Run to completion without pausing.
#[must_use]
pub fn run(initial: RiverState) -> SearchResult {
    run_with_gate(initial, &mut AlwaysContinue)
}

/// Run, asking `gate` after each level whether to continue.
#[must_use]
pub fn run_with_gate(initial: RiverState, gate: &mut dyn LevelGate) -> SearchResult {
    let mut search = BfsSearch::new(initial);
    while let BfsStep::Level(report) = search.step() {
        if gate.on_level(search.tree(), &report) == LevelDecision::Abort {
            search.abort();
            break;
        }
    }
    search.finish()
}
