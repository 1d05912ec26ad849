//! Search results: tree, path, termination reason, statistics, timing.

use std::time::Duration;

use crate::node::{NodeId, SearchNode};
use crate::strategy::StrategyKind;
use crate::tree::SearchTree;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// A goal node was found.
    GoalReached { node: NodeId },
    /// Nothing left to expand. Also covers an invalid start state.
    FrontierExhausted,
    /// A level gate stopped a stepwise run after `depth` levels.
    Aborted { depth: u32 },
}

impl Termination {
    /// Short tag used in reports.
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::Aborted { .. } => "aborted",
        }
    }
}

/// Counters reported by every strategy.
///
/// `explored` and `closed` both equal the visited/closed set size. `open` is
/// what remained in the frontier at termination (always 0 for the recursive
/// strategies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    pub explored: usize,
    pub open: usize,
    pub closed: usize,
    /// Nodes in the tree.
    pub generated: usize,
    /// Largest frontier size seen (recursion depth for DFS and greedy).
    pub frontier_high_water: usize,
}

/// The outcome of one strategy run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub strategy: StrategyKind,
    pub tree: SearchTree,
    /// Root-to-goal ids. Empty unless the goal was reached.
    pub path: Vec<NodeId>,
    pub termination: Termination,
    pub stats: SearchStats,
    pub elapsed: Duration,
}

impl SearchResult {
    /// Assemble a result, reconstructing the path from the termination.
    pub(crate) fn assemble(
        strategy: StrategyKind,
        tree: SearchTree,
        termination: Termination,
        stats: SearchStats,
        elapsed: Duration,
    ) -> Self {
        let path = match termination {
            Termination::GoalReached { node } => tree.path_to(node),
            Termination::FrontierExhausted | Termination::Aborted { .. } => Vec::new(),
        };
        Self {
            strategy,
            tree,
            path,
            termination,
            stats,
            elapsed,
        }
    }

    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, Termination::GoalReached { .. })
    }

    /// The goal node, if one was reached.
    #[must_use]
    pub fn goal(&self) -> Option<&SearchNode> {
        match self.termination {
            Termination::GoalReached { node } => self.tree.get(node),
            Termination::FrontierExhausted | Termination::Aborted { .. } => None,
        }
    }

    /// Number of moves on the path; 0 when there is no path.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Path nodes, root first.
    pub fn path_nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.path.iter().map(|id| &self.tree[*id])
    }

    /// Every node the run generated, in creation order.
    #[must_use]
    pub fn nodes(&self) -> &SearchTree {
        &self.tree
    }

    #[must_use]
    pub fn root(&self) -> &SearchNode {
        self.tree.root()
    }

    /// Elapsed wall-clock time in nanoseconds, saturating at `u64::MAX`.
    #[must_use]
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }

    /// Elapsed wall-clock time in whole milliseconds (truncated).
    #[must_use]
    pub fn elapsed_millis(&self) -> u64 {
        u64::try_from(self.elapsed.as_millis()).unwrap_or(u64::MAX)
    }

    /// Elapsed wall-clock time as fractional milliseconds, for display.
    #[must_use]
    pub fn elapsed_ms_f64(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}
