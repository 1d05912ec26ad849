//! The four search strategies.
//!
//! Each strategy owns its tree and its visited/closed set for the duration of
//! one run, so runs are independent and may execute on separate threads.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod greedy;

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Tag selecting one strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StrategyKind {
    BreadthFirst,
    DepthFirst,
    Greedy,
    AStar,
}

impl StrategyKind {
    /// All strategies in presentation order.
    pub const ALL: [Self; 4] = [Self::BreadthFirst, Self::DepthFirst, Self::Greedy, Self::AStar];

    /// Short name used on the command line and in reports.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirst => "dfs",
            Self::Greedy => "greedy",
            Self::AStar => "astar",
        }
    }

    /// Display title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::BreadthFirst => "Breadth-first search",
            Self::DepthFirst => "Depth-first search",
            Self::Greedy => "Greedy best-first search",
            Self::AStar => "A* search",
        }
    }

    /// Whether the strategy always returns a shortest path.
    #[must_use]
    pub const fn is_optimal(self) -> bool {
        matches!(self, Self::BreadthFirst)
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        let alias = match wanted.as_str() {
            "breadth-first" | "breadth" => "bfs",
            "depth-first" | "depth" => "dfs",
            "a*" | "a-star" => "astar",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == alias)
            .ok_or_else(|| SearchError::UnknownName {
                what: "strategy",
                name: s.to_string(),
            })
    }
}
