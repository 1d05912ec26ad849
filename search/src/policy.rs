//! Search policy types.

use std::str::FromStr;

use crate::error::SearchError;

/// Tunables shared by the informed strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Estimate used to order greedy children.
    pub greedy_heuristic: GreedyHeuristic,
    /// Which end of the A* open list is popped first.
    pub astar_order: AStarOrder,
    /// Amount subtracted from an A* child's `f` for each unsafe bank.
    pub invalid_state_penalty: i64,
}

impl SearchPolicy {
    /// Check the policy before any search step is taken.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if the penalty is not positive.
    /// A zero or negative penalty would rank unsafe children at or above
    /// safe ones.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.invalid_state_penalty <= 0 {
            return Err(SearchError::InvalidPolicy {
                detail: format!(
                    "invalid_state_penalty must be positive, got {}",
                    self.invalid_state_penalty
                ),
            });
        }
        Ok(())
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self {
            greedy_heuristic: GreedyHeuristic::BankOccupancy,
            astar_order: AStarOrder::AscendingF,
            invalid_state_penalty: 1000,
        }
    }
}

/// Greedy child-ordering estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GreedyHeuristic {
    /// People on the left bank plus people on the right bank.
    ///
    /// Constant under population conservation, so ordering falls back to
    /// generator order.
    #[default]
    BankOccupancy,
    /// People still on the left bank.
    LeftBankOccupancy,
}

impl GreedyHeuristic {
    pub const ALL: [Self; 2] = [Self::BankOccupancy, Self::LeftBankOccupancy];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::BankOccupancy => "bank-occupancy",
            Self::LeftBankOccupancy => "left-bank",
        }
    }
}

impl FromStr for GreedyHeuristic {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownName {
                what: "greedy heuristic",
                name: s.to_string(),
            })
    }
}

/// A* open-list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AStarOrder {
    /// Pop the smallest `f` first.
    #[default]
    AscendingF,
    /// Pop the largest `f` first.
    DescendingF,
}

impl AStarOrder {
    pub const ALL: [Self; 2] = [Self::AscendingF, Self::DescendingF];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AscendingF => "ascending",
            Self::DescendingF => "descending",
        }
    }
}

impl FromStr for AStarOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SearchError::UnknownName {
                what: "A* ordering",
                name: s.to_string(),
            })
    }
}
