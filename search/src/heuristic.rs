//! Heuristic estimates used by the informed strategies.
//!
//! Estimates are plain integers. Lower means "closer to the goal" for every
//! implementation in this module.

use rivercross_kernel::carrier::state::{Bank, RiverState, PARTY_SIZE};

use crate::policy::GreedyHeuristic;

/// Trait for state estimates.
///
/// Implementations must be pure: same state, same value.
pub trait Heuristic: Send + Sync {
    fn estimate(&self, state: &RiverState) -> i64;
}

/// A* estimate: `6 - 2*M_left - 2*C_left`.
///
/// Grows as people leave the left bank, which is the opposite of a distance.
/// Under ascending-`f` ordering this prefers nodes that have moved fewer
/// people; the search is still complete on this state space.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransferEstimate;

impl Heuristic for TransferEstimate {
    fn estimate(&self, state: &RiverState) -> i64 {
        2 * i64::from(PARTY_SIZE)
            - 2 * i64::from(state.missionaries_left())
            - 2 * i64::from(state.cannibals_left())
    }
}

/// Greedy estimate: people on the left plus people on the right.
#[derive(Debug, Clone, Copy, Default)]
pub struct BankOccupancy;

impl Heuristic for BankOccupancy {
    fn estimate(&self, state: &RiverState) -> i64 {
        i64::from(state.occupancy(Bank::Left).total())
            + i64::from(state.occupancy(Bank::Right).total())
    }
}

/// Greedy estimate: people still on the left bank.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftBankOccupancy;

impl Heuristic for LeftBankOccupancy {
    fn estimate(&self, state: &RiverState) -> i64 {
        i64::from(state.occupancy(Bank::Left).total())
    }
}

impl GreedyHeuristic {
    /// The estimate this variant selects.
    #[must_use]
    pub fn heuristic(self) -> &'static dyn Heuristic {
        match self {
            Self::BankOccupancy => &BankOccupancy,
            Self::LeftBankOccupancy => &LeftBankOccupancy,
        }
    }
}

/// `-penalty` for each bank whose missionaries are outnumbered.
#[must_use]
pub fn safety_penalty(state: &RiverState, penalty: i64) -> i64 {
    [Bank::Left, Bank::Right]
        .into_iter()
        .filter(|&bank| !state.is_bank_safe(bank))
        .map(|_| -penalty)
        .sum()
}
