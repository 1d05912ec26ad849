//! `apply()`: move a boat load across the river, producing the next state.
//!
//! [`successors`] is the move generator shared by every search strategy. It
//! tries each [`Load`] in [`Load::ALL`] order and keeps the loads the boat's
//! bank can supply. It does **not** filter by [`RiverState::is_valid`]:
//! unsafe children are returned so each strategy can apply its own policy
//! (display them, or discard them).

use std::fmt;

use crate::carrier::load::Load;
use crate::carrier::state::{Bank, RiverState};

/// A load crossing towards a bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub load: Load,
    /// Destination bank (opposite of the boat's side before the crossing).
    pub to: Bank,
}

impl Move {
    /// Human-readable label, e.g. `Move 2 cannibals to the right`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Move {} to the {}", self.load.describe(), self.to.name())
    }

    /// Compact label, e.g. `2C->` or `1M1C<-`.
    #[must_use]
    pub fn short_label(&self) -> String {
        let arrow = match self.to {
            Bank::Right => "->",
            Bank::Left => "<-",
        };
        format!("{}{arrow}", self.load.code())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Typed failure for load application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyFailure {
    /// The boat's bank does not hold enough people for the load.
    InsufficientSupply {
        load: Load,
        from: Bank,
        missionaries: u8,
        cannibals: u8,
    },
}

impl fmt::Display for ApplyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSupply {
                load,
                from,
                missionaries,
                cannibals,
            } => write!(
                f,
                "cannot ship {} from the {} bank ({missionaries}M, {cannibals}C present)",
                load.describe(),
                from.name()
            ),
        }
    }
}

impl std::error::Error for ApplyFailure {}

/// A generated child: the move taken and the state it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub mv: Move,
    pub state: RiverState,
}

/// Ship `load` from the boat's bank to the other bank.
///
/// The result may violate the safety invariant; only supply is checked.
///
/// # Errors
///
/// Returns [`ApplyFailure::InsufficientSupply`] if the boat's bank does not
/// hold enough missionaries or cannibals for `load`.
pub fn apply(state: &RiverState, load: Load) -> Result<Transition, ApplyFailure> {
    let from = state.boat();
    let available = state.occupancy(from);
    if available.missionaries < load.missionaries() || available.cannibals < load.cannibals() {
        return Err(ApplyFailure::InsufficientSupply {
            load,
            from,
            missionaries: available.missionaries,
            cannibals: available.cannibals,
        });
    }

    let to = from.opposite();
    // Supply was checked on the origin bank, so neither side can wrap.
    let (missionaries_left, cannibals_left) = match from {
        Bank::Left => (
            state.missionaries_left() - load.missionaries(),
            state.cannibals_left() - load.cannibals(),
        ),
        Bank::Right => (
            state.missionaries_left() + load.missionaries(),
            state.cannibals_left() + load.cannibals(),
        ),
    };

    Ok(Transition {
        mv: Move { load, to },
        state: RiverState::new(missionaries_left, cannibals_left, to),
    })
}

/// The move generator: every suppliable load, in [`Load::ALL`] order.
#[must_use]
pub fn successors(state: &RiverState) -> Vec<Transition> {
    Load::ALL
        .into_iter()
        .filter_map(|load| apply(state, load).ok())
        .collect()
}

/// Recover the move that leads from `from` to `to`, if one exists.
#[must_use]
pub fn infer_move(from: &RiverState, to: &RiverState) -> Option<Move> {
    successors(from)
        .into_iter()
        .find(|t| t.state == *to)
        .map(|t| t.mv)
}
