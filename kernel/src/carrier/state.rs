//! `RiverState`: one configuration of the river crossing.
//!
//! # Layout
//!
//! Only the left-bank counts and the boat side are stored. The right bank is
//! derived as `PARTY_SIZE - left`, so population conservation holds by
//! construction.
//!
//! # Equality semantics
//!
//! `RiverState` is a plain value type. Two states are equal iff both left
//! counts and the boat side match; `Hash` and `Ord` follow the same fields,
//! which makes the state usable directly as a dedup key in any set.
//!
//! Out-of-range counts are representable (a caller may build a degenerate
//! start state on purpose). They are never produced by the move generator
//! and always fail [`RiverState::is_valid`].

use std::fmt;
use std::str::FromStr;

/// Number of missionaries, and separately of cannibals, in the party.
pub const PARTY_SIZE: u8 = 3;

/// Maximum number of occupants in the boat for one crossing.
pub const BOAT_CAPACITY: u8 = 2;

/// One of the two river banks. `Left` is the starting bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    /// The bank across the river.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Lowercase name used in labels and serialized output.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// Single-letter tag used in the compact text form (`L` / `R`).
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Left => 'L',
            Self::Right => 'R',
        }
    }

    const fn to_byte(self) -> u8 {
        match self {
            Self::Left => 0,
            Self::Right => 1,
        }
    }
}

/// Head-count on one bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub missionaries: u8,
    pub cannibals: u8,
}

impl Occupancy {
    /// Total number of people on the bank.
    #[must_use]
    pub const fn total(self) -> u8 {
        self.missionaries.saturating_add(self.cannibals)
    }

    /// Missionaries are safe unless present and outnumbered.
    #[must_use]
    pub const fn is_safe(self) -> bool {
        self.missionaries == 0 || self.missionaries >= self.cannibals
    }
}

/// An immutable river configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RiverState {
    missionaries_left: u8,
    cannibals_left: u8,
    boat: Bank,
}

impl RiverState {
    /// Everyone on the left bank with the boat.
    pub const INITIAL: Self = Self::new(PARTY_SIZE, PARTY_SIZE, Bank::Left);

    /// Everyone on the right bank with the boat.
    pub const GOAL: Self = Self::new(0, 0, Bank::Right);

    /// Build a state from left-bank counts and the boat side.
    ///
    /// Does not check anything; use [`is_valid`](Self::is_valid).
    #[must_use]
    pub const fn new(missionaries_left: u8, cannibals_left: u8, boat: Bank) -> Self {
        Self {
            missionaries_left,
            cannibals_left,
            boat,
        }
    }

    #[must_use]
    pub const fn missionaries_left(&self) -> u8 {
        self.missionaries_left
    }

    #[must_use]
    pub const fn cannibals_left(&self) -> u8 {
        self.cannibals_left
    }

    #[must_use]
    pub const fn missionaries_right(&self) -> u8 {
        PARTY_SIZE.saturating_sub(self.missionaries_left)
    }

    #[must_use]
    pub const fn cannibals_right(&self) -> u8 {
        PARTY_SIZE.saturating_sub(self.cannibals_left)
    }

    /// The bank currently holding the boat.
    #[must_use]
    pub const fn boat(&self) -> Bank {
        self.boat
    }

    /// Head-count on the given bank.
    #[must_use]
    pub const fn occupancy(&self, bank: Bank) -> Occupancy {
        match bank {
            Bank::Left => Occupancy {
                missionaries: self.missionaries_left,
                cannibals: self.cannibals_left,
            },
            Bank::Right => Occupancy {
                missionaries: self.missionaries_right(),
                cannibals: self.cannibals_right(),
            },
        }
    }

    /// Left counts lie in `0..=PARTY_SIZE`.
    #[must_use]
    pub const fn is_within_bounds(&self) -> bool {
        self.missionaries_left <= PARTY_SIZE && self.cannibals_left <= PARTY_SIZE
    }

    /// Whether the missionaries on `bank` are safe.
    #[must_use]
    pub const fn is_bank_safe(&self, bank: Bank) -> bool {
        self.occupancy(bank).is_safe()
    }

    /// Bounds plus the safety invariant on both banks.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.is_within_bounds() && self.is_bank_safe(Bank::Left) && self.is_bank_safe(Bank::Right)
    }

    /// Left bank empty and the boat on the right.
    #[must_use]
    pub const fn is_goal(&self) -> bool {
        self.missionaries_left == 0
            && self.cannibals_left == 0
            && matches!(self.boat, Bank::Right)
    }

    /// Identity bytes for hashing: `[missionaries_left, cannibals_left, boat]`.
    #[must_use]
    pub const fn identity_bytes(&self) -> [u8; 3] {
        [
            self.missionaries_left,
            self.cannibals_left,
            self.boat.to_byte(),
        ]
    }
}

impl Default for RiverState {
    fn default() -> Self {
        Self::INITIAL
    }
}

/// Compact text form: `M,C,B` with `B` one of `L`/`R`, e.g. `(3,3,L)`.
impl fmt::Display for RiverState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{},{})",
            self.missionaries_left,
            self.cannibals_left,
            self.boat.tag()
        )
    }
}

/// Failure parsing a [`RiverState`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateParseError {
    /// Input did not split into exactly three comma-separated fields.
    FieldCount { found: usize },
    /// A count field was not a small unsigned integer.
    BadCount { field: String },
    /// The boat field was not `L`, `R`, `left` or `right`.
    BadBank { field: String },
}

impl fmt::Display for StateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldCount { found } => {
                write!(f, "expected 3 fields `M,C,L|R`, found {found}")
            }
            Self::BadCount { field } => write!(f, "invalid head-count: {field:?}"),
            Self::BadBank { field } => write!(f, "invalid boat side: {field:?}"),
        }
    }
}

impl std::error::Error for StateParseError {}

impl FromStr for Bank {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            _ => Err(StateParseError::BadBank {
                field: s.to_string(),
            }),
        }
    }
}

/// Accepts `3,3,L` or the display form `(3,3,L)`.
impl FromStr for RiverState {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let fields: Vec<&str> = inner.split(',').collect();
        let [m, c, b] = fields.as_slice() else {
            return Err(StateParseError::FieldCount {
                found: fields.len(),
            });
        };
        let count = |field: &str| {
            field
                .trim()
                .parse::<u8>()
                .map_err(|_| StateParseError::BadCount {
                    field: field.to_string(),
                })
        };
        Ok(Self::new(count(m)?, count(c)?, b.parse()?))
    }
}
