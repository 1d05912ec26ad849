//! `Load`: the five boat loads, in their fixed enumeration order.
//!
//! The declaration order of [`Load::ALL`] is the tie-break order for every
//! search strategy. Do not reorder.

use std::fmt;

use crate::carrier::state::BOAT_CAPACITY;

/// One boat load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Load {
    OneMissionary,
    TwoMissionaries,
    OneCannibal,
    TwoCannibals,
    MissionaryAndCannibal,
}

impl Load {
    /// All loads in enumeration order.
    pub const ALL: [Self; 5] = [
        Self::OneMissionary,
        Self::TwoMissionaries,
        Self::OneCannibal,
        Self::TwoCannibals,
        Self::MissionaryAndCannibal,
    ];

    #[must_use]
    pub const fn missionaries(self) -> u8 {
        match self {
            Self::OneMissionary | Self::MissionaryAndCannibal => 1,
            Self::TwoMissionaries => 2,
            Self::OneCannibal | Self::TwoCannibals => 0,
        }
    }

    #[must_use]
    pub const fn cannibals(self) -> u8 {
        match self {
            Self::OneCannibal | Self::MissionaryAndCannibal => 1,
            Self::TwoCannibals => 2,
            Self::OneMissionary | Self::TwoMissionaries => 0,
        }
    }

    /// Number of people in the boat.
    #[must_use]
    pub const fn passengers(self) -> u8 {
        self.missionaries() + self.cannibals()
    }

    /// Short code: `1M`, `2M`, `1C`, `2C`, `1M1C`.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::OneMissionary => "1M",
            Self::TwoMissionaries => "2M",
            Self::OneCannibal => "1C",
            Self::TwoCannibals => "2C",
            Self::MissionaryAndCannibal => "1M1C",
        }
    }

    /// Plain-English description of who is in the boat.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::OneMissionary => "1 missionary",
            Self::TwoMissionaries => "2 missionaries",
            Self::OneCannibal => "1 cannibal",
            Self::TwoCannibals => "2 cannibals",
            Self::MissionaryAndCannibal => "1 missionary and 1 cannibal",
        }
    }

    /// Look up a load by its short code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|load| load.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// Every load must respect the boat capacity and carry at least one person.
const _: () = {
    let mut i = 0;
    while i < Load::ALL.len() {
        let n = Load::ALL[i].passengers();
        assert!(n != 0);
        assert!(n <= BOAT_CAPACITY);
        i += 1;
    }
};
