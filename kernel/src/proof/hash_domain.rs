//! Typed domain separators for canonical hashing.
//!
//! Every digest picks a [`HashDomain`]. The enum, `as_bytes()`, `ALL` and
//! `Display` are generated from one macro invocation so they cannot drift.

macro_rules! define_hash_domains {
    (
        $(
            $(#[$meta:meta])*
            $variant:ident => $bytes:expr
        ),+ $(,)?
    ) => {
        /// Typed domain separator for [`super::hash::canonical_hash`].
        ///
        /// Each variant maps to a unique, null-terminated prefix.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum HashDomain {
            $(
                $(#[$meta])*
                $variant,
            )+
        }

        impl HashDomain {
            /// The raw prefix bytes.
            #[must_use]
            pub const fn as_bytes(&self) -> &'static [u8] {
                match self {
                    $( Self::$variant => $bytes, )+
                }
            }

            /// All domains in declaration order.
            pub const ALL: &[HashDomain] = &[
                $( Self::$variant, )+
            ];
        }

        impl core::fmt::Display for HashDomain {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                match self {
                    $( Self::$variant => f.write_str(stringify!($variant)), )+
                }
            }
        }
    };
}

define_hash_domains! {
    /// A single river state (`identity_bytes`).
    StateIdentity => b"RIVERCROSS::STATE_IDENTITY::V1\0",

    /// The canonical JSON of one strategy's search tree and path.
    SearchTree => b"RIVERCROSS::SEARCH_TREE::V1\0",

    /// The canonical JSON of a multi-strategy comparison report.
    ComparisonReport => b"RIVERCROSS::COMPARISON_REPORT::V1\0",
}
