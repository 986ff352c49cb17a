//! Typed integer identifiers.
//!
//! Every record the engine owns (axes, axis values, rules) and every record it
//! borrows from collaborators (parts of speech, words, word classes) is addressed
//! by a small `u32` newtype so that the different id spaces cannot be mixed up.

use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
        #[cfg_attr(
            feature = "serde",
            derive(serde::Serialize, serde::Deserialize),
            serde(transparent)
        )]
        pub struct $name(u32);

        impl $name {
            /// Wraps a raw identifier.
            #[must_use]
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Returns the raw identifier.
            #[must_use]
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}#{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Part of speech, as assigned by the lexicon.
    PosId,
    "pos"
);
define_id!(
    /// A grammatical axis (e.g. tense) owned by one part of speech.
    AxisId,
    "axis"
);
define_id!(
    /// One value of an axis (e.g. past).
    ValueId,
    "value"
);
define_id!(
    /// A lexicon entry.
    WordId,
    "word"
);
define_id!(
    /// A word class (e.g. gender) from the word-class system.
    ClassId,
    "class"
);
define_id!(
    /// One value of a word class (e.g. feminine).
    ClassValueId,
    "class-value"
);
define_id!(
    /// Arena key of a rule inside a rule store. Not persisted.
    RuleId,
    "rule"
);

/// Monotonic allocator for raw identifiers.
///
/// Ids start at 1 and are never reused. Loading persisted records must call
/// [`IdAllocator::observe`] so later allocations skip past them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdAllocator {
    next: u32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdAllocator {
    /// Creates an allocator whose first id is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 1 }
    }

    /// Hands out the next id.
    pub fn allocate(&mut self) -> u32 {
        let id = self.next;
        self.next = self.next.saturating_add(1);
        id
    }

    /// Records an externally chosen id so it is never allocated again.
    pub fn observe(&mut self, raw: u32) {
        if raw >= self.next {
            self.next = raw.saturating_add(1);
        }
    }

    /// Returns the id the next call to [`allocate`](Self::allocate) will produce.
    #[must_use]
    pub const fn peek(&self) -> u32 {
        self.next
    }
}
