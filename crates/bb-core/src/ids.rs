//! Strongly typed, zero-cost identifier wrappers.
//!
//! Bots and output bins live in separate id spaces: `bot 3` and `output 3`
//! are unrelated.  Giving each its own type means a `Target` can never send
//! a chip to the wrong kind of destination by accident.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize`.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Identifier of a bot, written `bot <n>` in directive text.
    ///
    /// Unique within one registry.  A bot is created the first time any
    /// directive or delivery names this id; `BotId(3)` and `BinId(3)` name
    /// two unrelated things.
    pub struct BotId(u32);
}

typed_id! {
    /// Identifier of an output bin, written `output <n>` in directive text.
    ///
    /// Bins only ever receive chips (they never fire), so a `Target::Bin`
    /// always ends a cascade branch.
    pub struct BinId(u32);
}
