//! The value token exchanged between bots.

use std::fmt;

/// A microchip carrying a single comparable value.
///
/// Chips have no identity beyond their value; two chips with the same value
/// are indistinguishable.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chip(pub u32);

impl Chip {
    #[inline]
    pub fn value(self) -> u32 {
        self.0
    }
}

impl From<u32> for Chip {
    #[inline]
    fn from(value: u32) -> Self {
        Chip(value)
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
