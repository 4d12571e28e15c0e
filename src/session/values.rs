//! Range-limited numeric values used by the session
//!
//! Both types clamp on construction, so a value that reaches the session is
//! always in range and no error path exists for out-of-range input.

use std::fmt;

/// One of the two numbers being multiplied, always within `0..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Factor(u8);

impl Factor {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 12;

    /// Build a factor, clamping `raw` into `MIN..=MAX`
    pub fn clamped(raw: i64) -> Self {
        Factor(raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u8)
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Product of two factors; at most 144 so it always fits an [`Answer`]
    pub fn times(self, other: Factor) -> u16 {
        u16::from(self.0) * u16::from(other.0)
    }
}

impl From<u8> for Factor {
    fn from(raw: u8) -> Self {
        Factor::clamped(i64::from(raw))
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A submitted product, always within `0..=144`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Answer(u16);

impl Answer {
    pub const MIN: u16 = 0;
    pub const MAX: u16 = 144;

    /// Build an answer, clamping `raw` into `MIN..=MAX`
    pub fn clamped(raw: i64) -> Self {
        Answer(raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl From<u16> for Answer {
    fn from(raw: u16) -> Self {
        Answer::clamped(i64::from(raw))
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factor_clamps_both_ends() {
        assert_eq!(Factor::clamped(-3).get(), 0);
        assert_eq!(Factor::clamped(7).get(), 7);
        assert_eq!(Factor::clamped(99).get(), 12);
        assert_eq!(Factor::from(200u8).get(), 12);
    }

    #[test]
    fn answer_clamps_both_ends() {
        assert_eq!(Answer::clamped(-1).get(), 0);
        assert_eq!(Answer::clamped(144).get(), 144);
        assert_eq!(Answer::clamped(1000).get(), 144);
        assert_eq!(Answer::from(145u16).get(), 144);
        assert_eq!(Answer::from(56u16).get(), 56);
    }

    #[test]
    fn largest_product_fits_an_answer() {
        let twelve = Factor::clamped(12);
        assert_eq!(twelve.times(twelve), Answer::MAX);
    }
}
