//! The picture used to draw the multiplication grid

use std::fmt;

/// Visual marker for one cell of the grid. Cosmetic only; grading ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum Symbol {
    #[default]
    Apple,
    Star,
    Dog,
    Cookie,
}

impl Symbol {
    /// Every selectable symbol, in menu order
    pub const ALL: [Symbol; 4] = [Symbol::Apple, Symbol::Star, Symbol::Dog, Symbol::Cookie];

    pub fn glyph(self) -> &'static str {
        match self {
            Symbol::Apple => "🍎",
            Symbol::Star => "⭐",
            Symbol::Dog => "🐶",
            Symbol::Cookie => "🍪",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Symbol::Apple => "Apple",
            Symbol::Star => "Star",
            Symbol::Dog => "Dog",
            Symbol::Cookie => "Cookie",
        }
    }

    /// Next symbol in menu order, wrapping around
    pub fn next(self) -> Self {
        match self {
            Symbol::Apple => Symbol::Star,
            Symbol::Star => Symbol::Dog,
            Symbol::Dog => Symbol::Cookie,
            Symbol::Cookie => Symbol::Apple,
        }
    }

    /// Previous symbol in menu order, wrapping around
    pub fn prev(self) -> Self {
        match self {
            Symbol::Apple => Symbol::Cookie,
            Symbol::Star => Symbol::Apple,
            Symbol::Dog => Symbol::Star,
            Symbol::Cookie => Symbol::Dog,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.glyph())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_prev_walk_the_whole_menu() {
        let mut s = Symbol::Apple;
        for expected in Symbol::ALL.iter().cycle().skip(1).take(4) {
            s = s.next();
            assert_eq!(s, *expected);
        }
        for s in Symbol::ALL {
            assert_eq!(s.next().prev(), s);
        }
    }

    #[test]
    fn label_shows_name_and_glyph() {
        assert_eq!(Symbol::Dog.to_string(), "Dog 🐶");
    }
}
