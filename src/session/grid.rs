//! Grid layout produced from a frozen snapshot
//!
//! A grid has one group per row. Each group holds `max(cols, 1)` cells: with
//! zero columns a row still gets a single empty placeholder so the layout
//! never collapses to nothing.

use super::symbol::Symbol;
use super::values::Factor;

/// One slot in a grid row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Glyph(Symbol),
    Placeholder,
}

impl Cell {
    pub fn is_glyph(self) -> bool {
        matches!(self, Cell::Glyph(_))
    }
}

/// Rows of cells ready to be drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Factor,
    cols: Factor,
    symbol: Symbol,
    groups: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn build(rows: Factor, cols: Factor, symbol: Symbol) -> Self {
        let row = if cols.get() > 0 {
            vec![Cell::Glyph(symbol); usize::from(cols.get())]
        } else {
            vec![Cell::Placeholder]
        };
        let groups = vec![row; usize::from(rows.get())];

        Grid {
            rows,
            cols,
            symbol,
            groups,
        }
    }

    pub fn rows(&self) -> Factor {
        self.rows
    }

    pub fn cols(&self) -> Factor {
        self.cols
    }

    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    pub fn groups(&self) -> &[Vec<Cell>] {
        &self.groups
    }

    /// Number of real glyphs, placeholders excluded
    pub fn glyph_count(&self) -> usize {
        self.groups
            .iter()
            .flatten()
            .filter(|cell| cell.is_glyph())
            .count()
    }

    /// Plain-text rendering, one line per group
    pub fn to_lines(&self) -> Vec<String> {
        self.groups
            .iter()
            .map(|group| {
                group
                    .iter()
                    .map(|cell| match cell {
                        Cell::Glyph(symbol) => symbol.glyph(),
                        Cell::Placeholder => " ",
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect()
    }
}
