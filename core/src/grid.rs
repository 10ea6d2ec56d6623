use serde::{Deserialize, Serialize};
use std::fmt;

/// Glyph used to render cells that are not part of any answer.
pub const BLOCK_CHAR: char = '■';
/// Glyph used to render answer cells with nothing in them yet.
///
/// Guessing this character clears a cell.
pub const BLANK_CHAR: char = '_';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    /// Not covered by any clue.
    Blocked,
    /// Covered by a clue but not filled in.
    Blank,
    /// Filled in with an uppercase letter.
    Letter(char),
}

impl Cell {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Cell::Blank)
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Cell::Letter(c) => Some(*c),
            _ => None,
        }
    }

    pub fn display_char(&self) -> char {
        match self {
            Cell::Blocked => BLOCK_CHAR,
            Cell::Blank => BLANK_CHAR,
            Cell::Letter(c) => *c,
        }
    }
}

/// Square grid of cells, indexed `[row][col]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    dimension: usize,
    cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid with every cell blocked.
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            cells: vec![vec![Cell::Blocked; dimension]; dimension],
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn cells(&self) -> &[Vec<Cell>] {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.dimension && col < self.dimension
    }
}

/// Renders the grid with column indices across the top and row indices down
/// the left-hand side:
///
/// ```text
///      0    1    2
///   |---------------
/// 0 |  H    E    Y
/// ```
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = (0..self.dimension)
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("    ");
        writeln!(f, "     {}", header)?;
        writeln!(f, "  |{}", "-".repeat((6 * self.dimension).saturating_sub(3)))?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", i)?;
            for cell in row {
                write!(f, "  {}  ", cell.display_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
