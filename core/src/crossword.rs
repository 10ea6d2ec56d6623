use crate::{BLANK_CHAR, Cell, Clue, ClueKey, CrosswordError, Direction, Grid};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

/// Width and height of the puzzles this player handles.
pub const CROSSWORD_DIMENSION: usize = 5;

/// Characters accepted in a guess. `_` clears the cell it lands on.
pub const GUESS_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ_";

/// A crossword in play: the clue set and the player's grid.
///
/// Clues are keyed by [`ClueKey`], so iterating over them yields across clues
/// first and down clues second, each sorted by row and then by column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Crossword {
    grid: Grid,
    clues: BTreeMap<ClueKey, Clue>,
}

impl Crossword {
    /// Build a crossword of the given dimension from a set of clues.
    ///
    /// Every cell starts out blocked; each cell covered by a clue becomes blank.
    /// Two clues sharing a key are rejected rather than one replacing the other.
    pub fn new<I>(dimension: usize, clues: I) -> Result<Self, CrosswordError>
    where
        I: IntoIterator<Item = Clue>,
    {
        let mut grid = Grid::new(dimension);
        let mut map = BTreeMap::new();

        for clue in clues {
            let key = clue.key();
            Self::validate_clue(&grid, &clue)?;
            if map.contains_key(&key) {
                return Err(CrosswordError::DuplicateClue(key));
            }

            for (row, col) in clue.positions() {
                if let Some(cell) = grid.get_mut(row, col) {
                    if cell.is_blocked() {
                        *cell = Cell::Blank;
                    }
                }
            }
            map.insert(key, clue);
        }

        debug!("built {dimension}x{dimension} crossword with {} clues", map.len());
        Ok(Self { grid, clues: map })
    }

    fn validate_clue(grid: &Grid, clue: &Clue) -> Result<(), CrosswordError> {
        if clue.is_empty() {
            return Err(CrosswordError::EmptyAnswer(clue.key()));
        }
        // spans are straight lines, so both ends inside means every cell is
        let fits = clue
            .end()
            .is_some_and(|(r, c)| grid.contains(clue.row, clue.col) && grid.contains(r, c));
        if !fits {
            return Err(CrosswordError::OutOfBounds {
                key: clue.key(),
                dimension: grid.dimension(),
            });
        }
        if !clue.letters().all(|c| c.is_ascii_uppercase()) {
            return Err(CrosswordError::InvalidAnswer(clue.key()));
        }
        Ok(())
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimension(&self) -> usize {
        self.grid.dimension()
    }

    pub fn clue(&self, key: &ClueKey) -> Option<&Clue> {
        self.clues.get(key)
    }

    pub fn contains(&self, key: &ClueKey) -> bool {
        self.clues.contains_key(key)
    }

    /// All clues, across before down, each by row then column.
    pub fn clues(&self) -> impl Iterator<Item = &Clue> {
        self.clues.values()
    }

    pub fn clues_by_direction(&self, direction: Direction) -> Vec<&Clue> {
        self.clues
            .values()
            .filter(|clue| clue.direction == direction)
            .collect()
    }

    fn lookup(&self, key: &ClueKey) -> Result<&Clue, CrosswordError> {
        self.clues.get(key).ok_or(CrosswordError::ClueNotFound(*key))
    }

    /// Write a guess into the cells of a clue.
    ///
    /// The guess must be exactly as long as the answer and consist only of
    /// [`GUESS_CHARS`]. Letters of intersecting clues are overwritten. Nothing
    /// is written unless the whole guess is valid.
    pub fn guess(&mut self, key: &ClueKey, text: &str) -> Result<(), CrosswordError> {
        let clue = self
            .clues
            .get(key)
            .ok_or(CrosswordError::ClueNotFound(*key))?;

        let actual = text.chars().count();
        if actual != clue.len() {
            return Err(CrosswordError::LengthMismatch {
                expected: clue.len(),
                actual,
            });
        }
        if let Some(bad) = text.chars().find(|c| !GUESS_CHARS.contains(*c)) {
            return Err(CrosswordError::InvalidCharacter(bad));
        }

        let cells = text.chars().map(|c| match c {
            BLANK_CHAR => Cell::Blank,
            c => Cell::Letter(c),
        });
        Self::write_span(&mut self.grid, clue, cells);

        debug!("guessed {text} for {key}");
        Ok(())
    }

    /// Fill the cells of a clue with its answer, whatever they held before.
    pub fn reveal(&mut self, key: &ClueKey) -> Result<(), CrosswordError> {
        let clue = self
            .clues
            .get(key)
            .ok_or(CrosswordError::ClueNotFound(*key))?;

        Self::write_span(&mut self.grid, clue, clue.letters().map(Cell::Letter));

        debug!("revealed {key}");
        Ok(())
    }

    fn write_span(grid: &mut Grid, clue: &Clue, cells: impl Iterator<Item = Cell>) {
        for ((row, col), new_cell) in clue.positions().into_iter().zip(cells) {
            if let Some(cell) = grid.get_mut(row, col) {
                *cell = new_cell;
            }
        }
    }

    /// Offset of the first cell of a clue that does not hold the right letter.
    ///
    /// Returns `None` if the whole word is already correct.
    pub fn find_first_error(&self, key: &ClueKey) -> Result<Option<usize>, CrosswordError> {
        let clue = self.lookup(key)?;
        Ok(self.first_mismatch(clue))
    }

    fn first_mismatch(&self, clue: &Clue) -> Option<usize> {
        clue.positions()
            .into_iter()
            .zip(clue.letters())
            .position(|((row, col), expected)| {
                self.grid.get(row, col).and_then(Cell::letter) != Some(expected)
            })
    }

    /// Whether every clue's cells spell out its answer.
    pub fn is_solved(&self) -> bool {
        self.clues
            .values()
            .all(|clue| self.first_mismatch(clue).is_none())
    }

    /// Share of answer cells holding a letter, from 0 to 100.
    pub fn completion_percentage(&self) -> u8 {
        let (total, filled) = self
            .grid
            .cells()
            .iter()
            .flatten()
            .filter(|cell| !cell.is_blocked())
            .fold((0usize, 0usize), |(total, filled), cell| {
                (total + 1, filled + usize::from(cell.letter().is_some()))
            });
        if total == 0 {
            return 100;
        }
        ((filled * 100) / total) as u8
    }
}

impl fmt::Display for Crossword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.grid, f)
    }
}
