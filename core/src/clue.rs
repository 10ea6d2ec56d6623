use crate::Direction;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a clue: where its first letter sits and which way it runs.
///
/// Field order drives the derived ordering: all across clues come before all
/// down clues, and within a direction clues sort by row and then by column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClueKey {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl ClueKey {
    pub fn new(row: usize, col: usize, direction: Direction) -> Self {
        Self {
            direction,
            row,
            col,
        }
    }
}

impl fmt::Display for ClueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}", self.row, self.col, self.direction)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    /// Uppercase answer; its length is the length of the word in the grid.
    pub answer: String,
    /// Clue description shown to the player.
    pub text: String,
}

impl Clue {
    pub fn new(row: usize, col: usize, direction: Direction, answer: String, text: String) -> Self {
        Self {
            row,
            col,
            direction,
            answer: answer.to_uppercase(),
            text,
        }
    }

    pub fn key(&self) -> ClueKey {
        ClueKey::new(self.row, self.col, self.direction)
    }

    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    pub fn letters(&self) -> impl Iterator<Item = char> + '_ {
        self.answer.chars()
    }

    pub fn answer_letter(&self, offset: usize) -> Option<char> {
        self.answer.chars().nth(offset)
    }

    /// Coordinates of the last letter, or `None` if they overflow `usize`
    /// or the answer is empty.
    pub fn end(&self) -> Option<(usize, usize)> {
        let last = self.len().checked_sub(1)?;
        self.offset(last)
    }

    /// Grid coordinates covered by the answer, starting at the first letter.
    ///
    /// Coordinates that would overflow `usize` are left out.
    pub fn positions(&self) -> Vec<(usize, usize)> {
        (0..self.len()).map_while(|i| self.offset(i)).collect()
    }

    fn offset(&self, i: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.direction.delta();
        Some((
            self.row.checked_add(dr * i)?,
            self.col.checked_add(dc * i)?,
        ))
    }

    /// Describe the clue followed by its answer, e.g. `(0, 0) Across: Greeting --- HELLO`.
    pub fn describe_with_answer(&self) -> String {
        format!("{} --- {}", self, self.answer)
    }
}

/// Renders `(row, col) Direction: text`. The answer is never included.
impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {}: {}", self.row, self.col, self.direction, self.text)
    }
}
