pub mod clue;
pub mod crossword;
pub mod direction;
pub mod error;
pub mod grid;

pub use clue::{Clue, ClueKey};
pub use crossword::{CROSSWORD_DIMENSION, Crossword, GUESS_CHARS};
pub use direction::Direction;
pub use error::CrosswordError;
pub use grid::{BLANK_CHAR, BLOCK_CHAR, Cell, Grid};
