use crate::ClueKey;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CrosswordError {
    #[error("No clue found at {0}")]
    ClueNotFound(ClueKey),

    #[error("Guess length does not match the length of the clue (expected {expected}, got {actual})")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Guess contains invalid character {0:?}")]
    InvalidCharacter(char),

    #[error("Duplicate clue at {0}")]
    DuplicateClue(ClueKey),

    #[error("Clue at {key} extends beyond the {dimension}x{dimension} grid")]
    OutOfBounds { key: ClueKey, dimension: usize },

    #[error("Clue at {0} has an empty answer")]
    EmptyAnswer(ClueKey),

    #[error("Clue at {0} has an answer with characters outside A-Z")]
    InvalidAnswer(ClueKey),
}
