use puzzler_core::CrosswordError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExternalError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid puzzle file (line {line}): {reason}")]
    Format { line: u64, reason: String },

    #[error("Invalid puzzle: {0}")]
    Crossword(#[from] CrosswordError),
}
