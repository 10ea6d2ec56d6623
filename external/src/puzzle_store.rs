//! Loading puzzles from CSV files.
//!
//! A puzzle file has a header row followed by one row per clue:
//!
//! ```text
//! Row Index,Column Index,Down/Across,Answer,Clue
//! 0,0,A,SWORD,Blade with a hilt
//! 0,0,D,SLATE,Roofing stone
//! ```

use crate::error::ExternalError;
use log::debug;
use puzzler_core::{CROSSWORD_DIMENSION, Clue, Crossword, Direction};
use serde::Deserialize;
use std::{fs::File, io::Read, path::Path};

pub const ROW_COLUMN: &str = "Row Index";
pub const COL_COLUMN: &str = "Column Index";
pub const DIRECTION_COLUMN: &str = "Down/Across";
pub const ANSWER_COLUMN: &str = "Answer";
pub const CLUE_COLUMN: &str = "Clue";

/// Columns every puzzle file must have, in their conventional order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    ROW_COLUMN,
    COL_COLUMN,
    DIRECTION_COLUMN,
    ANSWER_COLUMN,
    CLUE_COLUMN,
];

/// One data row, before its fields are checked.
#[derive(Debug, Deserialize)]
struct ClueRow {
    #[serde(rename = "Row Index")]
    row: String,
    #[serde(rename = "Column Index")]
    col: String,
    #[serde(rename = "Down/Across")]
    direction: String,
    #[serde(rename = "Answer")]
    answer: String,
    #[serde(rename = "Clue")]
    text: String,
}

impl ClueRow {
    fn into_clue(self, line: u64) -> Result<Clue, ExternalError> {
        let format_error = |reason: String| ExternalError::Format { line, reason };

        let row = self
            .row
            .parse::<usize>()
            .map_err(|_| format_error(format!("invalid row index `{}`", self.row)))?;
        let col = self
            .col
            .parse::<usize>()
            .map_err(|_| format_error(format!("invalid column index `{}`", self.col)))?;
        if row >= CROSSWORD_DIMENSION || col >= CROSSWORD_DIMENSION {
            return Err(format_error(format!(
                "index ({row}, {col}) is outside the {CROSSWORD_DIMENSION}x{CROSSWORD_DIMENSION} grid"
            )));
        }

        let mut code = self.direction.chars();
        let direction = match (code.next(), code.next()) {
            (Some(c), None) => Direction::from_code(c),
            _ => None,
        }
        .ok_or_else(|| format_error(format!("orientation must be A or D, got `{}`", self.direction)))?;

        if self.answer.is_empty() {
            return Err(format_error("empty answer".to_string()));
        }
        if !self.answer.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format_error(format!(
                "answer `{}` must contain only letters",
                self.answer
            )));
        }

        Ok(Clue::new(row, col, direction, self.answer, self.text))
    }
}

/// Reads clue records from puzzle files.
pub struct PuzzleStore;

impl PuzzleStore {
    /// Load every clue from the puzzle file at `path`.
    ///
    /// Fails with [`ExternalError::NotFound`] if there is no such file and with
    /// [`ExternalError::Format`] if a column is missing or a row is malformed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Clue>, ExternalError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|err| match err.kind() {
            std::io::ErrorKind::NotFound => ExternalError::NotFound(path.to_path_buf()),
            _ => ExternalError::Io(err),
        })?;

        let clues = Self::from_reader(file)?;
        debug!("loaded {} clues from {}", clues.len(), path.display());
        Ok(clues)
    }

    /// Parse clue records from any CSV source, in file order.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<Clue>, ExternalError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = reader.headers().map_err(malformed)?.clone();
        if let Some(missing) = REQUIRED_COLUMNS
            .iter()
            .find(|column| !headers.iter().any(|h| h == **column))
        {
            return Err(ExternalError::Format {
                line: 1,
                reason: format!("missing column `{missing}`"),
            });
        }

        let mut clues = Vec::new();
        for result in reader.records() {
            let record = result.map_err(malformed)?;
            let line = record.position().map_or(0, |p| p.line());
            let row: ClueRow = record
                .deserialize(Some(&headers))
                .map_err(malformed)?;
            clues.push(row.into_clue(line)?);
        }

        Ok(clues)
    }
}

/// Load a puzzle file and build the crossword it describes.
pub fn load_crossword<P: AsRef<Path>>(path: P) -> Result<Crossword, ExternalError> {
    let clues = PuzzleStore::load(path)?;
    Ok(Crossword::new(CROSSWORD_DIMENSION, clues)?)
}

/// Report a CSV error as a problem with the file's contents, unless the
/// underlying read itself failed.
fn malformed(err: csv::Error) -> ExternalError {
    if err.is_io_error() {
        return ExternalError::Csv(err);
    }
    ExternalError::Format {
        line: err.position().map_or(0, |p| p.line()),
        reason: err.to_string(),
    }
}
