mod error;
pub use error::ExternalError;

mod puzzle_store;
pub use puzzle_store::{PuzzleStore, REQUIRED_COLUMNS, load_crossword};
