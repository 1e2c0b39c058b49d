//! Error types for building puzzle configurations.

use thiserror::Error;

/// Everything that can go wrong before a start configuration exists.
///
/// Failing to find a solution is not an error; see [`crate::SolverResult`].
#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("line {line}: expected `rows cols`, got {found:?}")]
    InvalidHeader { line: usize, found: String },

    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber { line: usize, value: String },

    #[error("line {line}: expected `SYMBOL row col row col`, got {found:?}")]
    InvalidRecord { line: usize, found: String },

    #[error("declared {declared} cars but found {found} records")]
    CarCountMismatch { declared: usize, found: usize },

    #[error("board must have at least one row and one column, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    #[error("car {0:?} appears more than once")]
    DuplicateSymbol(char),

    #[error("car {0:?} is neither horizontal nor vertical")]
    DiagonalSpan(char),

    #[error("car {0:?} ends before it starts")]
    ReversedSpan(char),

    #[error("car {symbol:?} leaves the {rows}x{cols} board")]
    OutOfBounds { symbol: char, rows: usize, cols: usize },

    #[error("cars {0:?} and {1:?} overlap at ({2}, {3})")]
    Overlap(char, char, usize, usize),

    #[error("invalid string puzzle: {0}")]
    InvalidStrings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
