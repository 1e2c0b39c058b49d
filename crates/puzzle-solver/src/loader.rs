//! Board descriptions for the sliding-block puzzle.
//!
//! Two input formats build the same [`BoardDescription`]:
//!
//! ```text
//! 6 6          rows cols
//! 2            number of cars
//! X 2 0 2 1    symbol, start row/col, end row/col
//! A 0 2 2 2
//! ```
//!
//! or its JSON equivalent:
//!
//! ```json
//! {"rows": 6, "cols": 6, "cars": [{"symbol": "X", "start": {"row": 2, "col": 0}, "end": {"row": 2, "col": 1}}]}
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{PuzzleError, Result};
use crate::jam::{Car, Coordinate, JamConfig};

/// Unvalidated board as read from input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDescription {
    pub rows: usize,
    pub cols: usize,
    pub cars: Vec<Car>,
}

impl BoardDescription {
    /// Parse the whitespace-separated text format.
    ///
    /// Blank lines are skipped. The declared car count must match the number
    /// of car records exactly.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(i, line)| (i + 1, line.trim()))
            .filter(|(_, line)| !line.is_empty());

        let (line_no, header) = lines.next().ok_or(PuzzleError::InvalidHeader {
            line: 1,
            found: String::new(),
        })?;
        let dims: Vec<&str> = header.split_whitespace().collect();
        let [rows, cols] = dims[..] else {
            return Err(PuzzleError::InvalidHeader {
                line: line_no,
                found: header.to_string(),
            });
        };
        let rows = parse_number(rows, line_no)?;
        let cols = parse_number(cols, line_no)?;

        let (line_no, count) = lines.next().ok_or(PuzzleError::InvalidNumber {
            line: line_no + 1,
            value: String::new(),
        })?;
        let declared: usize = parse_number(count, line_no)?;

        let cars = lines
            .map(|(line_no, line)| parse_car(line, line_no))
            .collect::<Result<Vec<Car>>>()?;
        if cars.len() != declared {
            return Err(PuzzleError::CarCountMismatch {
                declared,
                found: cars.len(),
            });
        }

        Ok(Self { rows, cols, cars })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate and build the start configuration
    pub fn into_config(self) -> Result<JamConfig> {
        JamConfig::new(self.rows, self.cols, self.cars)
    }
}

impl FromStr for BoardDescription {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_number<T: FromStr>(value: &str, line: usize) -> Result<T> {
    value.parse().map_err(|_| PuzzleError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

fn parse_car(line: &str, line_no: usize) -> Result<Car> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let invalid = || PuzzleError::InvalidRecord {
        line: line_no,
        found: line.to_string(),
    };

    let [symbol, r1, c1, r2, c2] = fields[..] else {
        return Err(invalid());
    };
    let mut chars = symbol.chars();
    let (Some(symbol), None) = (chars.next(), chars.next()) else {
        return Err(invalid());
    };

    Ok(Car::new(
        symbol,
        Coordinate::new(parse_number(r1, line_no)?, parse_number(c1, line_no)?),
        Coordinate::new(parse_number(r2, line_no)?, parse_number(c2, line_no)?),
    ))
}

/// Load a board from text, picking JSON when the content starts with `{`
pub fn load_board_str(content: &str) -> Result<JamConfig> {
    let description = if content.trim_start().starts_with('{') {
        BoardDescription::from_json(content)?
    } else {
        BoardDescription::parse(content)?
    };
    debug!(
        rows = description.rows,
        cols = description.cols,
        cars = description.cars.len(),
        "parsed board description"
    );
    description.into_config()
}

pub fn load_board(path: &Path) -> Result<JamConfig> {
    let content = fs::read_to_string(path)?;
    load_board_str(&content)
}
