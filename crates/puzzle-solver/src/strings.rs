//! Letter-rotation puzzle: turn one uppercase string into another by rotating
//! a single letter one step forward or back through the alphabet per move.

use std::fmt;

use crate::configuration::{Configuration, Neighbors};
use crate::error::{PuzzleError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringsConfig {
    current: Vec<u8>,
    target: Vec<u8>,
}

impl StringsConfig {
    pub fn new(start: &str, finish: &str) -> Result<Self> {
        if start.len() != finish.len() {
            return Err(PuzzleError::InvalidStrings(format!(
                "{start:?} and {finish:?} differ in length"
            )));
        }
        if let Some(bad) = start
            .chars()
            .chain(finish.chars())
            .find(|c| !c.is_ascii_uppercase())
        {
            return Err(PuzzleError::InvalidStrings(format!(
                "{bad:?} is not an uppercase letter"
            )));
        }
        Ok(Self {
            current: start.as_bytes().to_vec(),
            target: finish.as_bytes().to_vec(),
        })
    }

    pub fn current(&self) -> &str {
        // Only ASCII letters are ever stored.
        std::str::from_utf8(&self.current).unwrap_or_default()
    }

    fn with_letter(&self, index: usize, letter: u8) -> Self {
        let mut current = self.current.clone();
        current[index] = letter;
        Self {
            current,
            target: self.target.clone(),
        }
    }
}

fn rotate_forward(letter: u8) -> u8 {
    if letter == b'Z' {
        b'A'
    } else {
        letter + 1
    }
}

fn rotate_back(letter: u8) -> u8 {
    if letter == b'A' {
        b'Z'
    } else {
        letter - 1
    }
}

impl Configuration for StringsConfig {
    fn is_solution(&self) -> bool {
        self.current == self.target
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        for (index, &letter) in self.current.iter().enumerate() {
            neighbors.push(self.with_letter(index, rotate_forward(letter)));
            neighbors.push(self.with_letter(index, rotate_back(letter)));
        }
        neighbors
    }
}

impl fmt::Display for StringsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.current())
    }
}
