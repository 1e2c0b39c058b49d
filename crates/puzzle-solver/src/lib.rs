//! Breadth-first shortest-path solver for small puzzles.
//!
//! Any puzzle state implementing [`Configuration`] can be handed to
//! [`solve`], which returns the shortest sequence of states from the start to
//! a goal. Three puzzles are provided: the sliding-block board in [`jam`], the
//! letter-rotation puzzle in [`strings`] and the river crossing in
//! [`crossing`].

pub mod configuration;
pub mod crossing;
pub mod error;
pub mod jam;
pub mod loader;
pub mod solver;
pub mod strings;

// Re-export main types
pub use configuration::{Configuration, Neighbors};
pub use crossing::CrossingConfig;
pub use error::{PuzzleError, Result};
pub use jam::{Car, Coordinate, Direction, JamConfig, Orientation};
pub use loader::{load_board, load_board_str, BoardDescription};
pub use solver::{solve, SolverResult};
pub use strings::StringsConfig;
