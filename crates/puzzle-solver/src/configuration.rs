//! The contract every puzzle state implements so the solver can search it.

use std::fmt::Display;
use std::hash::Hash;

use smallvec::SmallVec;

/// Successor states of a single configuration.
///
/// Most puzzles here have a handful of legal moves per state, so the list
/// usually stays inline.
pub type Neighbors<C> = SmallVec<[C; 8]>;

/// One immutable state of a puzzle's search space.
///
/// Equality and hashing must be derived from the state's canonical data, never
/// from how the value was built: two values describing the same state have to
/// compare equal and hash identically, since the solver de-duplicates visited
/// states through a hash map.
pub trait Configuration: Clone + Eq + Hash + Display {
    /// True iff this state satisfies the puzzle's goal.
    fn is_solution(&self) -> bool;

    /// Every state reachable by exactly one legal move.
    ///
    /// The list must not contain duplicates. Its order is the order the solver
    /// discovers states in, which decides ties between equally short solutions.
    fn neighbors(&self) -> Neighbors<Self>;
}
