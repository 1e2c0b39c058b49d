//! Breadth-first shortest-path search over configurations.
//!
//! The solver explores states in order of their distance from the start and
//! records a predecessor for each state the first time it is discovered, so
//! the path it reconstructs has the fewest moves of any path to a goal.

use std::collections::hash_map::Entry;
use std::collections::VecDeque;
use std::time::Instant;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::configuration::Configuration;

/// Result of a search
#[derive(Debug, Clone)]
pub struct SolverResult<C> {
    /// Start-to-goal states, or `None` if no goal is reachable
    pub path: Option<Vec<C>>,
    /// Every configuration produced, duplicates included, plus the start
    pub total_generated: usize,
    /// Distinct configurations discovered, start included
    pub unique_visited: usize,
    /// Time elapsed in milliseconds
    pub time_elapsed_ms: u64,
}

impl<C> SolverResult<C> {
    /// Whether a goal state was reached
    pub fn is_found(&self) -> bool {
        self.path.is_some()
    }

    /// Number of moves in the solution (0 when the start is already solved)
    pub fn moves(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }
}

/// Find a shortest path from `start` to any state satisfying
/// [`Configuration::is_solution`].
///
/// Ties between equally short solutions are broken by discovery order: the
/// frontier is FIFO and neighbors are enqueued in the order the configuration
/// yields them.
pub fn solve<C: Configuration>(start: C) -> SolverResult<C> {
    let start_time = Instant::now();

    // States are interned once; links between them are arena indices.
    let mut states: Vec<C> = vec![start.clone()];
    let mut predecessors: Vec<Option<usize>> = vec![None];
    let mut seen: FxHashMap<C, usize> = FxHashMap::default();
    seen.insert(start, 0);

    let mut total_generated: usize = 1;

    let mut frontier: VecDeque<usize> = VecDeque::new();
    frontier.push_back(0);

    while let Some(&head) = frontier.front() {
        if states[head].is_solution() {
            break;
        }
        frontier.pop_front();

        for neighbor in states[head].neighbors() {
            total_generated += 1;

            if let Entry::Vacant(slot) = seen.entry(neighbor) {
                let id = states.len();
                states.push(slot.key().clone());
                slot.insert(id);
                predecessors.push(Some(head));
                frontier.push_back(id);
            }
        }
    }

    let unique_visited = states.len();
    drop(seen);

    let path = frontier
        .front()
        .map(|&goal| reconstruct_path(&states, &predecessors, goal));

    let time_elapsed_ms = start_time.elapsed().as_millis() as u64;
    debug!(
        found = path.is_some(),
        moves = path.as_ref().map(|p| p.len() - 1),
        total_generated,
        unique_visited,
        time_elapsed_ms,
        "search finished"
    );

    SolverResult {
        path,
        total_generated,
        unique_visited,
        time_elapsed_ms,
    }
}

/// Walk predecessor links back from `goal` and return the states start-first.
fn reconstruct_path<C: Clone>(states: &[C], predecessors: &[Option<usize>], goal: usize) -> Vec<C> {
    let mut chain = Vec::new();
    let mut node = Some(goal);
    while let Some(id) = node {
        chain.push(id);
        node = predecessors[id];
    }
    chain.iter().rev().map(|&id| states[id].clone()).collect()
}
