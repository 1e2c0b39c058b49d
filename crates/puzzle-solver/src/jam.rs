//! Sliding-block ("traffic jam") board.
//!
//! Cars are rigid, axis-aligned pieces that slide one cell at a time along
//! their own axis. The board is solved when the target car reaches the far
//! edge of the board.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::configuration::{Configuration, Neighbors};
use crate::error::{PuzzleError, Result};

/// Symbol of the car that has to reach the edge.
pub const TARGET: char = 'X';

/// Direction a car can slide in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// (row, col) offset of one step
    pub fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Cell position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring cell, or `None` when it would fall off the top or left edge
    pub fn offset(self, direction: Direction) -> Option<Coordinate> {
        let (dr, dc) = direction.delta();
        Some(Coordinate {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A car occupying the inclusive span `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Car {
    pub symbol: char,
    pub start: Coordinate,
    pub end: Coordinate,
}

impl Car {
    pub fn new(symbol: char, start: Coordinate, end: Coordinate) -> Self {
        Self { symbol, start, end }
    }

    /// A car whose span stays on one row is horizontal, including single-cell cars.
    pub fn orientation(&self) -> Orientation {
        if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    pub fn is_horizontal(&self) -> bool {
        self.orientation() == Orientation::Horizontal
    }

    /// Number of cells covered. Only meaningful for an ordered span.
    pub fn length(&self) -> usize {
        match self.orientation() {
            Orientation::Horizontal => self.end.col - self.start.col + 1,
            Orientation::Vertical => self.end.row - self.start.row + 1,
        }
    }

    /// The two directions along this car's axis, backward first
    pub fn directions(&self) -> [Direction; 2] {
        match self.orientation() {
            Orientation::Horizontal => [Direction::Left, Direction::Right],
            Orientation::Vertical => [Direction::Up, Direction::Down],
        }
    }

    pub fn covers(&self, cell: Coordinate) -> bool {
        (self.start.row..=self.end.row).contains(&cell.row)
            && (self.start.col..=self.end.col).contains(&cell.col)
    }

    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (self.start.row..=self.end.row).flat_map(move |row| {
            (self.start.col..=self.end.col).map(move |col| Coordinate::new(row, col))
        })
    }

    /// The cell this car would move into when sliding in `direction`
    pub fn leading_cell(&self, direction: Direction) -> Option<Coordinate> {
        match direction {
            Direction::Up | Direction::Left => self.start.offset(direction),
            Direction::Down | Direction::Right => self.end.offset(direction),
        }
    }

    /// The same car translated one cell
    pub fn shifted(&self, direction: Direction) -> Option<Car> {
        Some(Car {
            symbol: self.symbol,
            start: self.start.offset(direction)?,
            end: self.end.offset(direction)?,
        })
    }

    fn validate(&self, rows: usize, cols: usize) -> Result<()> {
        if self.start.row != self.end.row && self.start.col != self.end.col {
            return Err(PuzzleError::DiagonalSpan(self.symbol));
        }
        if self.start > self.end {
            return Err(PuzzleError::ReversedSpan(self.symbol));
        }
        if self.end.row >= rows || self.end.col >= cols {
            return Err(PuzzleError::OutOfBounds {
                symbol: self.symbol,
                rows,
                cols,
            });
        }
        Ok(())
    }
}

/// One state of a sliding-block board.
///
/// The car list is authoritative and kept sorted by symbol. The grid is a
/// projection of it, rebuilt in full whenever a board is constructed.
#[derive(Debug, Clone)]
pub struct JamConfig {
    rows: usize,
    cols: usize,
    cars: Vec<Car>,
    grid: Box<[Option<char>]>,
}

impl JamConfig {
    /// Build a board, rejecting cars that overlap, repeat a symbol, run
    /// diagonally or backwards, or leave the board.
    pub fn new(rows: usize, cols: usize, mut cars: Vec<Car>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(PuzzleError::EmptyBoard { rows, cols });
        }

        cars.sort_by_key(|car| car.symbol);
        if let Some(pair) = cars.windows(2).find(|w| w[0].symbol == w[1].symbol) {
            return Err(PuzzleError::DuplicateSymbol(pair[0].symbol));
        }
        for car in &cars {
            car.validate(rows, cols)?;
        }

        let grid = derive_grid(rows, cols, &cars)?;
        Ok(Self {
            rows,
            cols,
            cars,
            grid,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cars sorted by symbol
    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn car(&self, symbol: char) -> Option<&Car> {
        self.cars
            .binary_search_by_key(&symbol, |car| car.symbol)
            .ok()
            .map(|i| &self.cars[i])
    }

    pub fn target(&self) -> Option<&Car> {
        self.car(TARGET)
    }

    /// Symbol of the car on `cell`; `None` for an empty or off-board cell
    pub fn cell(&self, cell: Coordinate) -> Option<char> {
        self.index(cell).and_then(|i| self.grid[i])
    }

    fn index(&self, cell: Coordinate) -> Option<usize> {
        (cell.row < self.rows && cell.col < self.cols).then(|| cell.row * self.cols + cell.col)
    }

    fn is_free(&self, cell: Coordinate) -> bool {
        self.index(cell).map_or(false, |i| self.grid[i].is_none())
    }

    /// Copy of this board with the car at `index` replaced
    fn with_car(&self, index: usize, car: Car) -> Result<Self> {
        let mut cars = self.cars.clone();
        cars[index] = car;
        JamConfig::new(self.rows, self.cols, cars)
    }
}

fn derive_grid(rows: usize, cols: usize, cars: &[Car]) -> Result<Box<[Option<char>]>> {
    let mut grid = vec![None; rows * cols].into_boxed_slice();
    for car in cars {
        for cell in car.cells() {
            let slot = &mut grid[cell.row * cols + cell.col];
            if let Some(other) = *slot {
                return Err(PuzzleError::Overlap(other, car.symbol, cell.row, cell.col));
            }
            *slot = Some(car.symbol);
        }
    }
    Ok(grid)
}

impl PartialEq for JamConfig {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows && self.cols == other.cols && self.cars == other.cars
    }
}

impl Eq for JamConfig {}

impl Hash for JamConfig {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rows.hash(state);
        self.cols.hash(state);
        self.cars.hash(state);
    }
}

impl Configuration for JamConfig {
    fn is_solution(&self) -> bool {
        self.target().map_or(false, |car| match car.orientation() {
            Orientation::Horizontal => car.end.col == self.cols - 1,
            Orientation::Vertical => car.end.row == self.rows - 1,
        })
    }

    fn neighbors(&self) -> Neighbors<Self> {
        let mut neighbors = Neighbors::new();
        for (index, car) in self.cars.iter().enumerate() {
            for direction in car.directions() {
                let open = car
                    .leading_cell(direction)
                    .map_or(false, |cell| self.is_free(cell));
                if !open {
                    continue;
                }
                // Sliding into a free on-board cell keeps the board valid.
                if let Some(next) = car
                    .shifted(direction)
                    .and_then(|moved| self.with_car(index, moved).ok())
                {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }
}

impl fmt::Display for JamConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.chunks(self.cols).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", cell.unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;
    use std::collections::hash_map::DefaultHasher;

    fn car(symbol: char, r1: usize, c1: usize, r2: usize, c2: usize) -> Car {
        Car::new(symbol, Coordinate::new(r1, c1), Coordinate::new(r2, c2))
    }

    fn hash_of(board: &JamConfig) -> u64 {
        let mut hasher = DefaultHasher::new();
        board.hash(&mut hasher);
        hasher.finish()
    }

    /// X X A
    /// . . A
    /// . . .
    fn create_one_blocker_board() -> JamConfig {
        JamConfig::new(3, 3, vec![car('X', 0, 0, 0, 1), car('A', 0, 2, 1, 2)]).unwrap()
    }

    /// . . . .
    /// X X A .
    /// . . A .
    /// . B B .
    fn create_two_blocker_board() -> JamConfig {
        JamConfig::new(
            4,
            4,
            vec![
                car('X', 1, 0, 1, 1),
                car('A', 1, 2, 2, 2),
                car('B', 3, 1, 3, 2),
            ],
        )
        .unwrap()
    }

    /// Changed car between two boards that differ by a single move
    fn moved_car(before: &JamConfig, after: &JamConfig) -> (Car, Car) {
        let changed: Vec<(Car, Car)> = before
            .cars()
            .iter()
            .zip(after.cars())
            .filter(|(a, b)| a != b)
            .map(|(a, b)| (*a, *b))
            .collect();
        assert_eq!(changed.len(), 1);
        changed[0]
    }

    /// Fewest moves to a solution, by depth-limited search without memory.
    fn min_moves_exhaustive(board: &JamConfig, max_depth: usize) -> Option<usize> {
        fn reachable(board: &JamConfig, depth: usize) -> bool {
            board.is_solution()
                || (depth > 0 && board.neighbors().iter().any(|n| reachable(n, depth - 1)))
        }
        (0..=max_depth).find(|&depth| reachable(board, depth))
    }

    fn assert_grid_consistent(board: &JamConfig) {
        let mut occupied = 0;
        for row in 0..board.rows() {
            for col in 0..board.cols() {
                let cell = Coordinate::new(row, col);
                let covering: Vec<char> = board
                    .cars()
                    .iter()
                    .filter(|c| c.covers(cell))
                    .map(|c| c.symbol)
                    .collect();
                assert!(covering.len() <= 1, "{cell} covered by {covering:?}");
                assert_eq!(board.cell(cell), covering.first().copied());
                if board.cell(cell).is_some() {
                    occupied += 1;
                }
            }
        }
        let total_length: usize = board.cars().iter().map(Car::length).sum();
        assert_eq!(occupied, total_length);
    }

    #[test]
    fn test_car_shape() {
        let horizontal = car('X', 2, 1, 2, 3);
        assert!(horizontal.is_horizontal());
        assert_eq!(horizontal.length(), 3);
        assert_eq!(horizontal.cells().count(), 3);

        let vertical = car('A', 0, 4, 1, 4);
        assert_eq!(vertical.orientation(), Orientation::Vertical);
        assert_eq!(vertical.length(), 2);
        assert_eq!(vertical.directions(), [Direction::Up, Direction::Down]);
        assert_eq!(vertical.leading_cell(Direction::Up), None);
        assert_eq!(vertical.leading_cell(Direction::Down), Some(Coordinate::new(2, 4)));

        assert!(car('S', 1, 1, 1, 1).is_horizontal());
    }

    #[test]
    fn test_grid_projection() {
        let board = create_one_blocker_board();
        assert_eq!(board.cell(Coordinate::new(0, 0)), Some('X'));
        assert_eq!(board.cell(Coordinate::new(1, 2)), Some('A'));
        assert_eq!(board.cell(Coordinate::new(2, 2)), None);
        assert_eq!(board.cell(Coordinate::new(3, 0)), None);
        assert_eq!(board.to_string(), "X X A\n. . A\n. . .");
    }

    #[test]
    fn test_equality_ignores_input_order() {
        let a = JamConfig::new(3, 3, vec![car('X', 0, 0, 0, 1), car('A', 0, 2, 1, 2)]).unwrap();
        let b = JamConfig::new(3, 3, vec![car('A', 0, 2, 1, 2), car('X', 0, 0, 0, 1)]).unwrap();

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, a.neighbors()[0]);
    }

    #[test]
    fn test_rejects_invalid_boards() {
        assert!(matches!(
            JamConfig::new(0, 3, vec![]),
            Err(PuzzleError::EmptyBoard { .. })
        ));
        assert!(matches!(
            JamConfig::new(3, 3, vec![car('X', 0, 0, 0, 1), car('X', 2, 0, 2, 1)]),
            Err(PuzzleError::DuplicateSymbol('X'))
        ));
        assert!(matches!(
            JamConfig::new(3, 3, vec![car('A', 0, 0, 1, 1)]),
            Err(PuzzleError::DiagonalSpan('A'))
        ));
        assert!(matches!(
            JamConfig::new(3, 3, vec![car('A', 0, 2, 0, 0)]),
            Err(PuzzleError::ReversedSpan('A'))
        ));
        assert!(matches!(
            JamConfig::new(3, 3, vec![car('A', 0, 1, 0, 3)]),
            Err(PuzzleError::OutOfBounds { symbol: 'A', .. })
        ));
        assert!(matches!(
            JamConfig::new(3, 3, vec![car('A', 0, 0, 0, 1), car('B', 0, 1, 1, 1)]),
            Err(PuzzleError::Overlap('A', 'B', 0, 1))
        ));
    }

    #[test]
    fn test_neighbors_single_cell_shifts() {
        let board = create_one_blocker_board();
        // X is stuck against the wall and A; A can only drop down
        let neighbors = board.neighbors();
        assert_eq!(neighbors.len(), 1);
        assert_eq!(*neighbors[0].car('A').unwrap(), car('A', 1, 2, 2, 2));
        assert_eq!(neighbors[0].car('X'), board.car('X'));

        let open = JamConfig::new(1, 4, vec![car('X', 0, 1, 0, 2)]).unwrap();
        let moved: Vec<Car> = open.neighbors().iter().map(|b| *b.car('X').unwrap()).collect();
        assert_eq!(moved, vec![car('X', 0, 0, 0, 1), car('X', 0, 2, 0, 3)]);
    }

    #[test]
    fn test_neighbor_moves_are_reversible() {
        for board in [create_one_blocker_board(), create_two_blocker_board()] {
            for next in board.neighbors() {
                let (before, after) = moved_car(&board, &next);
                let direction = before
                    .directions()
                    .into_iter()
                    .find(|&d| before.shifted(d) == Some(after))
                    .unwrap();

                let undone = after.shifted(direction.opposite()).unwrap();
                assert_eq!(undone, before);
                assert!(next.neighbors().contains(&board));
            }
        }
    }

    #[test]
    fn test_grid_consistent_along_solution() {
        let result = solve(create_two_blocker_board());
        for board in result.path.unwrap() {
            assert_grid_consistent(&board);
            for next in board.neighbors() {
                assert_grid_consistent(&next);
            }
        }
    }

    #[test]
    fn test_vertical_target_goal() {
        let board = JamConfig::new(3, 2, vec![car('X', 1, 0, 2, 0)]).unwrap();
        assert!(board.is_solution());

        let board = JamConfig::new(3, 2, vec![car('X', 0, 0, 1, 0)]).unwrap();
        assert!(!board.is_solution());
    }

    #[test]
    fn test_board_without_target_never_solved() {
        let board = JamConfig::new(1, 3, vec![car('A', 0, 0, 0, 1)]).unwrap();
        assert!(!board.is_solution());
        assert!(!solve(board).is_found());
    }

    #[test]
    fn test_already_at_edge() {
        let board = JamConfig::new(2, 3, vec![car('X', 0, 1, 0, 2), car('A', 1, 0, 1, 1)]).unwrap();
        let result = solve(board.clone());

        assert_eq!(result.moves(), Some(0));
        assert_eq!(result.path.unwrap(), vec![board]);
        assert_eq!(result.unique_visited, 1);
    }

    #[test]
    fn test_single_blocker() {
        let result = solve(create_one_blocker_board());

        assert_eq!(result.moves(), Some(2));
        let path = result.path.as_ref().unwrap();
        assert_eq!(*path[1].car('A').unwrap(), car('A', 1, 2, 2, 2));
        assert_eq!(*path[2].car('X').unwrap(), car('X', 0, 1, 0, 2));
        // start, A dropped, X advanced
        assert_eq!(result.unique_visited, 3);
        // start, then A dropped; then A raised back and X advanced
        assert_eq!(result.total_generated, 4);
    }

    #[test]
    fn test_no_legal_move() {
        let board = JamConfig::new(1, 3, vec![car('X', 0, 0, 0, 1), car('A', 0, 2, 0, 2)]).unwrap();
        assert!(board.neighbors().is_empty());

        let result = solve(board);
        assert!(!result.is_found());
        assert_eq!(result.unique_visited, 1);
        assert_eq!(result.total_generated, 1);
    }

    #[test]
    fn test_solution_is_minimal() {
        let board = create_two_blocker_board();
        let result = solve(board.clone());

        // B left, A down, X right twice
        assert_eq!(result.moves(), Some(4));
        assert_eq!(result.moves(), min_moves_exhaustive(&board, 6));
        assert!(result.path.unwrap().last().unwrap().is_solution());
    }

    #[test]
    fn test_repeated_solves_agree() {
        let a = solve(create_two_blocker_board());
        let b = solve(create_two_blocker_board());

        assert_eq!(a.path, b.path);
        assert_eq!(a.unique_visited, b.unique_visited);
        assert_eq!(a.total_generated, b.total_generated);
    }
}
