//! River crossing: ferry every pup and wolf from the left bank to the right.
//!
//! Each trip the boat carries one pup, two pups, or a single wolf to the
//! opposite bank. Only animals standing on the boat's bank can board.

use std::fmt;

use crate::configuration::{Configuration, Neighbors};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bank {
    Left,
    Right,
}

impl Bank {
    pub fn opposite(self) -> Bank {
        match self {
            Bank::Left => Bank::Right,
            Bank::Right => Bank::Left,
        }
    }
}

/// Animal count on one bank
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Shore {
    pub pups: u32,
    pub wolves: u32,
}

impl Shore {
    pub fn is_empty(&self) -> bool {
        self.pups == 0 && self.wolves == 0
    }
}

/// Boat loads that may cross, as (pups, wolves)
const LOADS: [(u32, u32); 3] = [(1, 0), (2, 0), (0, 1)];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CrossingConfig {
    left: Shore,
    right: Shore,
    boat: Bank,
}

impl CrossingConfig {
    /// Everyone waiting on the left bank with the boat
    pub fn new(pups: u32, wolves: u32) -> Self {
        Self {
            left: Shore { pups, wolves },
            right: Shore::default(),
            boat: Bank::Left,
        }
    }

    pub fn left(&self) -> Shore {
        self.left
    }

    pub fn right(&self) -> Shore {
        self.right
    }

    pub fn boat(&self) -> Bank {
        self.boat
    }

    /// Sail the boat across with the given load, if that many animals are aboard
    fn sail(&self, pups: u32, wolves: u32) -> Option<Self> {
        let (mut from, mut to) = match self.boat {
            Bank::Left => (self.left, self.right),
            Bank::Right => (self.right, self.left),
        };
        from.pups = from.pups.checked_sub(pups)?;
        from.wolves = from.wolves.checked_sub(wolves)?;
        to.pups += pups;
        to.wolves += wolves;

        let (left, right) = match self.boat {
            Bank::Left => (from, to),
            Bank::Right => (to, from),
        };
        Some(Self {
            left,
            right,
            boat: self.boat.opposite(),
        })
    }
}

impl Configuration for CrossingConfig {
    fn is_solution(&self) -> bool {
        self.left.is_empty()
    }

    fn neighbors(&self) -> Neighbors<Self> {
        LOADS
            .iter()
            .filter_map(|&(pups, wolves)| self.sail(pups, wolves))
            .collect()
    }
}

impl fmt::Display for CrossingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (left_boat, right_boat) = match self.boat {
            Bank::Left => ("(BOAT) ", ""),
            Bank::Right => ("", " (BOAT)"),
        };
        write!(
            f,
            "{left_boat}left=[{} pups, {} wolves]  right=[{} pups, {} wolves]{right_boat}",
            self.left.pups, self.left.wolves, self.right.pups, self.right.wolves
        )
    }
}
