//! Parsed representation of a crane input file

use crate::yard::Yard;
use std::fmt;

/// One instruction of the rearrangement procedure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Number of crates to relocate
    pub count: usize,
    /// 1-based stack the crates come from
    pub source: usize,
    /// 1-based stack the crates go to
    pub destination: usize,
    /// 1-based input line the instruction was read from
    pub line: usize,
}

impl Move {
    pub fn new(count: usize, source: usize, destination: usize, line: usize) -> Self {
        Move {
            count,
            source,
            destination,
            line,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "move {} from {} to {}",
            self.count, self.source, self.destination
        )
    }
}

/// Everything read from one input: the starting yard and the procedure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub yard: Yard,
    pub moves: Vec<Move>,
}
