//! Simulation error types
//!
//! Every [`SimulationError`] is fatal for the run: the crane stops at the
//! offending move and does not attempt the rest of the procedure. The yard is
//! left exactly as it was before that move.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    /// The source stack holds fewer crates than the move asks for
    #[error("move {move_index} (line {line}): cannot take {requested} crate(s) from stack {stack}, it holds {available}")]
    Underflow {
        move_index: usize,
        line: usize,
        stack: usize,
        requested: usize,
        available: usize,
    },

    /// The move names a stack the yard does not have
    #[error("move {move_index} (line {line}): stack {stack} does not exist, the yard has {stack_count}")]
    UnknownStack {
        move_index: usize,
        line: usize,
        stack: usize,
        stack_count: usize,
    },
}

impl SimulationError {
    /// 0-based index of the failing move within the procedure
    pub fn move_index(&self) -> usize {
        match self {
            SimulationError::Underflow { move_index, .. }
            | SimulationError::UnknownStack { move_index, .. } => *move_index,
        }
    }

    pub fn line(&self) -> usize {
        match self {
            SimulationError::Underflow { line, .. } | SimulationError::UnknownStack { line, .. } => {
                *line
            }
        }
    }
}
