//! The crane: applies a procedure to a yard
//!
//! Moves are applied strictly in order, each against the state left by the
//! previous one. A move is checked in full before anything is touched, so a
//! failing move leaves every stack as it was and halts the run.

use super::errors::SimulationError;
use super::policy::MovePolicy;
use crate::parser::ast::Move;
use crate::yard::{Stack, Yard};
use tracing::{debug, warn};

/// Crane operating under a single [`MovePolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crane {
    policy: MovePolicy,
}

impl Crane {
    pub fn new(policy: MovePolicy) -> Self {
        Crane { policy }
    }

    pub fn policy(&self) -> MovePolicy {
        self.policy
    }

    /// Apply every move in order, stopping at the first failure
    pub fn apply(&self, yard: &mut Yard, moves: &[Move]) -> Result<(), SimulationError> {
        #[cfg(debug_assertions)]
        let inventory = yard.inventory();

        for (index, mv) in moves.iter().enumerate() {
            self.execute(yard, index, mv)?;
        }

        #[cfg(debug_assertions)]
        debug_assert_eq!(inventory, yard.inventory(), "crates must be conserved");

        Ok(())
    }

    /// Apply a single move. `move_index` is its 0-based position in the
    /// procedure and only used for error reporting.
    pub fn execute(
        &self,
        yard: &mut Yard,
        move_index: usize,
        mv: &Move,
    ) -> Result<(), SimulationError> {
        for stack in [mv.source, mv.destination] {
            if !yard.contains(stack) {
                return Err(SimulationError::UnknownStack {
                    move_index,
                    line: mv.line,
                    stack,
                    stack_count: yard.len(),
                });
            }
        }

        let available = yard.stack(mv.source).map_or(0, Stack::depth);
        if mv.count > available {
            warn!(move_index, line = mv.line, %mv, available, "source stack underflow");
            return Err(SimulationError::Underflow {
                move_index,
                line: mv.line,
                stack: mv.source,
                requested: mv.count,
                available,
            });
        }

        debug!(
            move_index,
            count = mv.count,
            source = mv.source,
            destination = mv.destination,
            policy = %self.policy,
            "applying move"
        );

        // Same stack: either policy puts the crates back where they were
        let Some((source, destination)) = yard.pair_mut(mv.source, mv.destination) else {
            return Ok(());
        };

        match self.policy {
            MovePolicy::SingleCrateAtATime => {
                for _ in 0..mv.count {
                    if let Some(label) = source.pop() {
                        destination.push(label);
                    }
                }
            }
            MovePolicy::BulkPreserveOrder => {
                if let Some(block) = source.lift(mv.count) {
                    destination.place(block);
                }
            }
        }

        Ok(())
    }
}
