//! Step-wise execution for the viewer
//!
//! [`Replay`] walks a procedure one move at a time. It keeps only the
//! starting yard and the current one: stepping backward rebuilds the current
//! yard by running the crane again from the start, so no per-step history is
//! stored.

use super::engine::Crane;
use super::errors::SimulationError;
use super::policy::MovePolicy;
use crate::parser::ast::Move;
use crate::yard::Yard;
use thiserror::Error;

/// Why a step could not be taken
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StepError {
    #[error("already at the first step")]
    AtStart,
    #[error("procedure complete")]
    AtEnd,
    /// The next move fails; the yard shows the state before it
    #[error("halted: {0}")]
    Halted(SimulationError),
}

#[derive(Debug, Clone)]
pub struct Replay {
    initial: Yard,
    moves: Vec<Move>,
    crane: Crane,
    yard: Yard,
    /// Number of moves applied to `yard`
    position: usize,
    halted: Option<SimulationError>,
}

impl Replay {
    pub fn new(yard: Yard, moves: Vec<Move>, policy: MovePolicy) -> Self {
        Replay {
            initial: yard.clone(),
            moves,
            crane: Crane::new(policy),
            yard,
            position: 0,
            halted: None,
        }
    }

    pub fn yard(&self) -> &Yard {
        &self.yard
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn policy(&self) -> MovePolicy {
        self.crane.policy()
    }

    /// Number of moves applied so far
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn total_steps(&self) -> usize {
        self.moves.len()
    }

    /// The move applied most recently, if any
    pub fn last_move(&self) -> Option<&Move> {
        self.position.checked_sub(1).and_then(|i| self.moves.get(i))
    }

    /// The move the next forward step would apply
    pub fn current_move(&self) -> Option<&Move> {
        self.moves.get(self.position)
    }

    /// Error that stopped forward progress, if the crane hit one
    pub fn halted(&self) -> Option<&SimulationError> {
        self.halted.as_ref()
    }

    pub fn is_at_end(&self) -> bool {
        self.position == self.moves.len()
    }

    pub fn step_forward(&mut self) -> Result<(), StepError> {
        if let Some(err) = &self.halted {
            return Err(StepError::Halted(err.clone()));
        }
        let Some(mv) = self.moves.get(self.position) else {
            return Err(StepError::AtEnd);
        };

        match self.crane.execute(&mut self.yard, self.position, mv) {
            Ok(()) => {
                self.position += 1;
                Ok(())
            }
            Err(err) => {
                self.halted = Some(err.clone());
                Err(StepError::Halted(err))
            }
        }
    }

    pub fn step_backward(&mut self) -> Result<(), StepError> {
        if self.position == 0 {
            return Err(StepError::AtStart);
        }
        self.seek(self.position - 1)
    }

    pub fn rewind_to_start(&mut self) {
        self.yard = self.initial.clone();
        self.position = 0;
        self.halted = None;
    }

    /// Step forward until the procedure ends or the crane halts
    pub fn run_to_end(&mut self) -> Result<(), StepError> {
        while !self.is_at_end() {
            self.step_forward()?;
        }
        Ok(())
    }

    /// Rebuild the yard as it stands after `position` moves
    fn seek(&mut self, position: usize) -> Result<(), StepError> {
        self.rewind_to_start();
        for _ in 0..position {
            self.step_forward()?;
        }
        Ok(())
    }
}
