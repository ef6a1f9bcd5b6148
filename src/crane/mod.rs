//! Crane simulation
//!
//! - [`engine`]: the [`Crane`] that applies moves to a [`Yard`]
//! - [`policy`]: [`MovePolicy`], how multi-crate moves treat block order
//! - [`errors`]: [`SimulationError`], raised when a move cannot be carried out
//! - [`replay`]: [`Replay`], step-wise driver used by the viewer
//!
//! The crane borrows the yard mutably for the whole run. It keeps no history;
//! once a move fails the run is over.

pub mod engine;
pub mod errors;
pub mod policy;
pub mod replay;

pub use engine::Crane;
pub use errors::SimulationError;
pub use policy::MovePolicy;
pub use replay::{Replay, StepError};

use crate::parser::ast::Move;
use crate::yard::Yard;

/// Apply `moves` to `yard` under `policy`
pub fn apply(yard: &mut Yard, moves: &[Move], policy: MovePolicy) -> Result<(), SimulationError> {
    Crane::new(policy).apply(yard, moves)
}
