//! Crate-level error type
//!
//! [`Error`] wraps the error of whichever pipeline stage failed, so callers
//! can report the stage alongside the detail.

use crate::crane::SimulationError;
use crate::parser::{ParseError, ValidationError};
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read {path:?}: {source}")]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

impl Error {
    /// Name of the pipeline stage that failed
    pub fn stage(&self) -> &'static str {
        match self {
            Error::Input { .. } => "input",
            Error::Parse(_) => "parse",
            Error::Validation(_) => "validate",
            Error::Simulation(_) => "simulate",
        }
    }

    /// 1-based input line the error points at, where there is one
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Input { .. } => None,
            Error::Parse(err) => Some(err.line()),
            Error::Validation(err) => Some(err.line()),
            Error::Simulation(err) => Some(err.line()),
        }
    }
}
