//! End-to-end run: parse, validate, simulate, extract

use crate::crane::{self, MovePolicy};
use crate::error::{Error, Result};
use crate::extract;
use crate::parser::{self, instructions};
use crate::yard::Yard;
use std::path::Path;
use tracing::info;

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub yard: Yard,
    pub policy: MovePolicy,
    pub moves_applied: usize,
    pub message: String,
}

/// Run the whole pipeline over an input text
pub fn solve(text: &str, policy: MovePolicy) -> Result<Solution> {
    let manifest = parser::parse(text)?;
    info!(
        stacks = manifest.yard.len(),
        crates = manifest.yard.total_crates(),
        moves = manifest.moves.len(),
        "parsed input"
    );

    instructions::validate(&manifest.moves, manifest.yard.len())?;

    let mut yard = manifest.yard;
    crane::apply(&mut yard, &manifest.moves, policy)?;
    info!(%policy, moves = manifest.moves.len(), "simulation complete");

    let message = extract::message(&yard);
    Ok(Solution {
        yard,
        policy,
        moves_applied: manifest.moves.len(),
        message,
    })
}

/// Read an input file
pub fn load(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| Error::Input {
        path: path.to_path_buf(),
        source,
    })
}
