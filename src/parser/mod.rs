//! Crane input parsing
//!
//! An input file holds two sections separated by the first blank line that
//! follows the diagram's content. Blank lines above the diagram are padding
//! rows of empty slots and stay part of it.
//! - [`diagram`]: the fixed-width drawing of the starting stacks
//! - [`instructions`]: the rearrangement procedure, one `move` per line
//!
//! The two sections are decoded independently; [`instructions::validate`]
//! then checks the procedure against the stack count of the diagram.
//! Line numbers in every error refer to the whole input, starting at 1.

pub mod ast;
pub mod diagram;
pub mod error;
pub mod instructions;

pub use ast::{Manifest, Move};
pub use error::{Endpoint, ParseError, ValidationError};

/// Split `text` at the blank line ending the diagram and parse both sections
pub fn parse(text: &str) -> Result<Manifest, ParseError> {
    let lines: Vec<&str> = text.lines().collect();
    let is_blank = |line: &&str| line.trim().is_empty();

    let content = lines.iter().position(|line| !is_blank(line)).unwrap_or(lines.len());
    let separator = lines[content..]
        .iter()
        .position(is_blank)
        .map_or(lines.len(), |offset| content + offset);

    let yard = diagram::parse_diagram(&lines[..separator], 1)?;

    let procedure = lines.get(separator + 1..).unwrap_or_default();
    let moves = instructions::parse_instructions(procedure, separator + 2)?;

    Ok(Manifest { yard, moves })
}
