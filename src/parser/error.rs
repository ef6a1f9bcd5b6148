//! Parse and validation errors
//!
//! [`ParseError`] covers text that does not match the diagram or instruction
//! format. [`ValidationError`] covers well-formed instructions that make no
//! sense for the parsed yard. Both carry the 1-based line of the offending
//! input so the CLI can point at it.

use std::fmt;
use thiserror::Error;

/// Malformed diagram or instruction text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No row of stack numbers closes the diagram
    #[error("line {line}: missing stack number row below the diagram")]
    MissingLabelRow { line: usize },

    /// The stack number row is present but unreadable
    #[error("line {line}, column {column}: malformed stack number row: {message}")]
    MalformedLabelRow {
        line: usize,
        column: usize,
        message: String,
    },

    /// A non-blank slot that is not `[X]`
    #[error("line {line}, column {column}: slot for stack {stack} is '{found}', expected '[X]' or blanks")]
    MalformedSlot {
        line: usize,
        column: usize,
        stack: usize,
        found: String,
    },

    /// A non-blank character between two slots
    #[error("line {line}, column {column}: expected a blank separator between stacks, found '{found}'")]
    MisalignedSeparator {
        line: usize,
        column: usize,
        found: char,
    },

    /// Content to the right of the last stack
    #[error("line {line}, column {column}: row is wider than {stack_count} stack(s)")]
    RowTooWide {
        line: usize,
        column: usize,
        stack_count: usize,
    },

    /// A line that is not `move <n> from <n> to <n>`
    #[error("line {line}: malformed instruction: {message}")]
    MalformedInstruction { line: usize, message: String },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::MissingLabelRow { line }
            | ParseError::MalformedLabelRow { line, .. }
            | ParseError::MalformedSlot { line, .. }
            | ParseError::MisalignedSeparator { line, .. }
            | ParseError::RowTooWide { line, .. }
            | ParseError::MalformedInstruction { line, .. } => *line,
        }
    }
}

/// Which end of a move an index refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Source,
    Destination,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Source => write!(f, "source"),
            Endpoint::Destination => write!(f, "destination"),
        }
    }
}

/// A well-formed instruction that cannot apply to the parsed yard
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("line {line}: move count must be at least 1")]
    ZeroCount { line: usize },

    #[error("line {line}: {endpoint} stack {stack} is outside 1..={stack_count}")]
    StackOutOfRange {
        line: usize,
        endpoint: Endpoint,
        stack: usize,
        stack_count: usize,
    },
}

impl ValidationError {
    pub fn line(&self) -> usize {
        match self {
            ValidationError::ZeroCount { line } => *line,
            ValidationError::StackOutOfRange { line, .. } => *line,
        }
    }
}
