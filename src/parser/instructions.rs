//! Rearrangement procedure parsing and validation
//!
//! Each non-blank line must read `move <count> from <source> to <destination>`
//! with unsigned decimal numbers. Parsing only checks the grammar; whether the
//! numbers make sense for a particular yard is decided by [`validate`].

use super::ast::Move;
use super::error::{Endpoint, ParseError, ValidationError};
use tracing::debug;

/// Parse the procedure block. `first_line` is the 1-based line number of
/// `lines[0]`. Blank lines are skipped; order is preserved.
pub fn parse_instructions(lines: &[&str], first_line: usize) -> Result<Vec<Move>, ParseError> {
    let moves = lines
        .iter()
        .enumerate()
        .filter(|(_, text)| !text.trim().is_empty())
        .map(|(offset, text)| parse_move(text, first_line + offset))
        .collect::<Result<Vec<_>, _>>()?;

    debug!(count = moves.len(), "parsed procedure");
    Ok(moves)
}

/// Parse a single `move <n> from <n> to <n>` line
pub fn parse_move(text: &str, line: usize) -> Result<Move, ParseError> {
    let mut words = text.split_whitespace();

    keyword(&mut words, "move", line)?;
    let count = number(&mut words, "count", line)?;
    keyword(&mut words, "from", line)?;
    let source = number(&mut words, "source stack", line)?;
    keyword(&mut words, "to", line)?;
    let destination = number(&mut words, "destination stack", line)?;

    if let Some(extra) = words.next() {
        return Err(ParseError::MalformedInstruction {
            line,
            message: format!("unexpected '{}' after destination", extra),
        });
    }

    Ok(Move::new(count, source, destination, line))
}

fn keyword<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    expected: &str,
    line: usize,
) -> Result<(), ParseError> {
    match words.next() {
        Some(word) if word == expected => Ok(()),
        Some(word) => Err(ParseError::MalformedInstruction {
            line,
            message: format!("expected '{}', found '{}'", expected, word),
        }),
        None => Err(ParseError::MalformedInstruction {
            line,
            message: format!("expected '{}', found end of line", expected),
        }),
    }
}

fn number<'a>(
    words: &mut impl Iterator<Item = &'a str>,
    what: &str,
    line: usize,
) -> Result<usize, ParseError> {
    let Some(word) = words.next() else {
        return Err(ParseError::MalformedInstruction {
            line,
            message: format!("missing {}", what),
        });
    };

    if !word.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::MalformedInstruction {
            line,
            message: format!("{} '{}' is not an unsigned integer", what, word),
        });
    }

    word.parse().map_err(|_| ParseError::MalformedInstruction {
        line,
        message: format!("{} '{}' is too large", what, word),
    })
}

/// Check every move against a yard of `stack_count` stacks, stopping at the
/// first offending instruction.
pub fn validate(moves: &[Move], stack_count: usize) -> Result<(), ValidationError> {
    moves.iter().try_for_each(|mv| validate_move(mv, stack_count))
}

pub fn validate_move(mv: &Move, stack_count: usize) -> Result<(), ValidationError> {
    if mv.count == 0 {
        return Err(ValidationError::ZeroCount { line: mv.line });
    }

    for (endpoint, stack) in [
        (Endpoint::Source, mv.source),
        (Endpoint::Destination, mv.destination),
    ] {
        if !(1..=stack_count).contains(&stack) {
            return Err(ValidationError::StackOutOfRange {
                line: mv.line,
                endpoint,
                stack,
                stack_count,
            });
        }
    }

    Ok(())
}
