//! Fixed-width diagram decoding
//!
//! A diagram is a block of crate rows closed by a row of stack numbers:
//!
//! ```text
//!     [D]
//! [N] [C]
//! [Z] [M] [P]
//!  1   2   3
//! ```
//!
//! The number row fixes the stack count N. Stack `i` then owns the columns
//! `SLOT_WIDTH * (i - 1) .. SLOT_WIDTH * (i - 1) + SLOT_BODY` of every crate
//! row; the column after each slot is a blank separator. Rows are read from
//! the top of the drawing down and pushed bottom-first, so the crate closest
//! to the number row ends up at the bottom of its stack.

use super::error::ParseError;
use crate::yard::{Label, Stack, Yard, SLOT_BODY, SLOT_WIDTH};
use tracing::trace;

/// Decode a diagram block. `first_line` is the 1-based line number of
/// `lines[0]` in the input, used for error reporting.
pub fn parse_diagram(lines: &[&str], first_line: usize) -> Result<Yard, ParseError> {
    let Some((label_row, crate_rows)) = lines.split_last() else {
        return Err(ParseError::MissingLabelRow { line: first_line });
    };

    let label_line = first_line + crate_rows.len();
    let stack_count = parse_label_row(label_row, label_line)?;
    let mut stacks = vec![Stack::new(); stack_count];

    // Closest row to the numbers first, so it becomes the bottom
    for (offset, row) in crate_rows.iter().enumerate().rev() {
        let line = first_line + offset;
        let crates = decode_row(row, line, stack_count)?;
        trace!(line, crates = crates.len(), "decoded diagram row");
        for (index, label) in crates {
            stacks[index].push(label);
        }
    }

    Ok(Yard::new(stacks))
}

/// Read the stack number row and return the stack count.
///
/// Numbers must count up from 1 and each must sit inside its own slot.
pub fn parse_label_row(row: &str, line: usize) -> Result<usize, ParseError> {
    if row.contains('[') {
        return Err(ParseError::MissingLabelRow { line });
    }

    let mut count = 0;
    for (column, token) in tokens(row) {
        let expected = count + 1;
        let malformed = |message: String| ParseError::MalformedLabelRow {
            line,
            column: column + 1,
            message,
        };

        let value: usize = if token.chars().all(|c| c.is_ascii_digit()) {
            token
                .parse()
                .map_err(|_| malformed(format!("stack number '{}' is too large", token)))?
        } else {
            return Err(malformed(format!(
                "expected stack number {}, found '{}'",
                expected, token
            )));
        };

        if value != expected {
            return Err(malformed(format!(
                "stack numbers must count up from 1: expected {}, found {}",
                expected, value
            )));
        }

        let slot_start = (expected - 1) * SLOT_WIDTH;
        let end = column + token.chars().count();
        if column < slot_start || end > slot_start + SLOT_BODY {
            return Err(malformed(format!(
                "stack number {} is outside columns {}..={}",
                value,
                slot_start + 1,
                slot_start + SLOT_BODY
            )));
        }

        count = expected;
    }

    if count == 0 {
        return Err(ParseError::MissingLabelRow { line });
    }
    Ok(count)
}

/// Decode one crate row into `(0-based stack, label)` pairs, skipping blank slots
fn decode_row(
    row: &str,
    line: usize,
    stack_count: usize,
) -> Result<Vec<(usize, Label)>, ParseError> {
    let chars: Vec<char> = row.chars().collect();
    let at = |column: usize| chars.get(column).copied().unwrap_or(' ');
    let mut crates = Vec::new();

    for stack in 0..stack_count {
        let start = stack * SLOT_WIDTH;
        let slot = [at(start), at(start + 1), at(start + 2)];

        if slot != [' '; SLOT_BODY] {
            let label = match slot {
                ['[', c, ']'] => Label::new(c),
                _ => None,
            };
            let Some(label) = label else {
                return Err(ParseError::MalformedSlot {
                    line,
                    column: start + 1,
                    stack: stack + 1,
                    found: slot.iter().collect(),
                });
            };
            crates.push((stack, label));
        }

        let separator = start + SLOT_BODY;
        if at(separator) != ' ' {
            return Err(ParseError::MisalignedSeparator {
                line,
                column: separator + 1,
                found: at(separator),
            });
        }
    }

    let width = stack_count * SLOT_WIDTH;
    if let Some(offset) = chars.iter().skip(width).position(|c| *c != ' ') {
        return Err(ParseError::RowTooWide {
            line,
            column: width + offset + 1,
            stack_count,
        });
    }

    Ok(crates)
}

/// Whitespace-separated tokens with their 0-based starting column
fn tokens(row: &str) -> Vec<(usize, String)> {
    let mut tokens = Vec::new();
    let mut current: Option<(usize, String)> = None;

    for (column, c) in row.chars().enumerate() {
        if c.is_whitespace() {
            if let Some(token) = current.take() {
                tokens.push(token);
            }
        } else {
            current
                .get_or_insert_with(|| (column, String::new()))
                .1
                .push(c);
        }
    }
    tokens.extend(current);
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 4] = ["    [D]    ", "[N] [C]    ", "[Z] [M] [P]", " 1   2   3 "];

    fn labels(stack: &Stack) -> String {
        stack.iter().map(|l| l.as_char()).collect()
    }

    #[test]
    fn test_sample_diagram() {
        let yard = parse_diagram(&SAMPLE, 1).expect("sample parses");
        assert_eq!(yard.len(), 3);
        let stacks: Vec<String> = yard.stacks().iter().map(labels).collect();
        assert_eq!(stacks, vec!["ZN", "MCD", "P"]);
    }

    #[test]
    fn test_trimmed_rows_are_accepted() {
        let rows = ["    [D]", "[N] [C]", "[Z] [M] [P]", " 1   2   3"];
        let yard = parse_diagram(&rows, 1).expect("trimmed rows parse");
        assert_eq!(yard.total_crates(), 6);
    }

    #[test]
    fn test_empty_stack_in_diagram() {
        let rows = ["[A]     [C]", " 1   2   3 "];
        let yard = parse_diagram(&rows, 1).expect("diagram parses");
        assert_eq!(yard.len(), 3);
        assert!(yard.stack(2).unwrap().is_empty());
    }

    #[test]
    fn test_only_label_row() {
        let yard = parse_diagram(&[" 1   2 "], 1).expect("bare label row parses");
        assert_eq!(yard.len(), 2);
        assert_eq!(yard.total_crates(), 0);
    }

    #[test]
    fn test_missing_label_row() {
        let err = parse_diagram(&["[A] [B]", "[C] [D]"], 1).unwrap_err();
        assert_eq!(err, ParseError::MissingLabelRow { line: 2 });

        let err = parse_diagram(&[], 7).unwrap_err();
        assert_eq!(err, ParseError::MissingLabelRow { line: 7 });
    }

    #[test]
    fn test_label_row_out_of_order() {
        let err = parse_diagram(&["[A] [B]", " 2   1 "], 1).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLabelRow { line: 2, column: 2, .. }));
    }

    #[test]
    fn test_label_outside_slot() {
        let err = parse_label_row(" 1 2", 3).unwrap_err();
        assert!(matches!(err, ParseError::MalformedLabelRow { line: 3, column: 4, .. }));
    }

    #[test]
    fn test_multi_digit_labels() {
        let row: Vec<String> = (1..=12).map(|i| format!("{:^3}", i)).collect();
        assert_eq!(parse_label_row(&row.join(" "), 1), Ok(12));
    }

    #[test]
    fn test_malformed_slot() {
        let err = parse_diagram(&["[A] (B)", " 1   2 "], 4).unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedSlot {
                line: 4,
                column: 5,
                stack: 2,
                found: "(B)".to_string(),
            }
        );
    }

    #[test]
    fn test_misaligned_row() {
        let err = parse_diagram(&[" [A]", " 1 "], 1).unwrap_err();
        assert!(matches!(err, ParseError::MalformedSlot { line: 1, .. }));

        let err = parse_diagram(&["[A]x", " 1 "], 1).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MisalignedSeparator { line: 1, column: 4, found: 'x' }
        ));
    }

    #[test]
    fn test_row_wider_than_stack_count() {
        let err = parse_diagram(&["[A] [B]", " 1 "], 1).unwrap_err();
        assert_eq!(
            err,
            ParseError::RowTooWide {
                line: 1,
                column: 5,
                stack_count: 1,
            }
        );
    }

    #[test]
    fn test_token_count_matches_crates() {
        let yard = parse_diagram(&SAMPLE, 1).unwrap();
        let tokens = SAMPLE[..3].iter().map(|r| r.matches('[').count()).sum::<usize>();
        assert_eq!(yard.total_crates(), tokens);
    }
}
