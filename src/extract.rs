//! Reading the answer off the final yard
//!
//! The answer is the label of the top crate of every stack, in stack order.
//! An empty stack has no top crate: [`top_of_each`] reports it as `None` and
//! [`message`] writes [`EMPTY_STACK_SENTINEL`] in its place.

use crate::yard::{Label, Stack, Yard};

/// Stand-in for an empty stack in [`message`]
pub const EMPTY_STACK_SENTINEL: char = '_';

/// Top crate of each stack, in index order
pub fn top_of_each(yard: &Yard) -> Vec<Option<Label>> {
    yard.stacks().iter().map(Stack::top).collect()
}

/// Concatenated top labels, e.g. `CMZ`
pub fn message(yard: &Yard) -> String {
    top_of_each(yard)
        .into_iter()
        .map(|top| top.map_or(EMPTY_STACK_SENTINEL, Label::as_char))
        .collect()
}
