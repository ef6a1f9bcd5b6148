//! A single crate stack
//!
//! [`Stack`] only ever changes at its top: crates are pushed and popped one at
//! a time, or lifted and placed as a contiguous block. There is no random
//! access mutation.

use std::fmt;

/// Label printed on a crate, the `X` inside a `[X]` diagram slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Label(char);

impl Label {
    /// Create a label, rejecting whitespace and the slot delimiters
    pub fn new(c: char) -> Option<Self> {
        if c.is_whitespace() || c.is_control() || c == '[' || c == ']' {
            None
        } else {
            Some(Label(c))
        }
    }

    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Crates in a stack, ordered bottom to top
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    crates: Vec<Label>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of crates currently on the stack
    pub fn depth(&self) -> usize {
        self.crates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crates.is_empty()
    }

    pub fn push(&mut self, label: Label) {
        self.crates.push(label);
    }

    pub fn pop(&mut self) -> Option<Label> {
        self.crates.pop()
    }

    pub fn top(&self) -> Option<Label> {
        self.crates.last().copied()
    }

    /// Detach the top `count` crates as one block, bottom to top.
    ///
    /// Returns `None` and leaves the stack untouched if fewer than `count`
    /// crates are present.
    pub fn lift(&mut self, count: usize) -> Option<Vec<Label>> {
        let split = self.crates.len().checked_sub(count)?;
        Some(self.crates.split_off(split))
    }

    /// Set a block of crates (bottom to top) on top of this stack
    pub fn place(&mut self, block: Vec<Label>) {
        self.crates.extend(block);
    }

    /// Crate at `height` (0 is the bottom)
    pub fn get(&self, height: usize) -> Option<Label> {
        self.crates.get(height).copied()
    }

    /// Iterate crates bottom to top
    pub fn iter(&self) -> impl Iterator<Item = Label> + '_ {
        self.crates.iter().copied()
    }
}

impl FromIterator<Label> for Stack {
    fn from_iter<I: IntoIterator<Item = Label>>(iter: I) -> Self {
        Stack {
            crates: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(s: &str) -> Stack {
        s.chars().map(|c| Label::new(c).unwrap()).collect()
    }

    #[test]
    fn test_label_rejects_delimiters() {
        assert!(Label::new('A').is_some());
        assert!(Label::new('7').is_some());
        assert!(Label::new(' ').is_none());
        assert!(Label::new('[').is_none());
        assert!(Label::new(']').is_none());
    }

    #[test]
    fn test_push_pop_top() {
        let mut s = stack("ZN");
        assert_eq!(s.top(), Label::new('N'));
        s.push(Label::new('D').unwrap());
        assert_eq!(s.depth(), 3);
        assert_eq!(s.pop(), Label::new('D'));
        assert_eq!(s.pop(), Label::new('N'));
        assert_eq!(s.pop(), Label::new('Z'));
        assert_eq!(s.pop(), None);
        assert!(s.is_empty());
        assert_eq!(s.top(), None);
    }

    #[test]
    fn test_lift_keeps_block_order() {
        let mut s = stack("MCD");
        let block = s.lift(2).unwrap();
        assert_eq!(block, vec![Label::new('C').unwrap(), Label::new('D').unwrap()]);
        assert_eq!(s, stack("M"));

        let mut other = stack("P");
        other.place(block);
        assert_eq!(other, stack("PCD"));
    }

    #[test]
    fn test_lift_too_many_is_untouched() {
        let mut s = stack("AB");
        assert_eq!(s.lift(3), None);
        assert_eq!(s, stack("AB"));
        assert_eq!(s.lift(0), Some(vec![]));
        assert_eq!(s.lift(2).map(|b| b.len()), Some(2));
        assert!(s.is_empty());
    }
}
