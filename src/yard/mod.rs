//! The crate yard: every stack of a run
//!
//! - [`stack`]: a single [`Stack`] of [`Label`]s with top-only mutation
//! - [`Yard`]: the full, fixed-size set of stacks addressed by 1-based index
//!
//! The number of stacks is fixed when the yard is built. Rendering a yard
//! with [`std::fmt::Display`] produces the same diagram text that
//! [`crate::parser::diagram`] accepts.

pub mod stack;

pub use stack::{Label, Stack};

use rustc_hash::FxHashMap;
use std::fmt;

/// Width of one stack's column in the diagram, `[X]` plus a separator
pub const SLOT_WIDTH: usize = 4;

/// Width of the `[X]` part of a slot
pub const SLOT_BODY: usize = 3;

/// All stacks of a run. Stack indices are 1-based.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Yard {
    stacks: Vec<Stack>,
}

impl Yard {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Yard { stacks }
    }

    /// Number of stacks (N)
    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    /// Whether `index` names a stack in this yard
    pub fn contains(&self, index: usize) -> bool {
        (1..=self.stacks.len()).contains(&index)
    }

    pub fn stack(&self, index: usize) -> Option<&Stack> {
        index.checked_sub(1).and_then(|i| self.stacks.get(i))
    }

    /// Mutable access to two different stacks at once.
    ///
    /// Returns `None` if either index is out of range or both are equal.
    pub fn pair_mut(&mut self, first: usize, second: usize) -> Option<(&mut Stack, &mut Stack)> {
        if first == second || !self.contains(first) || !self.contains(second) {
            return None;
        }
        let (a, b) = (first - 1, second - 1);
        if a < b {
            let (low, high) = self.stacks.split_at_mut(b);
            Some((&mut low[a], &mut high[0]))
        } else {
            let (low, high) = self.stacks.split_at_mut(a);
            Some((&mut high[0], &mut low[b]))
        }
    }

    /// Stacks in index order
    pub fn stacks(&self) -> &[Stack] {
        &self.stacks
    }

    /// Total number of crates across all stacks
    pub fn total_crates(&self) -> usize {
        self.stacks.iter().map(Stack::depth).sum()
    }

    /// Depth of the tallest stack
    pub fn height(&self) -> usize {
        self.stacks.iter().map(Stack::depth).max().unwrap_or(0)
    }

    /// How many crates carry each label
    pub fn inventory(&self) -> FxHashMap<Label, usize> {
        let mut counts = FxHashMap::default();
        for label in self.stacks.iter().flat_map(Stack::iter) {
            *counts.entry(label).or_insert(0) += 1;
        }
        counts
    }
}

impl fmt::Display for Yard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for height in (0..self.height()).rev() {
            let row: Vec<String> = self
                .stacks
                .iter()
                .map(|stack| match stack.get(height) {
                    Some(label) => format!("[{}]", label),
                    None => " ".repeat(SLOT_BODY),
                })
                .collect();
            writeln!(f, "{}", row.join(" "))?;
        }

        let labels: Vec<String> = (1..=self.stacks.len())
            .map(|index| format!("{:^width$}", index, width = SLOT_BODY))
            .collect();
        writeln!(f, "{}", labels.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yard(stacks: &[&str]) -> Yard {
        Yard::new(
            stacks
                .iter()
                .map(|s| s.chars().filter_map(Label::new).collect())
                .collect(),
        )
    }

    #[test]
    fn test_one_based_access() {
        let y = yard(&["ZN", "MCD", "P"]);
        assert_eq!(y.len(), 3);
        assert!(y.stack(0).is_none());
        assert_eq!(y.stack(2).map(Stack::depth), Some(3));
        assert!(y.stack(4).is_none());
        assert!(y.contains(1) && y.contains(3));
        assert!(!y.contains(0) && !y.contains(4));
    }

    #[test]
    fn test_pair_mut_both_orders() {
        let mut y = yard(&["A", "B", "C"]);
        {
            let (src, dst) = y.pair_mut(3, 1).unwrap();
            let c = src.pop().unwrap();
            dst.push(c);
        }
        assert_eq!(y, yard(&["AC", "B", ""]));
        assert!(y.pair_mut(2, 2).is_none());
        assert!(y.pair_mut(1, 4).is_none());
    }

    #[test]
    fn test_inventory_counts_labels() {
        let y = yard(&["AAB", "", "B"]);
        let inv = y.inventory();
        assert_eq!(inv.get(&Label::new('A').unwrap()), Some(&2));
        assert_eq!(inv.get(&Label::new('B').unwrap()), Some(&2));
        assert_eq!(y.total_crates(), 4);
    }

    #[test]
    fn test_render_diagram() {
        let y = yard(&["ZN", "MCD", "P"]);
        let expected = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n";
        assert_eq!(y.to_string(), expected);
    }
}
