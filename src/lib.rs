//! # Introduction
//!
//! cranemover reads a drawing of crate stacks and a rearrangement procedure,
//! runs a cargo crane over the stacks move by move, and reports the crate
//! that ends up on top of each stack. Runs can also be stepped through in a
//! terminal viewer built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Text → {Diagram, Procedure} → Validate → Crane → Top of each stack
//! ```
//!
//! 1. [`parser`] - decodes the fixed-width diagram into a [`yard::Yard`] and the
//!    `move N from A to B` lines into [`parser::Move`]s.
//! 2. [`crane`] - applies the moves under a [`crane::MovePolicy`]: one crate at
//!    a time (block arrives reversed) or the whole block at once (order kept).
//! 3. [`extract`] - reads the top label of every stack.
//! 4. [`pipeline`] - ties the stages together and tags failures with the
//!    stage that raised them ([`Error::stage`]).
//! 5. [`ui`] - ratatui viewer over a [`crane::Replay`]; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! use cranemover::{crane::MovePolicy, pipeline};
//!
//! let input = "    [D]    \n[N] [C]    \n[Z] [M] [P]\n 1   2   3 \n\n\
//!              move 1 from 2 to 1\nmove 3 from 1 to 3\n\
//!              move 2 from 2 to 1\nmove 1 from 1 to 2\n";
//!
//! let single = pipeline::solve(input, MovePolicy::SingleCrateAtATime).unwrap();
//! assert_eq!(single.message, "CMZ");
//!
//! let bulk = pipeline::solve(input, MovePolicy::BulkPreserveOrder).unwrap();
//! assert_eq!(bulk.message, "MCD");
//! ```

pub mod crane;
pub mod error;
pub mod extract;
pub mod parser;
pub mod pipeline;
pub mod ui;
pub mod yard;

pub use error::{Error, Result};
