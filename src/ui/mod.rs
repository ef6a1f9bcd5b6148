//! Terminal viewer built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** - application state, keyboard event loop, pane focus, auto-play
//! - **[`panes`]** - stateless render functions for each visible pane (procedure,
//!   stacks, status bar)
//! - **[`theme`]** - centralized color palette used by all panes
//! - **[`terminal`]** - raw mode and alternate screen, restored on drop
//!
//! The entry point for consumers is [`App`]: construct it with a [`Replay`] and
//! call [`App::run`] to start the event loop.
//!
//! [`Replay`]: crate::crane::Replay
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod terminal;
pub mod theme;

pub use app::App;
