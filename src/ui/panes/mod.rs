//! TUI pane rendering modules
//!
//! - [`procedure`]: the move list with the next move highlighted
//! - [`stacks`]: drawing of the current yard
//! - [`status`]: status bar with keybindings and replay state
//!
//! Each module exports one `render_*` function that draws from borrowed state
//! and only mutates the scroll offset it is handed.

pub mod procedure;
pub mod stacks;
pub mod status;

pub use procedure::render_procedure_pane;
pub use stacks::render_stacks_pane;
pub use status::render_status_bar;

use crate::ui::theme::DEFAULT_THEME;
use ratatui::style::{Modifier, Style};

/// Border style shared by all bordered panes
fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Clamp `offset` so that `total` rows fill a view of `visible` rows
fn clamp_scroll(offset: &mut usize, total: usize, visible: usize) {
    if total > visible {
        *offset = (*offset).min(total - visible);
    } else {
        *offset = 0;
    }
}
