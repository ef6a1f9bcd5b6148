//! Procedure pane: the list of moves
//!
//! Applied moves are dimmed, the next move is marked with an arrow and a
//! highlighted background, and a move the crane could not carry out is shown
//! in the error color. The view follows the next move whenever the replay
//! position changes.

use super::{border_style, clamp_scroll};
use crate::crane::Replay;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Scroll state for the procedure pane
#[derive(Debug, Default)]
pub struct ProcedureScrollState {
    pub offset: usize,
    /// Replay position the offset was last adjusted for
    pub followed_position: Option<usize>,
}

pub fn render_procedure_pane(
    frame: &mut Frame,
    area: Rect,
    replay: &Replay,
    is_focused: bool,
    scroll: &mut ProcedureScrollState,
) {
    let title = match replay.current_move() {
        Some(next) => format!(
            " Procedure ({} moves, next on line {}) ",
            replay.total_steps(),
            next.line
        ),
        None => format!(" Procedure ({} moves) ", replay.total_steps()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let moves = replay.moves();
    if moves.is_empty() {
        let paragraph = Paragraph::new("(no moves)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let position = replay.position();
    let halted_at = replay.halted().map(|err| err.move_index());
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    // Keep the next move in view after each step
    if scroll.followed_position != Some(position) {
        scroll.followed_position = Some(position);
        if position < scroll.offset {
            scroll.offset = position;
        } else if position >= scroll.offset + visible_height {
            scroll.offset = position + 1 - visible_height;
        }
    }
    clamp_scroll(&mut scroll.offset, moves.len(), visible_height);

    let number_width = moves.last().map_or(1, |mv| mv.line.to_string().len());

    let lines: Vec<Line> = moves
        .iter()
        .enumerate()
        .skip(scroll.offset)
        .take(visible_height)
        .map(|(index, mv)| {
            let is_next = index == position;
            let (marker, style) = if halted_at == Some(index) {
                (
                    "✗ ",
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_next {
                (
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                )
            } else if index < position {
                ("  ", Style::default().fg(DEFAULT_THEME.comment))
            } else {
                ("  ", Style::default().fg(DEFAULT_THEME.fg))
            };

            let mut line = Line::from(vec![
                Span::styled(marker, Style::default().fg(DEFAULT_THEME.primary)),
                Span::styled(
                    format!("{:>width$} │ ", mv.line, width = number_width),
                    Style::default().fg(DEFAULT_THEME.comment),
                ),
                Span::styled(mv.to_string(), style),
            ]);
            if is_next {
                line = line.style(Style::default().bg(DEFAULT_THEME.current_line_bg));
            }
            line
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
