//! Stacks pane: the current yard drawn as a diagram
//!
//! The drawing uses the same layout as the input file, one `[X]` per crate,
//! with the stacks touched by the last move colored by role.

use super::{border_style, clamp_scroll};
use crate::crane::Replay;
use crate::extract;
use crate::ui::theme::DEFAULT_THEME;
use crate::yard::SLOT_BODY;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_stacks_pane(
    frame: &mut Frame,
    area: Rect,
    replay: &Replay,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let yard = replay.yard();
    let block = Block::default()
        .title(format!(
            " Stacks ({} crates, {} policy) ",
            yard.total_crates(),
            replay.policy()
        ))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let (source, destination) = replay
        .last_move()
        .map_or((0, 0), |mv| (mv.source, mv.destination));

    let stack_style = |index: usize| {
        if index == destination {
            Style::default().fg(DEFAULT_THEME.destination_stack)
        } else if index == source {
            Style::default().fg(DEFAULT_THEME.source_stack)
        } else {
            Style::default().fg(DEFAULT_THEME.bracket)
        }
    };

    let mut lines: Vec<Line> = Vec::new();
    for height in (0..yard.height()).rev() {
        let mut spans = Vec::new();
        for (i, stack) in yard.stacks().iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            match stack.get(height) {
                Some(label) => {
                    let style = stack_style(i + 1);
                    let is_top = height + 1 == stack.depth();
                    let label_style = if is_top {
                        Style::default()
                            .fg(DEFAULT_THEME.crate_label)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(DEFAULT_THEME.fg)
                    };
                    spans.push(Span::styled("[", style));
                    spans.push(Span::styled(label.to_string(), label_style));
                    spans.push(Span::styled("]", style));
                }
                None => spans.push(Span::raw(" ".repeat(SLOT_BODY))),
            }
        }
        lines.push(Line::from(spans));
    }

    let numbers: Vec<Span> = (1..=yard.len())
        .map(|index| {
            Span::styled(
                format!("{:^width$} ", index, width = SLOT_BODY),
                stack_style(index).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    lines.push(Line::from(numbers));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Top: ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            extract::message(yard),
            Style::default()
                .fg(DEFAULT_THEME.crate_label)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
