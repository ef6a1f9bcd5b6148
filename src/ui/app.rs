//! Main TUI application state and logic

use super::panes::procedure::ProcedureScrollState;
use crate::crane::{Replay, StepError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Delay between steps in auto-play mode
const PLAY_INTERVAL: Duration = Duration::from_millis(500);

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Procedure,
    Stacks,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Procedure => FocusedPane::Stacks,
            FocusedPane::Stacks => FocusedPane::Procedure,
        }
    }
}

/// The main application state
pub struct App {
    /// The run being stepped through
    pub replay: Replay,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub procedure_scroll: ProcedureScrollState,
    pub stacks_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether auto-play mode is active
    pub is_playing: bool,

    /// Last time a step was taken in play mode
    pub last_play_time: Instant,
}

impl App {
    pub fn new(replay: Replay) -> Self {
        App {
            replay,
            focused_pane: FocusedPane::Procedure,
            procedure_scroll: ProcedureScrollState::default(),
            stacks_scroll: 0,
            should_quit: false,
            status_message: String::from("Ready!"),
            is_playing: false,
            last_play_time: Instant::now(),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if self.is_playing && self.last_play_time.elapsed() >= PLAY_INTERVAL {
                match self.replay.step_forward() {
                    Ok(()) => self.status_message = "Playing...".to_string(),
                    Err(e) => {
                        self.is_playing = false;
                        self.status_message = describe(&e);
                    }
                }
                self.last_play_time = Instant::now();
            }

            // Poll with a timeout so auto-play keeps ticking
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(main_chunks[0]);

        super::panes::render_procedure_pane(
            frame,
            columns[0],
            &self.replay,
            self.focused_pane == FocusedPane::Procedure,
            &mut self.procedure_scroll,
        );

        super::panes::render_stacks_pane(
            frame,
            columns[1],
            &self.replay,
            self.focused_pane == FocusedPane::Stacks,
            &mut self.stacks_scroll,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.replay.position(),
            self.replay.total_steps(),
            self.replay.halted().is_some(),
            self.is_playing,
        );
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.is_playing = false;
                let n = c.to_digit(10).unwrap_or(1);
                let mut stepped = 0;
                let mut stopped = None;
                for _ in 0..n {
                    match self.replay.step_forward() {
                        Ok(()) => stepped += 1,
                        Err(e) => {
                            stopped = Some(e);
                            break;
                        }
                    }
                }
                self.status_message = match stopped {
                    Some(e @ StepError::Halted(_)) => describe(&e),
                    _ => format!("Stepped forward {} step(s)", stepped),
                };
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Left => {
                self.is_playing = false;
                self.status_message = match self.replay.step_backward() {
                    Ok(()) => "Stepped backward".to_string(),
                    Err(e) => describe(&e),
                };
            }
            KeyCode::Right => {
                self.is_playing = false;
                self.status_message = match self.replay.step_forward() {
                    Ok(()) => "Stepped forward".to_string(),
                    Err(e) => describe(&e),
                };
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Procedure => {
                    self.procedure_scroll.offset = self.procedure_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Stacks => {
                    self.stacks_scroll = self.stacks_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Procedure => {
                    self.procedure_scroll.offset = self.procedure_scroll.offset.saturating_add(1);
                }
                FocusedPane::Stacks => {
                    self.stacks_scroll = self.stacks_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                self.is_playing = !self.is_playing;
                if self.is_playing {
                    self.last_play_time = Instant::now()
                        .checked_sub(PLAY_INTERVAL)
                        .unwrap_or(Instant::now());
                    self.status_message = "Playing...".to_string();
                } else {
                    self.status_message = "Paused".to_string();
                }
            }
            KeyCode::Enter => {
                self.is_playing = false;
                self.status_message = match self.replay.run_to_end() {
                    Ok(()) => "Jumped to end".to_string(),
                    Err(e) => describe(&e),
                };
            }
            KeyCode::Backspace => {
                self.is_playing = false;
                self.replay.rewind_to_start();
                self.status_message = "Jumped to start".to_string();
            }
            _ => {}
        }
    }
}

fn describe(err: &StepError) -> String {
    match err {
        StepError::AtStart => "Cannot step backward: already at start".to_string(),
        StepError::AtEnd => "Procedure complete".to_string(),
        StepError::Halted(e) => format!("Crane halted: {}", e),
    }
}
