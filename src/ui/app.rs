//! Main TUI application state and logic

use crate::session::{Answer, Factor, Grade, VisualizationSession};
use crate::ui::input::NumberInput;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use tracing::{debug, trace};

/// Which input field is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FactorA,
    FactorB,
    Symbol,
    Answer,
}

impl Field {
    /// Move focus to the next field. The answer field only takes part
    /// while the picture is shown.
    pub fn next(self, answer_visible: bool) -> Self {
        match self {
            Field::FactorA => Field::FactorB,
            Field::FactorB => Field::Symbol,
            Field::Symbol if answer_visible => Field::Answer,
            Field::Symbol | Field::Answer => Field::FactorA,
        }
    }

    /// Move focus to the previous field
    pub fn prev(self, answer_visible: bool) -> Self {
        match self {
            Field::FactorA if answer_visible => Field::Answer,
            Field::FactorA => Field::Symbol,
            Field::FactorB => Field::FactorA,
            Field::Symbol => Field::FactorB,
            Field::Answer => Field::Symbol,
        }
    }
}

/// Product shown by the instructor hint, with the factors it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub a: Factor,
    pub b: Factor,
    pub product: u16,
}

/// The main application state
pub struct App {
    /// The learner's session; every handler goes through it
    pub session: VisualizationSession,

    /// Numeric control for the answer. The factors live only in the session.
    pub answer: NumberInput,

    /// Currently focused field
    pub focused: Field,

    /// Outcome of the last submission, shown under the answer field
    pub last_grade: Option<Grade>,

    /// Whether the instructor hint panel is open
    pub hint_open: bool,

    /// Revealed product; cleared by the next key press
    pub revealed: Option<Reveal>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Create a new app around the given session
    pub fn new(session: VisualizationSession) -> Self {
        App {
            session,
            answer: NumberInput::answer(),
            focused: Field::FactorA,
            last_grade: None,
            hint_open: false,
            revealed: None,
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    /// Run the TUI application.
    ///
    /// The screen is redrawn once up front and then after every handled key,
    /// so each state change is followed by exactly one render.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&self, frame: &mut Frame) {
        let size = frame.area();

        // Title, panes, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(size);

        // Left column: inputs + hint | right column: picture + answer
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(34), Constraint::Min(0)])
            .split(main_chunks[1]);

        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(10), Constraint::Min(0)])
            .split(columns[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(5)])
            .split(columns[1]);

        super::panes::render_title(frame, main_chunks[0]);

        let (factor_a, factor_b) = self.session.pending_factors();
        super::panes::render_inputs_pane(
            frame,
            left_rows[0],
            factor_a,
            factor_b,
            self.session.pending_symbol(),
            self.focused,
        );

        super::panes::render_hint_pane(frame, left_rows[1], self.hint_open, self.revealed);

        let grid = self.session.render_grid();
        super::panes::render_picture_pane(frame, right_rows[0], grid.as_ref());

        super::panes::render_answer_pane(
            frame,
            right_rows[1],
            self.session.is_visualized(),
            self.answer.value(),
            self.focused == Field::Answer,
            self.last_grade.as_ref(),
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            &self.status_message,
            self.session.is_visualized(),
            self.hint_open,
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        trace!(code = ?key.code, "key pressed");
        self.revealed = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused = self.focused.next(self.session.is_visualized());
            }
            KeyCode::BackTab => {
                self.focused = self.focused.prev(self.session.is_visualized());
            }
            KeyCode::Up | KeyCode::Char('+') => self.step_focused(true),
            KeyCode::Down | KeyCode::Char('-') => self.step_focused(false),
            KeyCode::Char(c @ '0'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.edit_focused(|input| input.push_digit(digit as u8));
                }
            }
            KeyCode::Backspace => self.edit_focused(NumberInput::pop_digit),
            KeyCode::Char('v') | KeyCode::Char('V') => self.visualize(),
            KeyCode::Char('r') | KeyCode::Char('R') => self.restart(),
            KeyCode::Enter => {
                if self.focused == Field::Answer {
                    self.submit();
                } else {
                    self.visualize();
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                self.hint_open = !self.hint_open;
                self.status_message = if self.hint_open {
                    "Instructor hint opened".to_string()
                } else {
                    "Instructor hint closed".to_string()
                };
            }
            KeyCode::Char('a') | KeyCode::Char('A') => {
                if self.hint_open {
                    let (a, b) = self.session.pending_factors();
                    let product = self.session.reveal_answer();
                    self.revealed = Some(Reveal { a, b, product });
                    self.status_message = "Answer revealed".to_string();
                }
            }
            _ => {}
        }
    }

    /// Up/Down on the focused field
    fn step_focused(&mut self, up: bool) {
        if self.focused == Field::Symbol {
            let current = self.session.pending_symbol();
            let symbol = if up { current.prev() } else { current.next() };
            self.session.select_symbol(symbol);
            self.status_message = format!("Picture: {}", symbol);
            return;
        }

        self.edit_focused(|input| {
            if up {
                input.increment();
            } else {
                input.decrement();
            }
        });
    }

    /// Apply `edit` to the focused numeric input. Factor edits start from
    /// the session's pending value and are written straight back to it.
    fn edit_focused<F: FnOnce(&mut NumberInput)>(&mut self, edit: F) {
        let (a, b) = self.session.pending_factors();
        match self.focused {
            Field::FactorA => {
                let a = edit_factor(a, edit);
                self.session.set_factors(a, b);
            }
            Field::FactorB => {
                let b = edit_factor(b, edit);
                self.session.set_factors(a, b);
            }
            Field::Answer => {
                edit(&mut self.answer);
                self.last_grade = None;
                debug!(answer = self.answer.value(), "answer edited");
            }
            Field::Symbol => {}
        }
    }

    fn visualize(&mut self) {
        let snapshot = self.session.visualize();
        self.last_grade = None;
        self.status_message = format!("Showing {}", snapshot.question());
    }

    fn restart(&mut self) {
        if !self.session.is_visualized() {
            return;
        }
        self.session.restart();
        self.answer.set(0);
        self.last_grade = None;
        if self.focused == Field::Answer {
            self.focused = Field::FactorA;
        }
        self.status_message = "Start again".to_string();
    }

    fn submit(&mut self) {
        let value = Answer::from(self.answer.value());
        if let Some(grade) = self.session.submit_answer(value) {
            self.status_message = if grade.is_correct() {
                "Well done!".to_string()
            } else {
                "Try again".to_string()
            };
            self.last_grade = Some(grade);
        }
    }
}

fn edit_factor<F: FnOnce(&mut NumberInput)>(factor: Factor, edit: F) -> Factor {
    let mut input = NumberInput::factor(factor.get());
    edit(&mut input);
    Factor::clamped(i64::from(input.value()))
}
