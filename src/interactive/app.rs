//! TUI application state and logic

use crate::commands::{LadderResult, SolveConfig, solve_ladder};
use crate::output::outcome_line;
use crate::solver::SearchOptions;
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the entry fields accept
pub const MAX_WORD_LENGTH: usize = 16;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    pub options: SearchOptions,
    pub start: String,
    pub end: String,
    pub focus: Field,
    pub result: Option<LadderResult>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

/// Entry field with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Start,
    End,
}

impl Field {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub searches: usize,
    pub found: usize,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, options: SearchOptions) -> Self {
        Self {
            dictionary,
            options,
            start: String::new(),
            end: String::new(),
            focus: Field::Start,
            result: None,
            messages: vec![
                Message {
                    text: format!("Loaded {} words", dictionary.len()),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a start and an end word, then press Enter".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Text of the field that has focus
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Start => &mut self.start,
            Field::End => &mut self.end,
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.reset();
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                self.focus = self.focus.toggled();
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let field = self.focused_mut();
                if field.len() < MAX_WORD_LENGTH {
                    field.push(c.to_ascii_lowercase());
                }
            }
            KeyCode::Backspace => {
                self.focused_mut().pop();
            }
            KeyCode::Enter => self.solve(),
            _ => {}
        }
    }

    /// Search for a ladder between the two fields
    pub fn solve(&mut self) {
        if self.start.is_empty() || self.end.is_empty() {
            self.add_message("Both words are required", MessageStyle::Error);
            return;
        }

        let config = SolveConfig::new(self.start.as_str(), self.end.as_str()).with_options(self.options);
        match solve_ladder(config, self.dictionary) {
            Ok(result) => {
                self.stats.searches += 1;
                let line = outcome_line(&result.start, &result.end, result.ladder.as_ref());
                if result.ladder.is_some() {
                    self.stats.found += 1;
                    self.add_message(&line, MessageStyle::Success);
                } else {
                    self.add_message(&line, MessageStyle::Error);
                }
                self.result = Some(result);
            }
            Err(e) => {
                self.result = None;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Clear both fields and the last result
    pub fn reset(&mut self) {
        self.start.clear();
        self.end.clear();
        self.focus = Field::Start;
        self.result = None;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
