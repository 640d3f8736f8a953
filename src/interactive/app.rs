//! TUI application state and logic

use crate::core::{Verdict, WORD_LENGTH, Word};
use crate::error::GameError;
use crate::game::{GameController, GameStatus, Outcome};
use crate::provider::{ProviderError, WordProvider};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rustc_hash::FxHashMap;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{debug, error, info};

type FetchResult = Result<Word, ProviderError>;

/// Application state
pub struct App {
    pub controller: GameController,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    provider: Arc<dyn WordProvider>,
    pending: Option<oneshot::Receiver<FetchResult>>,
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

impl App {
    #[must_use]
    pub fn new(provider: Arc<dyn WordProvider>) -> Self {
        Self {
            controller: GameController::new(),
            messages: vec![Message {
                text: "Welcome! Guess the 5-letter word in 6 tries.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
            provider,
            pending: None,
        }
    }

    /// Start fetching a word in the background
    ///
    /// Used both for the first word and for "play again". The result is
    /// picked up by [`App::poll_fetch`].
    pub fn request_word(&mut self) {
        if let Err(err) = self.controller.begin_fetch() {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        let provider = Arc::clone(&self.provider);
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            // Receiver is gone only if the app already quit
            let _ = tx.send(provider.fetch_word().await);
        });

        self.pending = Some(rx);
        self.add_message("Fetching a new word...", MessageStyle::Info);
    }

    /// Apply a finished fetch, if one is ready
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.pending.as_mut() else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return,
            Err(TryRecvError::Closed) => Err(ProviderError::Transport {
                message: "fetch task ended without a result".to_string(),
            }),
        };

        self.pending = None;
        self.finish_fetch(result);
    }

    /// Hand a fetch result to the controller and report it
    pub fn finish_fetch(&mut self, result: FetchResult) {
        match self.controller.complete_fetch(result) {
            Ok(()) => {
                self.messages.clear();
                self.add_message("New word loaded. Start guessing!", MessageStyle::Success);
            }
            Err(err) => {
                error!(error = %err, "Word fetch failed");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Put `letter` in the next empty cell of the current row
    ///
    /// Filling the last cell submits the row.
    pub fn type_letter(&mut self, letter: char) {
        let grid = self.controller.session().grid();
        let row = grid.current_row();
        let col = grid.active_row().filled() + 1;
        if col > WORD_LENGTH {
            return;
        }

        if let Err(err) = self.controller.set_cell(row, col, Some(letter)) {
            self.add_message(&err.to_string(), MessageStyle::Error);
            return;
        }

        if col == WORD_LENGTH {
            self.submit();
        }
    }

    /// Clear the last filled cell of the current row
    pub fn erase(&mut self) {
        let grid = self.controller.session().grid();
        let row = grid.current_row();
        let filled = grid.active_row().filled();
        if filled == 0 {
            return;
        }

        if let Err(err) = self.controller.set_cell(row, filled, None) {
            self.add_message(&err.to_string(), MessageStyle::Error);
        }
    }

    /// Submit the current row and report the outcome
    pub fn submit(&mut self) {
        match self.controller.submit_row() {
            Ok(Outcome::Advanced { next_row, .. }) => {
                debug!(next_row, "Guess missed");
            }
            Ok(Outcome::Won { attempts, .. }) => {
                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    _ => "😅 PHEW! Got it in six! 😅",
                };
                self.announce_end();
                self.add_message(celebration, MessageStyle::Success);
            }
            Ok(Outcome::Lost { .. }) => self.announce_end(),
            Err(err @ GameError::RowIncomplete { .. }) => {
                self.add_message(&err.to_string(), MessageStyle::Info);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    fn announce_end(&mut self) {
        let session = self.controller.session();
        let style = match session.status() {
            GameStatus::Won => MessageStyle::Success,
            _ => MessageStyle::Error,
        };
        if let Some(text) = session.terminal_message() {
            self.add_message(&text, style);
        }
        self.add_message("Press Enter or 'n' to play again, 'q' to quit.", MessageStyle::Info);
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

    /// Most informative verdict seen so far for each letter
    #[must_use]
    pub fn letter_summary(&self) -> FxHashMap<char, Verdict> {
        let mut summary: FxHashMap<char, Verdict> = FxHashMap::default();
        let cells = self
            .controller
            .session()
            .grid()
            .rows()
            .iter()
            .flat_map(|row| row.cells().iter());

        for cell in cells {
            if let Some(letter) = cell.letter() {
                let entry = summary.entry(letter).or_default();
                if cell.verdict().strength() > entry.strength() {
                    *entry = cell.verdict();
                }
            }
        }

        summary
    }

    /// Route a key press for the current phase
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::F(5) => {
                self.request_word();
                return;
            }
            _ => {}
        }

        if self.controller.phase().is_terminal() {
            match code {
                KeyCode::Char('q' | 'Q') => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.request_word(),
                _ => {
                    // Grid is locked; ignore other keys
                }
            }
            return;
        }

        match code {
            KeyCode::Char(c) if c.is_ascii_alphabetic() => self.type_letter(c),
            KeyCode::Backspace => self.erase(),
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "TUI loop failed");
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<()> {
    info!("TUI started");
    app.request_word();

    loop {
        app.poll_fetch();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(Duration::from_millis(50))?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }

        tokio::task::yield_now().await;
    }

    info!("TUI exiting");
    Ok(())
}
