//! TUI application state and logic

use crate::engine::{Effect, ResetKind, RoundEngine, RoundState};
use crate::timer::{Countdown, TimerSignal, TimerToken};
use crate::wordlists::provider::WordProvider;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// Which screen currently owns the keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Rules screen shown before the first round
    Start,
    /// A round is running; letters go into the grid
    Playing,
    /// Round won, waiting for acknowledgment
    RoundWon,
    /// Round lost, waiting for acknowledgment
    RoundLost,
    /// Streak target reached, waiting for acknowledgment
    GameWon,
    /// Score depleted, waiting for acknowledgment
    GameLost,
}

/// Application state
pub struct App {
    pub engine: RoundEngine,
    pub countdown: Countdown,
    pub screen: Screen,
    pub focus: (usize, usize),
    /// Target word revealed in outcome popups
    pub revealed: Option<String>,
    /// Status line, e.g. a word-provider failure
    pub status: Option<String>,
    pub should_quit: bool,
    provider: Box<dyn WordProvider>,
    timer_token: Option<TimerToken>,
    round_seconds: u32,
}

impl App {
    #[must_use]
    pub fn new(provider: Box<dyn WordProvider>, round_seconds: u32) -> Self {
        Self {
            engine: RoundEngine::new(),
            countdown: Countdown::new(),
            screen: Screen::Start,
            focus: (0, 0),
            revealed: None,
            status: None,
            should_quit: false,
            provider,
            timer_token: None,
            round_seconds,
        }
    }

    /// Leave the start screen and begin the first round
    pub fn begin(&mut self) {
        self.start_round(ResetKind::NextWord);
    }

    /// Feed one typed letter into the focused cell
    pub fn type_letter(&mut self, ch: char) {
        let (row, col) = self.focus;
        let effects = self.engine.submit_char(ch, row, col);
        self.apply_effects(&effects);
        self.after_mutation();
    }

    /// One wall-clock second has passed
    pub fn tick(&mut self) {
        let Some(token) = self.timer_token else {
            return;
        };

        if self.countdown.tick(token) == Some(TimerSignal::Expired) {
            self.engine.timer_expired();
            self.after_mutation();
        }
    }

    /// Acknowledge whichever outcome popup is showing
    pub fn dismiss_popup(&mut self) {
        match self.screen {
            Screen::RoundWon | Screen::RoundLost => self.start_round(ResetKind::NextWord),
            Screen::GameWon => self.start_round(ResetKind::GameWon),
            Screen::GameLost => self.start_round(ResetKind::GameLost),
            Screen::Start | Screen::Playing => {}
        }
    }

    fn start_round(&mut self, kind: ResetKind) {
        self.status = None;
        self.revealed = None;
        let effects = self.engine.reset_round(kind);
        self.apply_effects(&effects);
        self.screen = Screen::Playing;
    }

    fn apply_effects(&mut self, effects: &[Effect]) {
        for effect in effects {
            match *effect {
                Effect::MoveFocus { row, col } => self.focus = (row, col),
                Effect::RequestWord => match self.provider.next_word() {
                    Ok(word) => self.engine.set_target(word),
                    Err(e) => self.status = Some(format!("No word available: {e}")),
                },
                Effect::RestartTimer => {
                    self.timer_token = Some(self.countdown.start(self.round_seconds));
                }
            }
        }
    }

    /// Route to the right screen after any engine mutation
    fn after_mutation(&mut self) {
        match self.engine.state() {
            RoundState::InProgress => {}
            RoundState::Won => {
                self.finish_round();
                self.screen = if self.engine.game_won() {
                    Screen::GameWon
                } else {
                    Screen::RoundWon
                };
            }
            RoundState::Lost => {
                self.finish_round();
                self.screen = if self.engine.game_lost() {
                    Screen::GameLost
                } else {
                    Screen::RoundLost
                };
            }
        }
    }

    fn finish_round(&mut self) {
        self.countdown.cancel();
        self.timer_token = None;
        self.revealed = self.engine.target().map(|w| w.text().to_uppercase());
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

    // Run app
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
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                match app.screen {
                    Screen::Start => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Enter => {
                            app.begin();
                        }
                        _ => {}
                    },
                    Screen::Playing => match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Esc => {
                            app.should_quit = true;
                        }
                        KeyCode::Char(ch) if ch.is_ascii_alphabetic() => {
                            app.type_letter(ch);
                        }
                        _ => {}
                    },
                    Screen::RoundWon | Screen::RoundLost | Screen::GameWon | Screen::GameLost => {
                        match key.code {
                            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                                app.should_quit = true;
                            }
                            KeyCode::Char('q') => {
                                app.should_quit = true;
                            }
                            KeyCode::Enter | KeyCode::Char('n') => {
                                app.dismiss_popup();
                            }
                            _ => {}
                        }
                    }
                }
            }
        }

        if last_tick.elapsed() >= Duration::from_secs(1) {
            app.tick();
            last_tick = Instant::now();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
