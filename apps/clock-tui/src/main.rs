//! clock-tui: a 25+5 Pomodoro clock for the terminal.
//!
//! The binary owns what the core deliberately does not: tick scheduling,
//! key handling, rendering, audio output, desktop notifications and
//! logging. All countdown rules live in `clock-core`.

mod audio;
mod logging;
mod ui;

use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use notify_rust::Notification;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

use clock_core::{
    AlarmCue, Clock, NullCue, Phase, PhaseChange, Settings, DEFAULT_BREAK_MIN, DEFAULT_SESSION_MIN,
};

use audio::RodioCue;

/// One decrement per elapsed second while running.
const TICK_PERIOD: Duration = Duration::from_secs(1);
/// Terminal event poll timeout; keeps the UI responsive between ticks.
const POLL_PERIOD: Duration = Duration::from_millis(100);
const MESSAGE_TTL: Duration = Duration::from_secs(3);

#[derive(Parser)]
#[command(name = "clock-tui")]
#[command(about = "25+5 clock - a Pomodoro countdown for the terminal")]
#[command(version)]
struct Cli {
    /// Starting break length in minutes; Reset restores this value
    #[arg(
        long = "break-length",
        value_name = "MINUTES",
        default_value_t = DEFAULT_BREAK_MIN,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    break_length: u32,

    /// Starting session length in minutes; Reset restores this value
    #[arg(
        long = "session-length",
        value_name = "MINUTES",
        default_value_t = DEFAULT_SESSION_MIN,
        value_parser = clap::value_parser!(u32).range(1..=60)
    )]
    session_length: u32,

    /// Disable the audio cue (desktop notifications still fire)
    #[arg(long)]
    no_sound: bool,
}

/// Which length setter currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetterFocus {
    Break,
    Session,
}

impl SetterFocus {
    fn toggled(self) -> Self {
        match self {
            SetterFocus::Break => SetterFocus::Session,
            SetterFocus::Session => SetterFocus::Break,
        }
    }
}

pub struct App {
    pub clock: Clock,
    pub focus: SetterFocus,
    pub message: Option<(String, Instant)>,
    should_quit: bool,
}

impl App {
    fn new(clock: Clock) -> Self {
        Self {
            clock,
            focus: SetterFocus::Session,
            message: None,
            should_quit: false,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(' ') => {
                let running = self.clock.toggle_running();
                self.set_message(if running { "Started" } else { "Stopped" });
            }
            KeyCode::Char('r') => {
                self.clock.reset();
                self.set_message("Reset");
            }
            KeyCode::Tab
            | KeyCode::Left
            | KeyCode::Right
            | KeyCode::Char('h')
            | KeyCode::Char('l') => {
                self.focus = self.focus.toggled();
            }
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('+') => match self.focus {
                SetterFocus::Break => self.clock.increment_break(),
                SetterFocus::Session => self.clock.increment_session(),
            },
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('-') => match self.focus {
                SetterFocus::Break => self.clock.decrement_break(),
                SetterFocus::Session => self.clock.decrement_session(),
            },
            _ => {}
        }
    }

    fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some((msg.into(), Instant::now() + MESSAGE_TTL));
    }

    fn announce(&mut self, change: PhaseChange) {
        let body = match change.to {
            Phase::Break => format!(
                "Session complete! Time for a {}-minute break.",
                change.minutes
            ),
            Phase::Session => format!(
                "Break is over! Starting a {}-minute session.",
                change.minutes
            ),
        };
        self.set_message(body.clone());
        if let Err(err) = Notification::new().summary("25+5 Clock").body(&body).show() {
            warn!(error = %err, "Failed to send desktop notification");
        }
    }
}

fn main() -> io::Result<()> {
    let _logging_guard = logging::init();
    let cli = Cli::parse();

    let cue: Box<dyn AlarmCue> = if cli.no_sound {
        Box::new(NullCue)
    } else {
        match RodioCue::new() {
            Ok(cue) => Box::new(cue),
            Err(err) => {
                warn!(error = %err, "Audio unavailable, running without sound");
                Box::new(NullCue)
            }
        }
    };
    let defaults = Settings::new(cli.break_length, cli.session_length);
    let mut app = App::new(Clock::with_defaults(defaults, cue));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    let mut next_tick = Instant::now() + TICK_PERIOD;

    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(POLL_PERIOD)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key.code);
                }
            }
        }

        if app.clock.display().running {
            if Instant::now() >= next_tick {
                if let Some(change) = app.clock.tick() {
                    app.announce(change);
                }
                next_tick += TICK_PERIOD;
            }
        } else {
            // stopped: the pending interval is cancelled; resuming always
            // starts a fresh full second
            next_tick = Instant::now() + TICK_PERIOD;
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clock_core::DisplayState;

    fn test_app() -> App {
        App::new(Clock::new(Box::new(NullCue)))
    }

    #[test]
    fn test_space_toggles_running() {
        let mut app = test_app();
        app.handle_key(KeyCode::Char(' '));
        assert!(app.clock.display().running);
        app.handle_key(KeyCode::Char(' '));
        assert!(!app.clock.display().running);
        assert_eq!(app.clock.display().remaining_secs, 1500);
    }

    #[test]
    fn test_tab_switches_focus() {
        let mut app = test_app();
        assert_eq!(app.focus, SetterFocus::Session);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, SetterFocus::Break);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.focus, SetterFocus::Session);
    }

    #[test]
    fn test_adjust_keys_follow_focus() {
        let mut app = test_app();
        app.handle_key(KeyCode::Up);
        assert_eq!(app.clock.settings().session_min, 26);
        app.handle_key(KeyCode::Tab);
        app.handle_key(KeyCode::Down);
        assert_eq!(app.clock.settings().break_min, 4);
        assert_eq!(app.clock.settings().session_min, 26);
    }

    #[test]
    fn test_reset_key_restores_defaults() {
        let mut app = test_app();
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Char(' '));
        app.handle_key(KeyCode::Char('r'));
        assert_eq!(app.clock.settings(), Settings::default());
        assert_eq!(app.clock.display(), DisplayState::fresh(25));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit);
    }
}
