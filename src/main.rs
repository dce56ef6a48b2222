//! Terminal 2048 runner (default binary).
//!
//! Reads keys with crossterm, feeds them to a [`Session`] and prints the
//! board after every key press.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tui_2048::config::Config;
use tui_2048::core::GameError;
use tui_2048::engine::{Session, SessionError};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::screen::Screen;

fn main() -> Result<()> {
    let config = Config::from_env();
    init_logging(&config)?;

    let mut session = Session::new(config.session_config())?;
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, &mut session);

    // Always try to restore terminal state.
    let _ = screen.exit();
    tracing::info!(score = session.score(), moves = session.moves(), "exiting");
    result
}

fn init_logging(config: &Config) -> Result<()> {
    match &config.log_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("opening log file {path}"))?;
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
                )
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            // Only warnings reach stderr; anything more would tear the screen.
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into()),
                )
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn run(screen: &mut Screen, session: &mut Session) -> Result<()> {
    let mut message: Option<String> = None;

    loop {
        screen.draw(session, message.as_deref())?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if should_quit(key) {
            return Ok(());
        }

        let Some(action) = handle_key_event(key) else {
            continue;
        };
        message = match session.apply_action(action) {
            Ok(_) => None,
            // Rejected turns leave the session untouched.
            Err(SessionError::Game(GameError::NoOp { direction })) => {
                Some(format!("can't slide {direction}"))
            }
            Err(SessionError::GameOver) => None,
            Err(err) => return Err(err.into()),
        };
    }
}
