//! Screen: prints the session's textual board to a raw-mode terminal.
//!
//! There is no layout engine here. Each frame is the board's `Display` text
//! plus a status block, redrawn in full on the alternate screen.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::engine::Session;

pub struct Screen {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl Screen {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame for `session`, with an optional status message.
    pub fn draw(&mut self, session: &Session, message: Option<&str>) -> Result<()> {
        self.buf.clear();
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::MoveTo(0, 0))?;
        // Raw mode doesn't translate "\n" into a carriage return.
        let frame = format_frame(session, message).replace('\n', "\r\n");
        self.buf.queue(Print(frame))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

/// Frame text: score line, board, then the key help or game-over banner.
pub fn format_frame(session: &Session, message: Option<&str>) -> String {
    let mut out = format!(
        "score: {}  moves: {}  episode: {}\n\n{}\n\n",
        session.score(),
        session.moves(),
        session.episode_id(),
        session.board()
    );
    if session.game_over() {
        out.push_str("game over - r to restart, q to quit\n");
    } else {
        out.push_str("arrows/hjkl/wasd to slide, r to restart, q to quit\n");
    }
    if let Some(message) = message {
        out.push_str(message);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::SessionConfig;

    #[test]
    fn test_frame_contains_board_and_status() {
        let session = Session::new(SessionConfig::default()).unwrap();
        let frame = format_frame(&session, Some("can't slide up"));

        assert!(frame.starts_with("score: 0  moves: 0  episode: 0\n"));
        assert!(frame.contains(&session.board().to_string()));
        assert!(frame.contains("next: slide"));
        assert!(frame.ends_with("can't slide up\n"));
        assert!(!frame.contains("game over"));
    }

    #[test]
    fn test_frame_reports_game_over() {
        let session = Session::new(SessionConfig {
            width: 1,
            seed: 1,
            starting_tiles: 1,
        })
        .unwrap();
        let frame = format_frame(&session, None);
        assert!(frame.contains("game over"));
    }
}
