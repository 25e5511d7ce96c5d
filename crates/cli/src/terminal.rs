//! Crossterm implementation of the presenter's terminal boundary.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{self, Colors, Print, ResetColor, SetColors};
use crossterm::terminal::{
    self, disable_raw_mode, enable_raw_mode, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, execute, queue};
use log::LevelFilter;
use ptext_core::{Color, Error, Key, KeySource, Result, Screen, Style, TerminalMode, Theme};
use std::io::{self, Stdout, Write};

/// Full-screen terminal on stdout.
pub struct CrosstermTerminal {
    out: Stdout,
    theme: Theme,
    paused_logs: Option<LogPause>,
}

impl CrosstermTerminal {
    pub fn new(theme: Theme) -> Self {
        Self {
            out: io::stdout(),
            theme,
            paused_logs: None,
        }
    }
}

impl TerminalMode for CrosstermTerminal {
    fn acquire(&mut self) -> Result<()> {
        // The logger writes to stderr, which is the screen we are about to own.
        self.paused_logs.get_or_insert_with(LogPause::start);
        enable_raw_mode().map_err(Error::terminal)?;
        execute!(self.out, EnterAlternateScreen, cursor::Hide).map_err(Error::terminal)
    }

    fn release(&mut self) {
        let screen = execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen);
        let raw = disable_raw_mode();

        if let Some(pause) = self.paused_logs.take() {
            pause.end();
        }
        if let Err(err) = screen {
            log::warn!("Failed to leave alternate screen: {}", err);
        }
        if let Err(err) = raw {
            log::warn!("Failed to disable raw mode: {}", err);
        }
    }
}

/// Turns logging off and remembers the level to restore.
struct LogPause {
    saved: LevelFilter,
}

impl LogPause {
    fn start() -> Self {
        let saved = log::max_level();
        log::set_max_level(LevelFilter::Off);
        Self { saved }
    }

    fn end(self) {
        log::set_max_level(self.saved);
    }
}

impl Screen for CrosstermTerminal {
    fn clear(&mut self) -> Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All)).map_err(Error::terminal)
    }

    fn put_str(&mut self, row: u16, col: u16, text: &str, style: Style) -> Result<()> {
        queue!(self.out, cursor::MoveTo(col, row)).map_err(Error::terminal)?;

        let written = match style {
            Style::Plain => queue!(self.out, Print(text)),
            Style::Title => {
                let pair = self.theme.title;
                queue!(
                    self.out,
                    SetColors(Colors::new(to_crossterm(pair.fg), to_crossterm(pair.bg))),
                    Print(text),
                    ResetColor
                )
            }
        };
        written.map_err(Error::terminal)
    }

    fn refresh(&mut self) -> Result<()> {
        self.out.flush().map_err(Error::terminal)
    }
}

impl KeySource for CrosstermTerminal {
    fn next_key(&mut self) -> Result<Key> {
        loop {
            match event::read().map_err(Error::terminal)? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(to_key(key)),
                _ => {}
            }
        }
    }
}

fn to_key(key: KeyEvent) -> Key {
    match key.code {
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => Key::Char(c),
        _ => Key::Other,
    }
}

fn to_crossterm(color: Color) -> style::Color {
    match color {
        Color::Reset => style::Color::Reset,
        Color::Black => style::Color::Black,
        Color::Red => style::Color::DarkRed,
        Color::Green => style::Color::DarkGreen,
        Color::Yellow => style::Color::DarkYellow,
        Color::Blue => style::Color::DarkBlue,
        Color::Magenta => style::Color::DarkMagenta,
        Color::Cyan => style::Color::DarkCyan,
        Color::White => style::Color::Grey,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(to_key(press(KeyCode::Char('n'), KeyModifiers::NONE)), Key::Char('n'));
        assert_eq!(to_key(press(KeyCode::Char('N'), KeyModifiers::SHIFT)), Key::Char('N'));
        assert_eq!(to_key(press(KeyCode::Esc, KeyModifiers::NONE)), Key::Esc);
        assert_eq!(to_key(press(KeyCode::Right, KeyModifiers::NONE)), Key::Other);
    }

    #[test]
    fn test_control_chords_are_not_characters() {
        assert_eq!(to_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)), Key::Other);
    }

    #[test]
    fn test_log_pause_restores_level() {
        log::set_max_level(LevelFilter::Debug);

        let pause = LogPause::start();
        assert_eq!(log::max_level(), LevelFilter::Off);

        pause.end();
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }

    #[test]
    fn test_default_title_colors() {
        let pair = Theme::default().title;

        assert_eq!(to_crossterm(pair.fg), style::Color::DarkYellow);
        assert_eq!(to_crossterm(pair.bg), style::Color::Black);
    }
}
