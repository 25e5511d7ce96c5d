//! Slide navigation: a bounded index over the deck plus the key loop that
//! drives it.
//!
//! Positions run from `0` (start sentinel) through `1..=len` (real slides) to
//! `len + 1` (end sentinel). Every move is clamped into that range.

use crate::config::{Command, Key, Settings};
use crate::error::Result;
use crate::screen::{KeySource, Screen, Style};
use crate::types::{Deck, Slide};

/// Prefix drawn before the first line of each point.
pub const BULLET: &str = "* ";

/// Row of the first point, leaving a blank line under the title.
const BODY_ROW: u16 = 2;

/// What sits at a navigation position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View<'a> {
    Start,
    Slide(&'a Slide),
    End,
}

/// Clamped slide index over an immutable deck.
#[derive(Debug, Clone)]
pub struct Navigator {
    deck: Deck,
    current: usize,
}

impl Navigator {
    /// Start at the start sentinel.
    pub fn new(deck: Deck) -> Self {
        Self { deck, current: 0 }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Current position, `0..=deck.len() + 1`.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Jump to `n`, clamped into the valid range. Returns the new position.
    pub fn goto(&mut self, n: i64) -> usize {
        let end = self.deck.end_position();
        self.current = if n <= 0 {
            0
        } else {
            usize::try_from(n).map_or(end, |n| n.min(end))
        };
        self.current
    }

    pub fn advance(&mut self) -> usize {
        self.goto(self.position_as_i64().saturating_add(1))
    }

    pub fn retreat(&mut self) -> usize {
        self.goto(self.position_as_i64().saturating_sub(1))
    }

    /// What to show at the current position.
    pub fn view(&self) -> View<'_> {
        if self.current == 0 {
            View::Start
        } else {
            self.deck.get(self.current).map_or(View::End, View::Slide)
        }
    }

    fn position_as_i64(&self) -> i64 {
        i64::try_from(self.current).unwrap_or(i64::MAX)
    }
}

/// Whether the key loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Maps keys to navigation and draws the current position.
pub struct Presenter<'s> {
    navigator: Navigator,
    settings: &'s Settings,
}

impl<'s> Presenter<'s> {
    pub fn new(deck: Deck, settings: &'s Settings) -> Self {
        Self {
            navigator: Navigator::new(deck),
            settings,
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Draw the current position.
    ///
    /// Sentinels show a single message line. Slides show the title on row 0
    /// and points from row 2. A multi-line point gets one bullet on its first
    /// line; its other lines follow on the next rows at column 0.
    pub fn render<S: Screen + ?Sized>(&self, screen: &mut S) -> Result<()> {
        screen.clear()?;

        match self.navigator.view() {
            View::Start => screen.put_str(0, 0, &self.settings.messages.start, Style::Plain)?,
            View::End => screen.put_str(0, 0, &self.settings.messages.end, Style::Plain)?,
            View::Slide(slide) => {
                screen.put_str(0, 0, slide.title(), Style::Title)?;

                let mut row = BODY_ROW;
                for point in slide.body() {
                    for (idx, line) in point.split('\n').enumerate() {
                        if idx == 0 {
                            screen.put_str(row, 0, &format!("{}{}", BULLET, line), Style::Plain)?;
                        } else {
                            screen.put_str(row, 0, line, Style::Plain)?;
                        }
                        row = row.saturating_add(1);
                    }
                }
            }
        }

        screen.refresh()
    }

    /// React to one key. Only keys that move the index cause a redraw.
    pub fn handle<S: Screen + ?Sized>(&mut self, key: Key, screen: &mut S) -> Result<Flow> {
        let position = match self.settings.keys.command_for(key) {
            Some(Command::Quit) => return Ok(Flow::Quit),
            Some(Command::Next) => self.navigator.advance(),
            Some(Command::Back) => self.navigator.retreat(),
            None => return Ok(Flow::Continue),
        };

        log::debug!("Showing position {} of {}", position, self.navigator.deck().len());
        self.render(screen)?;
        Ok(Flow::Continue)
    }

    /// Draw the start sentinel, then process keys until a quit key arrives.
    pub fn run<T: Screen + KeySource + ?Sized>(&mut self, terminal: &mut T) -> Result<()> {
        self.render(terminal)?;

        loop {
            let key = terminal.next_key()?;
            if self.handle(key, terminal)? == Flow::Quit {
                log::debug!("Quit at position {}", self.navigator.current());
                return Ok(());
            }
        }
    }
}
