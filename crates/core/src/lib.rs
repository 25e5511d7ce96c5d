//! Core of the ptext terminal presenter: outline parsing, the slide deck,
//! presenter settings, and clamped navigation over the deck.

pub mod config;
pub mod error;
pub mod navigation;
pub mod parser;
pub mod screen;
pub mod types;

pub use config::{Color, ColorPair, Command, Key, KeyBindings, Markers, Messages, Settings, Theme};
pub use error::{Error, Result};
pub use navigation::{Flow, Navigator, Presenter, View, BULLET};
pub use parser::{load_deck, OutlineParser};
pub use screen::{KeySource, ScopedTerminal, Screen, Style, TerminalMode};
pub use types::{Deck, Slide};
