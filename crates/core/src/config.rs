//! Presenter settings: outline markers, key bindings, sentinel messages and
//! the title color pair.
//!
//! Built once at startup and passed down by reference.

/// A single input symbol as seen by the presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The escape key.
    Esc,
    /// Anything the presenter has no name for (arrows, function keys, ...).
    Other,
}

/// What a bound key asks the presenter to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Next,
    Back,
    Quit,
}

/// Line prefixes recognised by the outline parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Markers {
    /// Starts a new slide.
    pub title: char,
    /// Starts a new bullet point.
    pub point: char,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            title: '+',
            point: '-',
        }
    }
}

/// Key sets for each presenter command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub next: Vec<Key>,
    pub back: Vec<Key>,
    pub quit: Vec<Key>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            next: vec![Key::Char('n')],
            back: vec![Key::Char('b'), Key::Char('p')],
            quit: vec![Key::Char('q'), Key::Esc],
        }
    }
}

impl KeyBindings {
    /// Look up the command bound to a key.
    ///
    /// Quit wins over the other sets if a key is bound more than once.
    pub fn command_for(&self, key: Key) -> Option<Command> {
        if self.quit.contains(&key) {
            Some(Command::Quit)
        } else if self.next.contains(&key) {
            Some(Command::Next)
        } else if self.back.contains(&key) {
            Some(Command::Back)
        } else {
            None
        }
    }
}

/// Text shown on the two sentinel positions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub start: String,
    pub end: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            start: "[Start of Presentation]".to_string(),
            end: "[End of Presentation]".to_string(),
        }
    }
}

/// Terminal colors available to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Reset,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
}

/// Foreground/background pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPair {
    pub fg: Color,
    pub bg: Color,
}

/// The single color pair used for slide titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub title: ColorPair,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            title: ColorPair {
                fg: Color::Yellow,
                bg: Color::Black,
            },
        }
    }
}

/// Everything the parser and presenter need to know up front.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub markers: Markers,
    pub keys: KeyBindings,
    pub messages: Messages,
    pub theme: Theme,
}

impl Settings {
    /// Create settings with the default markers, keys and messages.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the outline markers.
    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    /// Replace the key bindings.
    pub fn with_keys(mut self, keys: KeyBindings) -> Self {
        self.keys = keys;
        self
    }

    /// Replace the sentinel messages.
    pub fn with_messages(mut self, messages: Messages) -> Self {
        self.messages = messages;
        self
    }

    /// Replace the title color pair.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let keys = KeyBindings::default();

        assert_eq!(keys.command_for(Key::Char('n')), Some(Command::Next));
        assert_eq!(keys.command_for(Key::Char('b')), Some(Command::Back));
        assert_eq!(keys.command_for(Key::Char('p')), Some(Command::Back));
        assert_eq!(keys.command_for(Key::Char('q')), Some(Command::Quit));
        assert_eq!(keys.command_for(Key::Esc), Some(Command::Quit));
    }

    #[test]
    fn test_unbound_keys_map_to_nothing() {
        let keys = KeyBindings::default();

        assert_eq!(keys.command_for(Key::Char('x')), None);
        assert_eq!(keys.command_for(Key::Char('N')), None);
        assert_eq!(keys.command_for(Key::Other), None);
    }

    #[test]
    fn test_quit_wins_on_overlap() {
        let keys = KeyBindings {
            next: vec![Key::Char(' ')],
            back: Vec::new(),
            quit: vec![Key::Char(' ')],
        };

        assert_eq!(keys.command_for(Key::Char(' ')), Some(Command::Quit));
    }

    #[test]
    fn test_builder_overrides() {
        let settings = Settings::new()
            .with_markers(Markers {
                title: '#',
                point: '*',
            })
            .with_messages(Messages {
                start: "begin".to_string(),
                end: "fin".to_string(),
            });

        assert_eq!(settings.markers.title, '#');
        assert_eq!(settings.markers.point, '*');
        assert_eq!(settings.messages.end, "fin");
        assert_eq!(settings.keys, KeyBindings::default());
    }

    #[test]
    fn test_theme_override() {
        let pair = ColorPair {
            fg: Color::White,
            bg: Color::Blue,
        };
        let settings = Settings::new().with_theme(Theme { title: pair });

        assert_eq!(settings.theme.title, pair);
        assert_eq!(Theme::default().title.fg, Color::Yellow);
    }
}
