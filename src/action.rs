//! Input, as the dialog sees it.

/// A single keypress.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Key {
    /// A printable character, already shifted if applicable.
    Char(char),
    /// Ctrl plus a letter, lowercased. Ctrl-C is also what an interrupted read turns into.
    Ctrl(char),
    F(u8),
    Escape,
    Backspace,
    Up,
    Down,
    Left,
    Right,
    PageUp,
    PageDown,
    Home,
    End,
    Delete,
    Insert,
    Tab,
    /// Shift-Tab
    BackTab,
    Enter,
}

impl Key {
    /// The keys that always close a dialog, no matter which widget is active.
    pub fn is_quit(&self) -> bool {
        matches!(self, Key::Ctrl('c') | Key::Escape)
    }

    /// The character this key would insert into a text field, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}

/// Something that drives a dialog update.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Event {
    Key(Key),
    /// One pulse of the fixed-rate animation clock.
    Tick,
}

impl From<Key> for Event {
    fn from(key: Key) -> Self {
        Event::Key(key)
    }
}
