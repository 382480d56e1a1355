//! The real terminal, through crossterm.

#![cfg(feature = "cli_crossterm")]

use std::{
    io::{self, Write},
    sync::{Arc, Once},
};

use ::crossterm::{
    event::{self as ct, KeyEventKind, KeyModifiers},
    terminal,
};

use super::{KeySource, Output};
use crate::{Key, Result, Size};

/// Leaves raw mode on panic, so the message is readable. Installed the first time raw mode is entered.
static PANIC_HOOK: Once = Once::new();

/// Holds the terminal in raw mode until the last handle to it is dropped.
struct RawMode;

impl RawMode {
    fn enter() -> Result<Arc<Self>> {
        terminal::enable_raw_mode()?;
        install_panic_hook();
        Ok(Arc::new(RawMode))
    }
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let prev = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            prev(info);
        }));
    });
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

/// The terminal, in raw mode for as long as this (or either half of it) is alive.
pub struct CrosstermTerminal {
    keys: CrosstermKeys,
    output: CrosstermOutput,
}

impl CrosstermTerminal {
    pub fn new() -> Result<Self> {
        let raw = RawMode::enter()?;
        Ok(Self {
            keys: CrosstermKeys { _raw: raw.clone() },
            output: CrosstermOutput { out: io::stdout(), _raw: raw },
        })
    }

    /// Separate the input and output, so they can be used from different threads.
    pub fn split(self) -> (CrosstermKeys, CrosstermOutput) {
        (self.keys, self.output)
    }
}

impl KeySource for CrosstermTerminal {
    fn read_key(&mut self) -> Result<Key> {
        self.keys.read_key()
    }
}

impl Output for CrosstermTerminal {
    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write(text)
    }
    fn flush(&mut self) -> Result<()> {
        self.output.flush()
    }
    fn size(&self) -> Result<Size> {
        self.output.size()
    }
    fn enable_ansi(&mut self) -> Result<()> {
        self.output.enable_ansi()
    }
}

/// Keypresses from the terminal. Releases, mouse events, and the like are skipped.
pub struct CrosstermKeys {
    _raw: Arc<RawMode>,
}

impl KeySource for CrosstermKeys {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match ct::read() {
                Ok(ct::Event::Key(ev)) if ev.kind != KeyEventKind::Release => {
                    if let Some(key) = key_for(ev) {
                        return Ok(key);
                    }
                }
                Ok(_) => (),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => return Ok(Key::Ctrl('c')),
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Our key for a crossterm key event, if it's one we care about.
fn key_for(ev: ct::KeyEvent) -> Option<Key> {
    use ct::KeyCode as KC;
    let key = match ev.code {
        KC::Char(c) if ev.modifiers.contains(KeyModifiers::CONTROL) => Key::Ctrl(c.to_ascii_lowercase()),
        KC::Char(c) => Key::Char(c),
        KC::F(n) => Key::F(n),
        KC::Esc => Key::Escape,
        KC::Backspace => Key::Backspace,
        KC::Enter => Key::Enter,
        KC::Left => Key::Left,
        KC::Right => Key::Right,
        KC::Up => Key::Up,
        KC::Down => Key::Down,
        KC::Home => Key::Home,
        KC::End => Key::End,
        KC::PageUp => Key::PageUp,
        KC::PageDown => Key::PageDown,
        KC::Tab if ev.modifiers.contains(KeyModifiers::SHIFT) => Key::BackTab,
        KC::Tab => Key::Tab,
        KC::BackTab => Key::BackTab,
        KC::Delete => Key::Delete,
        KC::Insert => Key::Insert,
        _ => return None,
    };
    Some(key)
}

/// Standard output, with newlines fixed up for raw mode.
pub struct CrosstermOutput {
    out: io::Stdout,
    _raw: Arc<RawMode>,
}

impl Output for CrosstermOutput {
    fn write(&mut self, text: &str) -> Result<()> {
        // raw mode doesn't return the carriage on its own
        self.out.write_all(text.replace('\n', "\r\n").as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        let (w, h) = terminal::size()?;
        Ok(Size(w as usize, h as usize))
    }

    fn enable_ansi(&mut self) -> Result<()> {
        #[cfg(windows)]
        if !::crossterm::ansi_support::supports_ansi() {
            return Err(crate::Error::unsupported("this console can't be switched to ANSI mode"));
        }
        Ok(())
    }
}
