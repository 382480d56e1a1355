//! Where keys come from and where frames go.
//!
//! A dialog talks to the terminal through two halves: a [`KeySource`], read from the thread that called
//! [`Dialog::show_with`](crate::Dialog::show_with), and an [`Output`], shared (behind a lock) with the tick thread.
//! They're separate so the blocking read never holds up drawing.
//!
//! Backends:
//!
//! - [`CrosstermTerminal`], with the `cli_crossterm` feature (on by default). It's both halves at once; split it with
//!   [`CrosstermTerminal::split`].
//! - [`ScriptedKeys`] and [`CaptureOutput`], which feed in a fixed list of keys and record what was written. Useful
//!   for tests, or driving a dialog without a terminal.

use crate::{Key, Result, Size};

mod crossterm;
mod script;

#[cfg(feature = "cli_crossterm")]
pub use self::crossterm::{CrosstermKeys, CrosstermOutput, CrosstermTerminal};
pub use script::{CaptureOutput, ScriptedKeys};

/// Something keys can be read from.
pub trait KeySource {
    /// Wait for the next keypress.
    ///
    /// If the read is interrupted (e.g. by a signal), this returns `Key::Ctrl('c')` instead of an error, so the
    /// dialog closes normally.
    fn read_key(&mut self) -> Result<Key>;
}

/// Something frames can be written to.
pub trait Output: Send {
    /// Write the text, escapes included, as-is. May be buffered until [`Self::flush`].
    fn write(&mut self, text: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// The size of the display, in characters.
    fn size(&self) -> Result<Size>;

    /// Make sure the display understands ANSI escapes, if it needs to be told.
    ///
    /// Called once before the first frame. Most outputs don't need to do anything.
    fn enable_ansi(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<O: Output + ?Sized> Output for Box<O> {
    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }
    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
    fn size(&self) -> Result<Size> {
        (**self).size()
    }
    fn enable_ansi(&mut self) -> Result<()> {
        (**self).enable_ansi()
    }
}

/// Load the terminal backend, splitting it into its halves.
///
/// Fails with [`Error::NoBackend`](crate::Error::NoBackend) if the crate was built without any.
#[cfg(feature = "cli_crossterm")]
pub fn load() -> Result<(CrosstermKeys, CrosstermOutput)> {
    let term = CrosstermTerminal::new()?;
    tracing::debug!(backend = "cli_crossterm", "loaded terminal backend");
    Ok(term.split())
}

/// Load the terminal backend, splitting it into its halves.
///
/// Fails with [`Error::NoBackend`](crate::Error::NoBackend) if the crate was built without any.
#[cfg(not(feature = "cli_crossterm"))]
pub fn load() -> Result<(ScriptedKeys, CaptureOutput)> {
    Err(crate::Error::NoBackend("no terminal backend compiled in; enable the `cli_crossterm` feature"))
}
