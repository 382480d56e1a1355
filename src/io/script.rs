//! Headless backends.

use std::{collections::VecDeque, sync::Arc};

use parking_lot::Mutex;

use super::{KeySource, Output};
use crate::{Key, Result, Size};

/// Plays back a fixed list of keys, then `Ctrl-C` forever after.
#[derive(Clone, Debug, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self { keys: keys.into_iter().collect() }
    }

    /// How many keys are left before it starts sending `Ctrl-C`.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeySource for ScriptedKeys {
    fn read_key(&mut self) -> Result<Key> {
        Ok(self.keys.pop_front().unwrap_or(Key::Ctrl('c')))
    }
}

/// Records everything written to it.
///
/// Clones share the same record, so keep one around to inspect after handing the other to a dialog.
#[derive(Clone, Debug)]
pub struct CaptureOutput {
    written: Arc<Mutex<String>>,
    size: Size,
}

impl CaptureOutput {
    /// An output pretending to be a terminal of the given size.
    pub fn new(size: Size) -> Self {
        Self { written: Arc::default(), size }
    }

    /// Everything written so far.
    pub fn contents(&self) -> String {
        self.written.lock().clone()
    }

    /// Take everything written so far, leaving the record empty.
    pub fn take(&self) -> String {
        std::mem::take(&mut *self.written.lock())
    }
}

impl Default for CaptureOutput {
    fn default() -> Self {
        Self::new(Size(80, 24))
    }
}

impl Output for CaptureOutput {
    fn write(&mut self, text: &str) -> Result<()> {
        self.written.lock().push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn size(&self) -> Result<Size> {
        Ok(self.size)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn keys_run_out_into_ctrl_c() {
        let mut keys = ScriptedKeys::new([Key::Char('a'), Key::Enter]);
        assert_eq!(keys.remaining(), 2);
        assert_eq!(keys.read_key().unwrap(), Key::Char('a'));
        assert_eq!(keys.read_key().unwrap(), Key::Enter);
        assert_eq!(keys.read_key().unwrap(), Key::Ctrl('c'));
        assert_eq!(keys.read_key().unwrap(), Key::Ctrl('c'));
    }

    #[test]
    fn capture_shares_record() {
        let seen = CaptureOutput::new(Size(10, 2));
        let mut out = seen.clone();
        out.write("ab").unwrap();
        out.write("cd").unwrap();
        out.flush().unwrap();
        assert_eq!(seen.contents(), "abcd");
        assert_eq!(seen.take(), "abcd");
        assert_eq!(seen.contents(), "");
        assert_eq!(out.size().unwrap(), Size(10, 2));
    }
}
