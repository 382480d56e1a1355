use core::ops::{Add, Mul, Range};

use super::{Style, Styled, StyledLine};

/// Byte offset of the `idx`th char of `s`, or `s.len()` if it's past the end.
pub(crate) fn byte_at(s: &str, idx: usize) -> usize {
    s.char_indices().nth(idx).map(|(b, _)| b).unwrap_or(s.len())
}

/// Slice `s` by char indices, clamping both ends to the string.
pub(crate) fn char_slice(s: &str, range: Range<usize>) -> &str {
    let start = byte_at(s, range.start);
    let end = byte_at(s, range.end).max(start);
    &s[start..end]
}

/// Some text where every character has the same [`Style`].
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct StyledRun {
    text: String,
    style: Style,
}

impl Styled for StyledRun {
    fn get_style(&self) -> &Style {
        &self.style
    }
    fn get_style_mut(&mut self) -> &mut Style {
        &mut self.style
    }
}

impl StyledRun {
    /// Unstyled text. Add style with [`StyledExt`][super::StyledExt].
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), style: Style::NONE }
    }

    pub fn with_style(text: impl Into<String>, style: Style) -> Self {
        Self { text: text.into(), style }
    }

    /// A run of `n` copies of `ch`.
    pub fn fill(ch: char, n: usize, style: Style) -> Self {
        Self { text: core::iter::repeat(ch).take(n).collect(), style }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The same style with different text.
    pub fn with_text(&self, text: impl Into<String>) -> StyledRun {
        Self { text: text.into(), style: self.style }
    }

    /// The characters in `range`, keeping the style. Out-of-range ends are clamped.
    pub fn slice(&self, range: Range<usize>) -> StyledRun {
        self.with_text(char_slice(&self.text, range))
    }

    /// The text repeated `n` times.
    pub fn repeat(&self, n: usize) -> StyledRun {
        self.with_text(self.text.repeat(n))
    }

    /// Whether this would merge with `other` when placed directly after it.
    pub fn same_style(&self, other: &StyledRun) -> bool {
        self.style == other.style
    }

    /// Join two runs. Same-styled runs merge into one, anything else gives a two-run line.
    pub fn concat(self, other: StyledRun) -> StyledLine {
        StyledLine::from_runs(vec![self, other])
    }

    pub(crate) fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }
}

impl From<&str> for StyledRun {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StyledRun {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Mul<usize> for StyledRun {
    type Output = StyledRun;
    fn mul(self, n: usize) -> StyledRun {
        self.repeat(n)
    }
}

impl Add for StyledRun {
    type Output = StyledLine;
    fn add(self, rhs: StyledRun) -> StyledLine {
        self.concat(rhs)
    }
}

impl Add<StyledLine> for StyledRun {
    type Output = StyledLine;
    fn add(self, rhs: StyledLine) -> StyledLine {
        StyledLine::from(self) + rhs
    }
}

impl Add<&str> for StyledRun {
    type Output = StyledLine;
    fn add(self, rhs: &str) -> StyledLine {
        self.concat(StyledRun::new(rhs))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fmt::{Rgb, StyledExt};

    #[test]
    fn same_style_concat_merges() {
        let a = StyledRun::new("abc").rgb(1, 2, 3);
        let b = StyledRun::new("de").rgb(1, 2, 3);
        let joined = a.clone() + b.clone();
        assert_eq!(joined.runs().len(), 1);
        let merged = joined.into_run().unwrap();
        assert_eq!(merged.text(), "abcde");
        assert_eq!(merged.len(), a.len() + b.len());
        assert_eq!(merged.get_style().fg, Some(Rgb(1, 2, 3)));
    }

    #[test]
    fn different_style_concat_splits() {
        let a = StyledRun::new("abc").rgb(1, 2, 3);
        let b = StyledRun::new("de").on_rgb(1, 2, 3);
        let joined = a + b;
        assert_eq!(joined.runs().len(), 2);
        assert_eq!(joined.len(), 5);
        assert!(joined.into_run().is_none());
    }

    #[test]
    fn attrs_prevent_merging() {
        let joined = StyledRun::new("a") + StyledRun::new("b").bold();
        assert_eq!(joined.runs().len(), 2);
    }

    #[test]
    fn multiply_repeats() {
        let r = StyledRun::new("ab").underline() * 3;
        assert_eq!(r.text(), "ababab");
        assert!(r.get_style().attrs.contains(crate::fmt::Attrs::UNDERLINE));
        assert_eq!((StyledRun::new("x") * 0).len(), 0);
    }

    #[test]
    fn slicing_counts_chars() {
        let r = StyledRun::new("▁▂▃▄▅");
        assert_eq!(r.slice(1..3).text(), "▂▃");
        assert_eq!(r.slice(3..10).text(), "▄▅");
        assert_eq!(r.slice(4..2).text(), "");
    }
}
