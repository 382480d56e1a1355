use core::{
    fmt,
    ops::{Add, AddAssign, Range},
};

use super::{
    run::byte_at,
    Attrs, Style, Styled, StyledRun,
};
use crate::{Error, Result};

/// A line of text made of [`StyledRun`]s.
///
/// The runs are kept maximally merged: there are no empty runs, and no two neighbors share a style. Every
/// operation here maintains that, so two lines that look the same compare equal.
///
/// All offsets are in characters. Operations that take an offset find the runs it falls into and split them there,
/// so styling is always preserved exactly per character.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct StyledLine {
    runs: Vec<StyledRun>,
}

impl StyledLine {
    pub const fn new() -> Self {
        Self { runs: Vec::new() }
    }

    /// Build a line from runs, merging as necessary.
    pub fn from_runs(runs: impl IntoIterator<Item = StyledRun>) -> Self {
        let mut res = Self::new();
        for run in runs {
            res.push(run);
        }
        res
    }

    /// `width` spaces in the given style.
    pub fn blank(width: usize, style: Style) -> Self {
        Self::from(StyledRun::fill(' ', width, style))
    }

    pub fn runs(&self) -> &[StyledRun] {
        &self.runs
    }

    /// Total length, in characters.
    pub fn len(&self) -> usize {
        self.runs.iter().map(StyledRun::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Just the text, without any styling.
    pub fn plain(&self) -> String {
        self.runs.iter().map(StyledRun::text).collect()
    }

    /// Every character along with its style.
    pub fn chars(&self) -> impl Iterator<Item = (char, &Style)> + '_ {
        self.runs.iter().flat_map(|r| r.text().chars().map(move |c| (c, r.get_style())))
    }

    /// Collapse to one run, if the whole line is one style. An empty line collapses to an empty run.
    pub fn into_run(mut self) -> Option<StyledRun> {
        match self.runs.len() {
            0 => Some(StyledRun::default()),
            1 => self.runs.pop(),
            _ => None,
        }
    }

    /// Append a run, merging it into the last one if the styles match.
    pub fn push(&mut self, run: StyledRun) {
        if run.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.same_style(&run) => last.push_str(run.text()),
            _ => self.runs.push(run),
        }
    }

    /// Append every run of another line.
    pub fn push_line(&mut self, other: StyledLine) {
        for run in other.runs {
            self.push(run);
        }
    }

    pub fn concat(mut self, other: StyledLine) -> StyledLine {
        self.push_line(other);
        self
    }

    /// Find the run containing character `idx`, and the offset of that run's start.
    fn locate(&self, idx: usize) -> Option<(&StyledRun, usize)> {
        let mut start = 0;
        for run in &self.runs {
            let len = run.len();
            if idx < start + len {
                return Some((run, start));
            }
            start += len;
        }
        None
    }

    /// The single character at `idx`, with its style.
    pub fn index(&self, idx: usize) -> Result<StyledRun> {
        match self.locate(idx) {
            Some((run, start)) => Ok(run.slice(idx - start..idx - start + 1)),
            None => Err(Error::IndexOutOfRange { index: idx, len: self.len() }),
        }
    }

    /// The unstyled character at `idx`, if there is one.
    pub fn char_at(&self, idx: usize) -> Option<char> {
        self.locate(idx).and_then(|(run, start)| run.text().chars().nth(idx - start))
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.len());
        range.start.min(end)..end
    }

    /// The characters in `range`, with their styles. Out-of-range ends are clamped, like string slicing in most
    /// scripting languages rather than Rust's.
    pub fn slice(&self, range: Range<usize>) -> StyledLine {
        let range = self.clamp(range);
        let mut res = StyledLine::new();
        let mut start = 0;
        for run in &self.runs {
            let end = start + run.len();
            if end > range.start && start < range.end {
                let from = range.start.max(start) - start;
                let to = range.end.min(end) - start;
                res.push(run.slice(from..to));
            }
            if end >= range.end {
                break;
            }
            start = end;
        }
        res
    }

    /// Every `step`th character in `range`.
    ///
    /// Stepping is only supported within a single run. A stepped slice crossing differently styled runs fails with
    /// [`Error::NotSupported`] rather than guessing how the styles should combine.
    pub fn slice_step(&self, range: Range<usize>, step: usize) -> Result<StyledLine> {
        if step == 0 {
            return Err(Error::invalid("slice step cannot be zero"));
        }
        let sliced = self.slice(range);
        if step == 1 {
            return Ok(sliced);
        }
        match sliced.into_run() {
            Some(run) => {
                let text: String = run.text().chars().step_by(step).collect();
                Ok(StyledLine::from(run.with_text(text)))
            }
            None => Err(Error::unsupported("stepped slice across differently styled runs")),
        }
    }

    /// Split into `[0, mid)` and `[mid, len)`.
    pub fn split_at(&self, mid: usize) -> (StyledLine, StyledLine) {
        (self.slice(0..mid), self.slice(mid..usize::MAX))
    }

    /// Remove the characters in `range`; the rest of the line closes up around the gap.
    pub fn delete(&mut self, range: Range<usize>) {
        let range = self.clamp(range);
        let mut res = self.slice(0..range.start);
        res.push_line(self.slice(range.end..usize::MAX));
        *self = res;
    }

    /// Splice `with` in at `offset`, clamping both to the current length.
    fn splice(&mut self, offset: usize, with: &StyledLine, inherit_bg: bool) {
        let len = self.len();
        let offset = offset.min(len);
        let end = (offset + with.len()).min(len);
        let mut middle = with.slice(0..end - offset);
        if inherit_bg {
            middle = middle.layered_on(&self.slice(offset..end));
        }
        let mut res = self.slice(0..offset);
        res.push_line(middle);
        res.push_line(self.slice(end..len));
        *self = res;
    }

    fn check_offset(&self, offset: usize) -> Result<()> {
        let len = self.len();
        if offset > len {
            return Err(Error::IndexOutOfRange { index: offset, len });
        }
        Ok(())
    }

    /// Replace the characters starting at `offset` with `with`, styles and all.
    ///
    /// The line never grows: anything in `with` past the current end is dropped. An `offset` past the end is an
    /// [`Error::IndexOutOfRange`].
    pub fn overwrite(&mut self, offset: usize, with: &StyledLine) -> Result<()> {
        self.check_offset(offset)?;
        self.splice(offset, with, false);
        Ok(())
    }

    /// Like [`Self::overwrite`], but wherever `with` has no background, the background already in the line shows
    /// through.
    pub fn paint(&mut self, offset: usize, with: &StyledLine) -> Result<()> {
        self.check_offset(offset)?;
        self.splice(offset, with, true);
        Ok(())
    }

    /// [`Self::paint`] for callers that have already clipped `offset` to the line.
    pub(crate) fn paint_clipped(&mut self, offset: usize, with: &StyledLine) {
        self.splice(offset, with, true);
    }

    /// Replace the single character at `idx`. `value` must be exactly one character long.
    pub fn set(&mut self, idx: usize, value: &StyledRun) -> Result<()> {
        let got = value.len();
        if got != 1 {
            return Err(Error::ShapeMismatch { expected: 1, got });
        }
        let len = self.len();
        if idx >= len {
            return Err(Error::IndexOutOfRange { index: idx, len });
        }
        self.overwrite(idx, &StyledLine::from(value.clone()))
    }

    /// `self` drawn over `under`, which must be the same length, filling in missing backgrounds from it.
    fn layered_on(&self, under: &StyledLine) -> StyledLine {
        let mut res = StyledLine::new();
        let mut below = under.runs.iter().map(|r| (r.get_style(), r.len()));
        let mut cur = below.next();
        for run in &self.runs {
            let mut text = run.text();
            while !text.is_empty() {
                let (under_style, left) = match cur {
                    Some(c) => c,
                    None => {
                        res.push(run.with_text(text));
                        break;
                    }
                };
                let here = text.chars().count().min(left);
                let split = byte_at(text, here);
                let style = run.get_style().over(under_style);
                res.push(StyledRun::with_style(&text[..split], style));
                text = &text[split..];
                cur = if left == here { below.next() } else { Some((under_style, left - here)) };
            }
        }
        res
    }

    /// Add attributes to every run.
    pub fn with_attrs(self, attrs: Attrs) -> StyledLine {
        StyledLine::from_runs(self.runs.into_iter().map(|mut r| {
            r.get_style_mut().attrs |= attrs;
            r
        }))
    }

    /// Pad with spaces, in the style of the last run, up to `width`.
    pub fn pad_to(mut self, width: usize) -> StyledLine {
        let len = self.len();
        if len < width {
            let style = self.runs.last().map(|r| *r.get_style()).unwrap_or_default();
            self.push(StyledRun::fill(' ', width - len, style));
        }
        self
    }
}

impl fmt::Display for StyledLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(run.text())?;
        }
        Ok(())
    }
}

impl From<StyledRun> for StyledLine {
    fn from(run: StyledRun) -> Self {
        let mut res = Self::new();
        res.push(run);
        res
    }
}

impl From<&str> for StyledLine {
    fn from(s: &str) -> Self {
        Self::from(StyledRun::new(s))
    }
}

impl From<String> for StyledLine {
    fn from(s: String) -> Self {
        Self::from(StyledRun::new(s))
    }
}

impl FromIterator<StyledRun> for StyledLine {
    fn from_iter<T: IntoIterator<Item = StyledRun>>(iter: T) -> Self {
        Self::from_runs(iter)
    }
}

impl Add for StyledLine {
    type Output = StyledLine;
    fn add(self, rhs: StyledLine) -> StyledLine {
        self.concat(rhs)
    }
}

impl Add<StyledRun> for StyledLine {
    type Output = StyledLine;
    fn add(mut self, rhs: StyledRun) -> StyledLine {
        self.push(rhs);
        self
    }
}

impl Add<&str> for StyledLine {
    type Output = StyledLine;
    fn add(mut self, rhs: &str) -> StyledLine {
        self.push(StyledRun::new(rhs));
        self
    }
}

impl AddAssign<StyledRun> for StyledLine {
    fn add_assign(&mut self, rhs: StyledRun) {
        self.push(rhs);
    }
}

impl AddAssign<StyledLine> for StyledLine {
    fn add_assign(&mut self, rhs: StyledLine) {
        self.push_line(rhs);
    }
}
