//! A fixed-size grid of styled text, and compositing grids into each other.

use crate::{
    fmt::{write_line, ColorMode, Rgb, Style, Styled, StyledLine, StyledRun, RESET},
    Point, Result, Size,
};

/// How a sub-canvas is framed when placed with [`Canvas::place_canvas`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Decoration {
    /// Draw a box one cell outside the placed canvas.
    pub border: bool,
    /// With a border, add a shaded fringe down the left and along the bottom.
    pub shadow: bool,
}

impl Decoration {
    pub const NONE: Self = Decoration { border: false, shadow: false };
    pub const BORDER: Self = Decoration { border: true, shadow: false };
    pub const SHADOW: Self = Decoration { border: true, shadow: true };
}

const SHADOW_FG: Rgb = Rgb(180, 180, 180);

/// A `width x height` grid of styled cells that text and other canvases get painted into.
///
/// Every line is always exactly `width` long: writes are clipped to the canvas, never appended. Anything placed
/// without a background of its own takes on the background already underneath it.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Canvas {
    size: Size,
    background: Option<Rgb>,
    lines: Vec<StyledLine>,
}

impl Canvas {
    /// A canvas of spaces in `background`.
    pub fn new(size: Size, background: Option<Rgb>) -> Self {
        let blank = StyledLine::blank(size.w(), Style { bg: background, ..Style::NONE });
        Self { size, background, lines: vec![blank; size.h()] }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.w()
    }

    pub fn height(&self) -> usize {
        self.size.h()
    }

    pub fn background(&self) -> Option<Rgb> {
        self.background
    }

    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }

    pub fn line(&self, y: usize) -> Option<&StyledLine> {
        self.lines.get(y)
    }

    /// Paint `text` with its first character at `(x, y)`.
    ///
    /// A negative `x` cuts that many characters off the front of `text`; anything past the right edge is dropped.
    /// Placing on a row outside the canvas, or starting at or after the right edge, does nothing.
    pub fn place(&mut self, text: &StyledLine, x: isize, y: isize) {
        let width = self.width();
        let row = match usize::try_from(y) {
            Ok(row) if row < self.height() => row,
            _ => return,
        };
        if text.is_empty() || x >= width as isize {
            return;
        }
        let (start, trim) = if x < 0 { (0, x.unsigned_abs()) } else { (x as usize, 0) };
        if trim >= text.len() {
            return;
        }
        let clipped = text.slice(trim..trim + (width - start));
        self.lines[row].paint_clipped(start, &clipped);
    }

    /// [`Self::place`] at a non-negative position.
    pub fn place_at(&mut self, text: &StyledLine, pos: Point) {
        self.place(text, pos.x() as isize, pos.y() as isize);
    }

    /// Write plain text, optionally in a foreground color, keeping whatever background is underneath.
    pub fn place_str(&mut self, text: &str, x: isize, y: isize, fg: Option<Rgb>) {
        let run = StyledRun::with_style(text, Style { fg, ..Style::NONE });
        self.place(&StyledLine::from(run), x, y);
    }

    /// Where something `len` wide goes to be centered. Odd leftover space ends up on the right.
    fn centered_x(&self, len: usize) -> isize {
        (self.width() as isize - len as isize).div_euclid(2)
    }

    /// Place `text` horizontally centered on row `y`.
    pub fn center_place(&mut self, text: &StyledLine, y: isize) {
        let x = self.centered_x(text.len());
        self.place(text, x, y);
    }

    /// Paste `other` with its top-left corner at `(x, y)`, clipping exactly like [`Self::place`].
    ///
    /// With [`Decoration::border`], a box is drawn around `other`, one cell outside it. The border column on the
    /// left also gets a fringe column outside it, and a fringe row goes below the bottom edge; with
    /// [`Decoration::shadow`] the fringe is a shade character, otherwise it's blank.
    pub fn place_canvas(&mut self, other: &Canvas, x: isize, y: isize, deco: Decoration) {
        if !deco.border {
            for (i, line) in other.lines.iter().enumerate() {
                self.place(line, x, y + i as isize);
            }
            return;
        }

        let w = other.width();
        let h = other.height() as isize;
        let fringe = if deco.shadow {
            StyledRun::with_style("\\", Style { fg: Some(SHADOW_FG), ..Style::NONE })
        } else {
            StyledRun::new(" ")
        };
        let rule = "─".repeat(w);

        self.place(&StyledLine::from(format!("┌{}┐", rule)), x - 1, y - 1);
        for (i, line) in other.lines.iter().enumerate() {
            let framed = fringe.clone() + "│" + line.clone() + "│";
            self.place(&framed, x - 2, y + i as isize);
        }
        let bottom = fringe.clone() + format!("└{}┘", rule).as_str();
        self.place(&bottom, x - 2, y + h);
        self.place(&StyledLine::from(fringe.repeat(w + 3)), x - 2, y + h + 1);
    }

    /// Place `other` horizontally centered, with its top at row `y`.
    pub fn center_canvas(&mut self, other: &Canvas, y: isize, deco: Decoration) {
        let x = self.centered_x(other.width());
        self.place_canvas(other, x, y, deco);
    }

    /// Render to a string of text and escape codes.
    ///
    /// Each line ends with a full reset, and lines are joined with `\n` (no trailing newline). The output never
    /// leaves a style active: even a canvas with no lines renders as a lone reset.
    pub fn serialize(&self, mode: ColorMode) -> Result<String> {
        self.serialize_with(mode, false)
    }

    /// [`Self::serialize`], optionally leaving out every background color so the terminal's own shows through.
    pub fn serialize_with(&self, mode: ColorMode, ignore_background: bool) -> Result<String> {
        let mut out = String::with_capacity(self.size.area() * 2);
        for (i, line) in self.lines.iter().enumerate() {
            if i != 0 {
                out.push('\n');
            }
            if ignore_background {
                write_line(&without_background(line), mode, &mut out)?;
            } else {
                write_line(line, mode, &mut out)?;
            }
        }
        if self.lines.is_empty() {
            out.push_str(RESET);
        }
        Ok(out)
    }

    /// Each row's text, with no styling.
    pub fn plain_rows(&self) -> Vec<String> {
        self.lines.iter().map(StyledLine::plain).collect()
    }
}

fn without_background(line: &StyledLine) -> StyledLine {
    StyledLine::from_runs(
        line.runs().iter().map(|run| StyledRun::with_style(run.text(), Style { bg: None, ..*run.get_style() })),
    )
}
