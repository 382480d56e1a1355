use core::fmt::Write as _;
use std::borrow::Cow;

use crossterm::{
    style::{Attribute, SetAttribute},
    Command,
};
use lazy_static::lazy_static;
use regex::Regex;

use super::{Attrs, ColorMode, Style, Styled, StyledLine};
use crate::Result;

/// The full SGR reset, `ESC[0m`.
pub const RESET: &str = "\x1b[0m";

lazy_static! {
    static ref ESCAPE: Regex = Regex::new(r"\x1B(?:[@-Z\\-_]|\[[0-?]*[ -/]*[@-~])")
        .expect("escape pattern is valid");
}

/// Remove every ANSI escape sequence, leaving just the visible text.
pub fn strip_escapes(s: &str) -> Cow<'_, str> {
    ESCAPE.replace_all(s, "")
}

fn write_full(style: &Style, mode: ColorMode, out: &mut String) -> Result<()> {
    if let Some(bg) = style.bg_color() {
        bg.write_escape(mode, out)?;
    }
    if let Some(fg) = style.fg_color() {
        fg.write_escape(mode, out)?;
    }
    style.attrs.write_on(out)?;
    Ok(())
}

fn write_attr_change(from: Attrs, to: Attrs, out: &mut String) -> Result<()> {
    let intensity = Attrs::BOLD | Attrs::FAINT;
    let removed = from - to;
    let mut added = to - from;
    removed.write_off(out)?;
    // the shared off code for bold/faint clears both, so restore whichever is meant to stay
    if removed.intersects(intensity) {
        added |= to & intensity;
    }
    added.write_on(out)?;
    Ok(())
}

/// Render one line, emitting escapes only where the style actually changes, and finishing with a full reset.
///
/// The terminal is assumed to be in the reset state when the line starts.
pub fn write_line(line: &StyledLine, mode: ColorMode, out: &mut String) -> Result<()> {
    let mut cur = Style::NONE;
    for run in line.runs() {
        let style = run.get_style();
        if style.fg != cur.fg || style.bg != cur.bg {
            if cur != Style::NONE {
                SetAttribute(Attribute::Reset).write_ansi(out)?;
            }
            write_full(style, mode, out)?;
        } else if style.attrs != cur.attrs {
            write_attr_change(cur.attrs, style.attrs, out)?;
        }
        out.push_str(run.text());
        cur = *style;
    }
    out.write_str(RESET)?;
    Ok(())
}
