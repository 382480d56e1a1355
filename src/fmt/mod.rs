//! Styled text: colors, attributes, runs of same-styled text, and lines made of runs.
//!
//! The main types are [`StyledRun`], one string with one [`Style`], and [`StyledLine`], a list of runs kept
//! maximally merged. They're usually built with [`run!`][crate::run] and [`styled!`][crate::styled]:
//!
//! ```
//! use termbud::{styled, fmt::Rgb};
//! let name = "world";
//! let line = styled![rgb(50, 200, 50) bold "hello, ", "{}!"(name)];
//! assert_eq!(line.plain(), "hello, world!");
//! assert_eq!(line.runs().len(), 2);
//! ```
//!
//! Lengths and offsets are always counted in `char`s; every character is assumed to be one cell wide.

mod attrs;
mod color;
mod escape;
mod line;
mod run;

pub use attrs::Attrs;
pub use color::{Color, ColorMode, Ground, Rgb};
pub use escape::{strip_escapes, write_line, RESET};
pub use line::StyledLine;
pub use run::StyledRun;

/// Everything about how a piece of text looks, other than the text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Style {
    /// Foreground color, or `None` to leave the terminal's
    pub fg: Option<Rgb>,
    /// Background color, or `None` to keep whatever's underneath
    pub bg: Option<Rgb>,
    pub attrs: Attrs,
}

impl Style {
    /// No colors, no attributes.
    pub const NONE: Self = Style { fg: None, bg: None, attrs: Attrs::empty() };

    /// The foreground as a tagged [`Color`].
    pub fn fg_color(&self) -> Option<Color> {
        self.fg.map(Color::fore)
    }

    /// The background as a tagged [`Color`].
    pub fn bg_color(&self) -> Option<Color> {
        self.bg.map(Color::back)
    }

    /// This style, taking the background from `under` if it doesn't have its own.
    pub fn over(self, under: &Style) -> Style {
        Style { bg: self.bg.or(under.bg), ..self }
    }
}

macro_rules! style_fn {
    ( $(
        $name:ident
        $(( $( $arg:ident: $type:ty ),* $(,)? ))?
        =>
        $field:ident $op:tt $val:expr
    ),* $(,)? ) => { $(
        #[must_use]
        fn $name(mut self $($(, $arg: $type )*)? ) -> Self {
            self.get_style_mut().$field $op $val;
            self
        }
    )* };
}

/// Implemented by everything carrying a single [`Style`].
pub trait Styled {
    fn get_style(&self) -> &Style;
    fn get_style_mut(&mut self) -> &mut Style;
}

impl Styled for Style {
    fn get_style(&self) -> &Style {
        self
    }
    fn get_style_mut(&mut self) -> &mut Style {
        self
    }
}

/// Builder-style styling for anything implementing [`Styled`].
pub trait StyledExt: Styled + Sized {
    /// Replace the style wholesale.
    #[must_use]
    fn style(mut self, style: Style) -> Self {
        *self.get_style_mut() = style;
        self
    }

    /// Copy another item's style onto this one.
    #[must_use]
    fn style_of(mut self, rhs: &dyn Styled) -> Self {
        *self.get_style_mut() = *rhs.get_style();
        self
    }

    style_fn! {
        fg(c: Rgb) => fg = Some(c),                     bg(c: Rgb) => bg = Some(c),
        rgb(r: u8, g: u8, b: u8) => fg = Some(Rgb(r, g, b)),
        on_rgb(r: u8, g: u8, b: u8) => bg = Some(Rgb(r, g, b)),
        no_fg => fg = None,                             no_bg => bg = None,
        attrs(a: Attrs) => attrs |= a,
        bold => attrs |= Attrs::BOLD,
        faint => attrs |= Attrs::FAINT,
        italic => attrs |= Attrs::ITALIC,
        underline => attrs |= Attrs::UNDERLINE,
        blinking => attrs |= Attrs::BLINKING,
        reverse => attrs |= Attrs::REVERSE,
        hidden => attrs |= Attrs::HIDDEN,
        strike => attrs |= Attrs::STRIKE,
    }
}

impl<S: Styled> StyledExt for S {}

/// Create a single [`StyledRun`], e.g. `run!(bold rgb(200, 0, 0) "{} errors"(n))`.
#[macro_export]
macro_rules! run {
    [
        $( $name:ident $( ( $( $sarg:expr ),* $(,)? ) )? )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ] => {
        {
            #[allow(unused_imports)]
            use $crate::fmt::{StyledExt as _};
            $crate::fmt::StyledRun::new(
                format!( $text $(, $( $arg ),* )? )
            ) $( . $name ( $( $( $sarg ),* )? ) )*
        }
    };
}

/// Create a [`StyledLine`] out of a series of runs, merging same-styled neighbors.
#[macro_export]
macro_rules! styled {
    [ $(
        $( $name:ident $( ( $( $sarg:expr ),* $(,)? ) )? )*
        $text:literal
        $( ( $( $arg:expr ),* $(,)? ) )?
    ),* $(,)? ] => {
        {
            #[allow(unused_imports)]
            use $crate::fmt::{StyledExt as _};
            $crate::fmt::StyledLine::from_runs(vec![
                $(
                    $crate::fmt::StyledRun::new(
                        format!( $text $(, $( $arg ),* )? )
                    ) $( . $name ( $( $( $sarg ),* )? ) )*
                ),*
            ])
        }
    };
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn setters_compose() {
        let s = Style::NONE.rgb(1, 2, 3).bold().underline().on_rgb(4, 5, 6);
        assert_eq!(s.fg, Some(Rgb(1, 2, 3)));
        assert_eq!(s.bg, Some(Rgb(4, 5, 6)));
        assert_eq!(s.attrs, Attrs::BOLD | Attrs::UNDERLINE);
        assert_eq!(s.no_bg().bg, None);
    }

    #[test]
    fn over_keeps_own_background() {
        let under = Style::NONE.on_rgb(9, 9, 9);
        assert_eq!(Style::NONE.rgb(1, 1, 1).over(&under).bg, Some(Rgb(9, 9, 9)));
        assert_eq!(Style::NONE.on_rgb(1, 1, 1).over(&under).bg, Some(Rgb(1, 1, 1)));
    }

    #[test]
    fn macros_build_runs_and_lines() {
        let r = run!(bold rgb(1, 2, 3) "x{}"(5));
        assert_eq!(r.text(), "x5");
        assert_eq!(r.get_style().attrs, Attrs::BOLD);
        assert_eq!(r.get_style().fg, Some(Rgb(1, 2, 3)));

        let l = styled!["a", "b", bold "c"];
        assert_eq!(l.runs().len(), 2);
        assert_eq!(l.plain(), "abc");
    }
}
