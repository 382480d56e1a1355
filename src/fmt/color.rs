use core::{fmt, str::FromStr};

use crossterm::{
    style::{Color as CtColor, SetBackgroundColor, SetForegroundColor},
    Command,
};

use crate::{Error, Result};

/// A 24-bit color.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Scale every channel by `factor`, rounding to the nearest value. Used for shading, e.g. input field shadows.
    pub fn scale(self, factor: f32) -> Rgb {
        let ch = |c: u8| (c as f32 * factor).round().clamp(0.0, 255.0) as u8;
        Rgb(ch(self.0), ch(self.1), ch(self.2))
    }

    /// Index into the 6x6x6 cube of the 256-color palette.
    pub fn cube_index(self) -> u8 {
        fn q(c: u8) -> u8 {
            (c.saturating_sub(48) as u16 * 5 / 188) as u8
        }
        16 + 36 * q(self.0) + 6 * q(self.1) + q(self.2)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from(c: (u8, u8, u8)) -> Self {
        Rgb(c.0, c.1, c.2)
    }
}

/// Which part of a cell a [`Color`] applies to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Ground {
    Fore,
    Back,
}

/// An RGB value tagged with where it's applied. Two colors are equal only if both match.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Color {
    pub rgb: Rgb,
    pub ground: Ground,
}

impl Color {
    pub const fn fore(rgb: Rgb) -> Self {
        Self { rgb, ground: Ground::Fore }
    }

    pub const fn back(rgb: Rgb) -> Self {
        Self { rgb, ground: Ground::Back }
    }

    /// Write the escape sequence selecting this color under `mode`.
    pub fn write_escape(&self, mode: ColorMode, out: &mut impl fmt::Write) -> Result<()> {
        let ct = match mode {
            ColorMode::TrueColor => CtColor::Rgb { r: self.rgb.0, g: self.rgb.1, b: self.rgb.2 },
            ColorMode::Legacy => CtColor::AnsiValue(self.rgb.cube_index()),
            ColorMode::Basic16 => return Err(Error::unsupported("the 16-color mode is not implemented")),
        };
        match self.ground {
            Ground::Fore => SetForegroundColor(ct).write_ansi(out)?,
            Ground::Back => SetBackgroundColor(ct).write_ansi(out)?,
        }
        Ok(())
    }

    /// The escape sequence for this color, as its own string.
    pub fn escape(&self, mode: ColorMode) -> Result<String> {
        let mut out = String::new();
        self.write_escape(mode, &mut out)?;
        Ok(out)
    }
}

/// How colors get turned into escape codes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum ColorMode {
    /// 24-bit `38;2;r;g;b` escapes.
    #[default]
    TrueColor,
    /// The 256-color palette, quantizing into its color cube.
    Legacy,
    /// The basic 16 colors. Reserved; rendering with it always fails.
    Basic16,
}

impl FromStr for ColorMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Ok(Self::TrueColor),
            "legacy" | "256" => Ok(Self::Legacy),
            "basic16" | "16" => Ok(Self::Basic16),
            other => Err(Error::invalid(format!("unknown color mode {:?}", other))),
        }
    }
}

impl TryFrom<String> for ColorMode {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}
