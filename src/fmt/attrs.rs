use core::fmt;

use crossterm::{
    style::{Attribute, SetAttribute},
    Command,
};

bitflags::bitflags! {
    /// Text attributes, independent of color. Combine with `|`.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1 << 0;
        const FAINT = 1 << 1;
        const ITALIC = 1 << 2;
        const UNDERLINE = 1 << 3;
        const BLINKING = 1 << 4;
        const REVERSE = 1 << 5;
        const HIDDEN = 1 << 6;
        const STRIKE = 1 << 7;
    }
}

/// Each attribute flag with its crossterm on and off codes.
const CODES: [(Attrs, Attribute, Attribute); 8] = [
    (Attrs::BOLD, Attribute::Bold, Attribute::NormalIntensity),
    (Attrs::FAINT, Attribute::Dim, Attribute::NormalIntensity),
    (Attrs::ITALIC, Attribute::Italic, Attribute::NoItalic),
    (Attrs::UNDERLINE, Attribute::Underlined, Attribute::NoUnderline),
    (Attrs::BLINKING, Attribute::SlowBlink, Attribute::NoBlink),
    (Attrs::REVERSE, Attribute::Reverse, Attribute::NoReverse),
    (Attrs::HIDDEN, Attribute::Hidden, Attribute::NoHidden),
    (Attrs::STRIKE, Attribute::CrossedOut, Attribute::NotCrossedOut),
];

impl Attrs {
    /// Write the escapes turning on every set attribute.
    pub fn write_on(self, out: &mut impl fmt::Write) -> fmt::Result {
        for (flag, on, _) in CODES {
            if self.contains(flag) {
                SetAttribute(on).write_ansi(out)?;
            }
        }
        Ok(())
    }

    /// Write the escapes turning off every set attribute.
    ///
    /// Bold and faint share an off code, so it's only written once.
    pub fn write_off(self, out: &mut impl fmt::Write) -> fmt::Result {
        let mut intensity_done = false;
        for (flag, _, off) in CODES {
            if !self.contains(flag) {
                continue;
            }
            if off == Attribute::NormalIntensity {
                if intensity_done {
                    continue;
                }
                intensity_done = true;
            }
            SetAttribute(off).write_ansi(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn on(a: Attrs) -> String {
        let mut s = String::new();
        a.write_on(&mut s).unwrap();
        s
    }

    fn off(a: Attrs) -> String {
        let mut s = String::new();
        a.write_off(&mut s).unwrap();
        s
    }

    #[test]
    fn bold_pairs_with_normal_intensity() {
        assert_eq!(on(Attrs::BOLD), "\x1b[1m");
        assert_eq!(off(Attrs::BOLD), "\x1b[22m");
    }

    #[test]
    fn union_writes_every_code() {
        let a = Attrs::UNDERLINE | Attrs::REVERSE;
        assert_eq!(on(a), "\x1b[4m\x1b[7m");
        assert_eq!(off(a), "\x1b[24m\x1b[27m");
        assert_eq!(on(Attrs::REVERSE | Attrs::UNDERLINE), on(a));
    }

    #[test]
    fn intensity_off_written_once() {
        assert_eq!(off(Attrs::BOLD | Attrs::FAINT), "\x1b[22m");
    }

    #[test]
    fn empty_writes_nothing() {
        assert_eq!(on(Attrs::empty()), "");
        assert_eq!(off(Attrs::empty()), "");
    }
}
