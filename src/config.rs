//! Construction-time settings for widgets and dialogs.
//!
//! Both config types can be built in code with their setters, or deserialized (e.g. from TOML via
//! [`DialogConfig::from_toml`]). Missing fields take their defaults.

use core::str::FromStr;

use crate::{fmt::ColorMode, fmt::Rgb, util::setters, Error, Key, Point, Result, Size};

/// Width widgets get when no size is configured.
pub const DEFAULT_WIDGET_WIDTH: usize = 60;

/// Settings shared by every kind of widget. Kinds ignore what doesn't apply to them.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Size on screen. Most widgets compute their own height and only respect the width.
    pub size: Option<Size>,
    pub position: Point,
    /// Must be unique within a dialog. Generated from the widget kind if unset.
    pub name: Option<String>,
    /// Horizontal padding for labels.
    pub padding: usize,
    /// Whether labels center their lines.
    pub centered: bool,
    /// Initially selected index in an option list.
    pub default_option: usize,
    /// If set, the only characters a text input accepts.
    pub allowed_characters: Option<String>,
    /// Overrides the dialog's background for this widget.
    pub background_color: Option<Rgb>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            size: None,
            position: Point(0, 0),
            name: None,
            padding: 2,
            centered: true,
            default_option: 0,
            allowed_characters: None,
            background_color: None,
        }
    }
}

impl WidgetConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The configured width, or [`DEFAULT_WIDGET_WIDTH`].
    pub fn width(&self) -> usize {
        self.size.map(|s| s.w()).unwrap_or(DEFAULT_WIDGET_WIDTH)
    }

    setters! {
        size(w: usize, h: usize) => size = Some(Size(w, h)),
        pos(x: usize, y: usize) => position = Point(x, y),
        at(p: Point) => position = p,
        name(n: &str) => name = Some(n.into()),
        padding(p: usize) => padding = p,
        centered(c: bool) => centered = c,
        default_option(i: usize) => default_option = i,
        allowed_characters(chars: &str) => allowed_characters = Some(chars.into()),
        background_color(c: Rgb) => background_color = Some(c),
    }
}

/// Which keys move focus between a dialog's selectable widgets, besides Tab.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum CycleMode {
    /// Up goes back, Down goes forward.
    #[default]
    Vertical,
    /// Up goes forward, Down goes back.
    InvertedVertical,
    /// Left goes back, Right goes forward.
    Horizontal,
    /// Left goes forward, Right goes back.
    InvertedHorizontal,
}

impl CycleMode {
    /// How far `key` moves focus in this mode, if it's a focus key at all.
    pub fn step(self, key: Key) -> Option<isize> {
        let (back, forward) = match self {
            CycleMode::Vertical => (Key::Up, Key::Down),
            CycleMode::InvertedVertical => (Key::Down, Key::Up),
            CycleMode::Horizontal => (Key::Left, Key::Right),
            CycleMode::InvertedHorizontal => (Key::Right, Key::Left),
        };
        match key {
            Key::Tab => Some(1),
            Key::BackTab => Some(-1),
            k if k == forward => Some(1),
            k if k == back => Some(-1),
            _ => None,
        }
    }
}

impl FromStr for CycleMode {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "v" => Ok(Self::Vertical),
            "iv" => Ok(Self::InvertedVertical),
            "h" => Ok(Self::Horizontal),
            "ih" => Ok(Self::InvertedHorizontal),
            other => Err(Error::invalid(format!("unknown cycle mode {:?}", other))),
        }
    }
}

impl TryFrom<String> for CycleMode {
    type Error = Error;
    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Settings for a whole dialog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialogConfig {
    pub width: usize,
    pub color_mode: ColorMode,
    pub background_color: Option<Rgb>,
    pub cycle_mode: CycleMode,
    /// Whether to draw the little activity animation in the top-left corner.
    pub spinner: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDGET_WIDTH,
            color_mode: ColorMode::default(),
            background_color: None,
            cycle_mode: CycleMode::default(),
            spinner: true,
        }
    }
}

impl DialogConfig {
    pub fn new(width: usize) -> Self {
        Self { width, ..Self::default() }
    }

    /// Parse a config from TOML, e.g.
    ///
    /// ```toml
    /// width = 76
    /// color_mode = "legacy"
    /// background_color = [40, 40, 60]
    /// cycle_mode = "iv"
    /// ```
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    setters! {
        width(w: usize) => width = w,
        color_mode(m: ColorMode) => color_mode = m,
        background_color(c: Rgb) => background_color = Some(c),
        cycle_mode(m: CycleMode) => cycle_mode = m,
        spinner(on: bool) => spinner = on,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn widget_defaults() {
        let c = WidgetConfig::new();
        assert_eq!(c.padding, 2);
        assert!(c.centered);
        assert_eq!(c.width(), DEFAULT_WIDGET_WIDTH);
        assert_eq!(c.size(30, 4).pos(1, 2).width(), 30);
    }

    #[test]
    fn cycle_modes_parse() {
        assert_eq!("v".parse::<CycleMode>().unwrap(), CycleMode::Vertical);
        assert_eq!("IH".parse::<CycleMode>().unwrap(), CycleMode::InvertedHorizontal);
        assert!(matches!("diagonal".parse::<CycleMode>(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn inverted_modes_swap_direction() {
        assert_eq!(CycleMode::Vertical.step(Key::Down), Some(1));
        assert_eq!(CycleMode::Vertical.step(Key::Up), Some(-1));
        assert_eq!(CycleMode::InvertedVertical.step(Key::Down), Some(-1));
        assert_eq!(CycleMode::InvertedVertical.step(Key::Up), Some(1));
        assert_eq!(CycleMode::Horizontal.step(Key::Right), Some(1));
        assert_eq!(CycleMode::InvertedHorizontal.step(Key::Right), Some(-1));
        assert_eq!(CycleMode::Horizontal.step(Key::Up), None);
        for mode in [CycleMode::Vertical, CycleMode::InvertedHorizontal] {
            assert_eq!(mode.step(Key::Tab), Some(1));
            assert_eq!(mode.step(Key::BackTab), Some(-1));
            assert_eq!(mode.step(Key::Char('x')), None);
        }
    }

    #[test]
    fn dialog_from_toml() {
        let c = DialogConfig::from_toml(
            r#"
            width = 76
            color_mode = "legacy"
            background_color = [40, 40, 60]
            cycle_mode = "iv"
            "#,
        )
        .unwrap();
        assert_eq!(c.width, 76);
        assert_eq!(c.color_mode, ColorMode::Legacy);
        assert_eq!(c.background_color, Some(Rgb(40, 40, 60)));
        assert_eq!(c.cycle_mode, CycleMode::InvertedVertical);
        assert!(c.spinner);
    }

    #[test]
    fn bad_toml_is_config_error() {
        assert!(matches!(DialogConfig::from_toml("cycle_mode = \"x\""), Err(Error::Config(_))));
        assert!(matches!(DialogConfig::from_toml("colour = 1"), Err(Error::Config(_))));
    }

    #[test]
    fn widget_from_toml() {
        let c: WidgetConfig = toml::from_str("size = [40, 1]\nposition = [2, 3]\nname = \"pw\"").unwrap();
        assert_eq!(c.size, Some(Size(40, 1)));
        assert_eq!(c.position, Point(2, 3));
        assert_eq!(c.name.as_deref(), Some("pw"));
        assert_eq!(c.padding, 2);
    }
}
