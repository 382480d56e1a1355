//! The things a dialog is made of.
//!
//! Every widget owns a [`WidgetBase`] with the state the dialog needs to lay it out and route keys to it, plus
//! whatever its kind needs. The dialog never reaches into a widget otherwise: it sends [`Event`]s through
//! [`Widget::update`] and asks for pixels through [`Widget::render`], handing over a [`Context`] with the bits of
//! dialog state a widget may care about.

use crate::{canvas::Canvas, config::WidgetConfig, fmt::Rgb, Event, Key, Point, Size};

mod label;
mod options;
mod text_input;

pub use label::Label;
pub use options::{Callback, OptionList};
pub use text_input::TextInput;

/// Dialog state handed to a widget whenever it's updated or rendered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Context {
    /// How many animation ticks the dialog has seen.
    pub tick: u64,
    /// The background the widget is being drawn on.
    pub background: Option<Rgb>,
    /// Whether this widget currently has focus.
    pub active: bool,
}

/// What a widget did with an event.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Response {
    /// Handled; the widget may have changed.
    Consumed,
    /// Not handled, so the dialog can try to use the key.
    Ignored(Key),
    /// The widget finished and set its result. The dialog should close.
    Close,
}

/// The state every widget shares.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct WidgetBase {
    pub size: Size,
    pub pos: Point,
    /// Set when the widget is added to a dialog, if it wasn't configured.
    pub name: Option<String>,
    /// Whether focus can land on this widget.
    pub selectable: bool,
    /// Selectable widgets that don't have focus are disabled.
    pub disabled: bool,
    pub result: Option<String>,
    /// Overrides the dialog's background.
    pub background: Option<Rgb>,
}

impl WidgetBase {
    /// The base for a widget built from `config`, `height` rows tall.
    pub fn from_config(config: &WidgetConfig, height: usize, selectable: bool) -> Self {
        Self {
            size: Size(config.width(), height),
            pos: config.position,
            name: config.name.clone(),
            selectable,
            disabled: false,
            result: None,
            background: config.background_color,
        }
    }

    /// The row just below this widget.
    pub fn bottom(&self) -> usize {
        self.pos.y() + self.size.h()
    }
}

/// Something that lives in a dialog.
#[enum_dispatch::enum_dispatch]
pub trait Widget {
    fn base(&self) -> &WidgetBase;
    fn base_mut(&mut self) -> &mut WidgetBase;

    /// The widget's kind, used to generate default names.
    fn kind(&self) -> &'static str;

    /// Handle a keypress or a tick.
    ///
    /// Only the focused widget gets events. Ticks should always be [`Response::Consumed`].
    fn update(&mut self, event: Event, ctx: &Context) -> Response;

    /// Draw the widget into `canvas`, which is exactly the widget's size and already filled with its background.
    fn render(&self, canvas: &mut Canvas, ctx: &Context);
}

/// All the kinds of widget a dialog can hold.
#[enum_dispatch::enum_dispatch(Widget)]
#[derive(Debug)]
pub enum Widgets {
    Label,
    OptionList,
    TextInput,
}
