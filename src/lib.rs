//! Small, declarative dialogs for the terminal, drawn inline below the cursor instead of taking over the screen.
//!
//! There are three layers, each usable on its own:
//!
//! - [`fmt`] is styled text: colors, attributes, and lines of differently-styled runs, plus turning them into ANSI
//!   escapes.
//! - [`Canvas`] is a fixed-size grid of styled text you can paint lines and other canvases into, clipped to the
//!   edges.
//! - [`Dialog`] holds [`widgets`], routes keys to whichever has focus, and redraws on every key and on a 20 Hz
//!   animation tick.
//!
//! ```no_run
//! use termbud::{config::{DialogConfig, WidgetConfig}, widgets::{Label, OptionList}, Dialog};
//!
//! let mut dialog = Dialog::new(DialogConfig::new(40));
//! dialog.add_widget(Label::new("Pick a color", WidgetConfig::new().size(40, 0)))?;
//! dialog.add_widget(OptionList::new(
//!     vec![
//!         OptionList::choice("Red", |_| "red".into()),
//!         OptionList::choice("Blue", |_| "blue".into()),
//!     ],
//!     WidgetConfig::new().size(30, 0).pos(4, 2),
//! )?)?;
//! println!("picked {:?}", dialog.show()?);
//! # Ok::<(), termbud::Error>(())
//! ```
//!
//! # Features
//!
//! `cli_crossterm`, on by default, enables the interactive terminal backend. Without it, you can still render and
//! drive dialogs through the headless backends in [`io`], but [`Dialog::show`] fails with [`Error::NoBackend`].

mod action;
mod canvas;
pub mod config;
mod dialog;
mod error;
pub mod fmt;
pub mod io;
pub mod timing;
mod util;
pub mod widgets;
mod xy;

pub use crate::{
    action::{Event, Key},
    canvas::{Canvas, Decoration},
    dialog::{Dialog, Flow},
    error::{Error, Result},
    xy::{Point, Size},
};
