//! The dialog: a stack of widgets drawn inline in the terminal, below the cursor.
//!
//! A [`Dialog`] owns its widgets, decides which one has focus, and routes keys to it. [`Dialog::show_with`] runs it:
//! it reserves room by printing blank lines, redraws in place on every key and on a 20 Hz animation tick, then
//! wipes itself out when it's closed and returns whatever result the focused widget left behind.

use std::{
    sync::atomic::{AtomicBool, Ordering},
    thread,
};

use crossterm::{cursor::MoveToPreviousLine, Command};
use parking_lot::Mutex;

use crate::{
    canvas::{Canvas, Decoration},
    config::DialogConfig,
    io::{KeySource, Output},
    timing::TickPacer,
    widgets::{Context, Response, Widget, Widgets},
    Error, Event, Result, Size,
};

const SPINNER: &str = "▁▂▃▄▅▆▆▅▄▃▂▁▂ ";
const SPINNER_WIDTH: usize = 3;
/// Moves the cursor up a line, scrolling if it's at the top.
const REVERSE_INDEX: &str = "\x1bM";

/// What the caller of [`Dialog::update`] should do next.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flow {
    /// Something may have changed; draw another frame.
    Redraw,
    /// The dialog is closed. Don't draw it again.
    Close,
}

/// A set of widgets shown together, with one of the selectable ones focused.
#[derive(Debug)]
pub struct Dialog {
    config: DialogConfig,
    height: usize,
    widgets: Vec<Widgets>,
    /// How many of the widgets can take focus.
    selectable: usize,
    /// Which selectable widget has focus, counting only selectable ones.
    active: Option<usize>,
    tick: u64,
    closed: bool,
    result: Option<String>,
}

impl Dialog {
    pub fn new(config: DialogConfig) -> Self {
        Self {
            config,
            height: 1,
            widgets: vec![],
            selectable: 0,
            active: None,
            tick: 0,
            closed: true,
            result: None,
        }
    }

    pub fn config(&self) -> &DialogConfig {
        &self.config
    }

    pub fn width(&self) -> usize {
        self.config.width
    }

    /// One more than the bottom edge of the lowest widget.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size(self.width(), self.height)
    }

    pub fn widgets(&self) -> &[Widgets] {
        &self.widgets
    }

    /// Find a widget by name.
    pub fn widget(&self, name: &str) -> Option<&Widgets> {
        self.widgets.iter().find(|w| w.base().name.as_deref() == Some(name))
    }

    pub fn selectable_count(&self) -> usize {
        self.selectable
    }

    /// Which selectable widget has focus, counting only selectable widgets.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// The focused widget itself.
    pub fn active_widget(&self) -> Option<&Widgets> {
        self.active_index().map(|i| &self.widgets[i])
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Mark the dialog closed. A running [`Self::show_with`] stops after the current event.
    pub fn close(&mut self) {
        if !self.closed {
            tracing::debug!(result = ?self.result, "closing dialog");
        }
        self.closed = true;
    }

    /// Add a widget below (or wherever its position puts it).
    ///
    /// An unnamed widget gets named after its kind, e.g. `TextInput_2` for the second text input. Names must be
    /// unique, so adding a widget with a name that's already taken fails. The first selectable widget added gets
    /// focus.
    pub fn add_widget(&mut self, widget: impl Into<Widgets>) -> Result<()> {
        let mut widget = widget.into();
        let name = match widget.base().name.clone() {
            Some(name) if self.widget(&name).is_some() => {
                return Err(Error::invalid(format!("there's already a widget named {:?}", name)));
            }
            Some(name) => name,
            None => self.generate_name(widget.kind()),
        };
        widget.base_mut().name = Some(name);

        if widget.base().selectable {
            let focus = self.active.is_none();
            widget.base_mut().disabled = !focus;
            if focus {
                self.active = Some(self.selectable);
            }
        }
        self.widgets.push(widget);
        self.height = 1 + self.widgets.iter().map(|w| w.base().bottom()).max().unwrap_or(0);
        self.selectable = self.widgets.iter().filter(|w| w.base().selectable).count();
        Ok(())
    }

    fn generate_name(&self, kind: &str) -> String {
        let same_kind = self.widgets.iter().filter(|w| w.kind() == kind).count();
        (same_kind + 1..)
            .map(|n| format!("{}_{}", kind, n))
            .find(|name| self.widget(name).is_none())
            .unwrap_or_else(|| kind.to_owned())
    }

    /// Where the focused widget is in `self.widgets`.
    fn active_index(&self) -> Option<usize> {
        let n = self.active?;
        self.widgets.iter().enumerate().filter(|(_, w)| w.base().selectable).nth(n).map(|(i, _)| i)
    }

    fn context(&self, index: usize, active: Option<usize>) -> Context {
        Context {
            tick: self.tick,
            background: self.widgets[index].base().background.or(self.config.background_color),
            active: Some(index) == active,
        }
    }

    /// Move focus `by` selectable widgets, wrapping around either end.
    fn move_focus(&mut self, by: isize) {
        let current = match self.active {
            Some(current) if self.selectable > 0 => current,
            _ => return,
        };
        let next = (current as isize + by).rem_euclid(self.selectable as isize) as usize;
        for (nth, w) in self.widgets.iter_mut().filter(|w| w.base().selectable).enumerate() {
            w.base_mut().disabled = nth != next;
        }
        self.active = Some(next);
        tracing::debug!(from = current, to = next, "moved focus");
    }

    /// Handle one key or tick.
    pub fn update(&mut self, event: Event) -> Flow {
        let active = self.active_index();
        let key = match event {
            Event::Tick => {
                if let Some(i) = active {
                    let ctx = self.context(i, active);
                    self.widgets[i].update(Event::Tick, &ctx);
                }
                self.tick += 1;
                return Flow::Redraw;
            }
            Event::Key(key) if key.is_quit() => {
                self.close();
                return Flow::Close;
            }
            Event::Key(key) => key,
        };

        let response = match active {
            Some(i) => {
                let ctx = self.context(i, active);
                let response = self.widgets[i].update(Event::Key(key), &ctx);
                self.result = self.widgets[i].base().result.clone();
                response
            }
            None => Response::Ignored(key),
        };
        match response {
            Response::Close => {
                self.close();
                return Flow::Close;
            }
            Response::Ignored(key) => {
                if let Some(by) = self.config.cycle_mode.step(key) {
                    self.move_focus(by);
                }
            }
            Response::Consumed => (),
        }
        Flow::Redraw
    }

    /// The current spinner animation frame.
    fn spinner_frame(&self) -> String {
        let frames = SPINNER.chars().count() - SPINNER_WIDTH;
        let start = (self.tick % frames as u64) as usize;
        SPINNER.chars().skip(start).take(SPINNER_WIDTH).collect()
    }

    /// Draw every widget, bordering the focused one.
    pub fn render(&self) -> Canvas {
        let mut canvas = Canvas::new(self.size(), self.config.background_color);
        let active = self.active_index();
        for (i, widget) in self.widgets.iter().enumerate() {
            let ctx = self.context(i, active);
            let base = widget.base();
            let mut sub = Canvas::new(base.size, ctx.background);
            widget.render(&mut sub, &ctx);
            let deco = if ctx.active { Decoration::BORDER } else { Decoration::NONE };
            canvas.place_canvas(&sub, base.pos.x() as isize, base.pos.y() as isize, deco);
        }
        if self.config.spinner {
            canvas.place_str(&self.spinner_frame(), 1, 0, None);
        }
        canvas
    }

    /// [`Self::render`], serialized.
    fn frame(&self) -> Result<String> {
        self.render().serialize(self.config.color_mode)
    }

    /// Show the dialog on the terminal, returning its result once it's closed.
    ///
    /// Fails immediately if there's no terminal backend compiled in.
    pub fn show(&mut self) -> Result<Option<String>> {
        let (keys, output) = crate::io::load()?;
        self.show_with(keys, output)
    }

    /// Show the dialog, reading keys from `keys` and drawing to `output`, until it's closed.
    ///
    /// Keys are read on this thread; ticks run on another, for as long as this call does. Either can draw, but never
    /// at once: a tick that would have to wait for a key's frame to finish just skips its own.
    pub fn show_with<K: KeySource, O: Output>(&mut self, mut keys: K, mut output: O) -> Result<Option<String>> {
        let (width, height) = (self.width(), self.height);
        self.closed = false;
        tracing::debug!(width, height, widgets = self.widgets.len(), "showing dialog");

        output.enable_ansi()?;
        output.write(&"\n".repeat(height))?;
        if let Err(e) = self.frame().and_then(|frame| write_frame(&mut output, height, &frame)) {
            self.close();
            erase(&mut output, width, height)?;
            return Err(e);
        }

        let state = Mutex::new(&mut *self);
        let output = Mutex::new(output);
        let closed = AtomicBool::new(false);
        let outcome = thread::scope(|s| {
            let ticker = s.spawn(|| tick_loop(&state, &output, &closed, height));
            let keyed = key_loop(&mut keys, &state, &output, &closed, height);
            closed.store(true, Ordering::Release);
            let ticked = match ticker.join() {
                Ok(res) => res,
                Err(panic) => std::panic::resume_unwind(panic),
            };
            keyed.and(ticked)
        });

        drop(state);
        self.close();
        let mut output = output.into_inner();
        erase(&mut output, width, height)?;
        outcome?;
        Ok(self.result.clone())
    }
}

fn key_loop<K: KeySource, O: Output>(
    keys: &mut K,
    state: &Mutex<&mut Dialog>,
    output: &Mutex<O>,
    closed: &AtomicBool,
    height: usize,
) -> Result<()> {
    while !closed.load(Ordering::Acquire) {
        let key = keys.read_key()?;
        let frame = {
            let mut dialog = state.lock();
            match dialog.update(Event::Key(key)) {
                Flow::Close => return Ok(()),
                Flow::Redraw => dialog.frame()?,
            }
        };
        write_frame(&mut *output.lock(), height, &frame)?;
    }
    Ok(())
}

fn tick_loop<O: Output>(state: &Mutex<&mut Dialog>, output: &Mutex<O>, closed: &AtomicBool, height: usize) -> Result<()> {
    let mut pacer = TickPacer::default();
    loop {
        thread::sleep(pacer.sleep_time());
        if closed.load(Ordering::Acquire) {
            return Ok(());
        }
        pacer.start();
        let frame = {
            let mut dialog = state.lock();
            if dialog.is_closed() {
                return Ok(());
            }
            dialog.update(Event::Tick);
            dialog.frame()?
        };
        match output.try_lock() {
            Some(mut out) => write_frame(&mut *out, height, &frame)?,
            None => tracing::trace!("draw in progress, skipping tick frame"),
        }
        let cost = pacer.finish();
        if cost > pacer.period() {
            tracing::warn!(?cost, period = ?pacer.period(), "tick took longer than its period");
        }
    }
}

/// Escape moving the cursor to the start of the line `n` lines up.
fn up_lines(n: usize) -> Result<String> {
    let mut s = String::new();
    MoveToPreviousLine(n.min(u16::MAX as usize) as u16).write_ansi(&mut s)?;
    Ok(s)
}

/// Jump back to the top of the dialog's space and draw over it.
fn write_frame<O: Output + ?Sized>(output: &mut O, height: usize, frame: &str) -> Result<()> {
    output.write(&up_lines(height)?)?;
    output.write(frame)?;
    output.write("\n")?;
    output.flush()?;
    tracing::trace!(bytes = frame.len(), "wrote frame");
    Ok(())
}

/// Blank out the dialog's space and put the cursor back where it was before the dialog was shown.
fn erase<O: Output + ?Sized>(output: &mut O, width: usize, height: usize) -> Result<()> {
    let blank = " ".repeat(width);
    let mut s = up_lines(height)?;
    for _ in 0..height {
        s.push('\n');
        s.push_str(&blank);
    }
    s.push_str(&REVERSE_INDEX.repeat(height));
    s.push('\r');
    s.push_str(&blank);
    s.push_str(REVERSE_INDEX);
    s.push('\n');
    output.write(&s)?;
    output.flush()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        config::{CycleMode, WidgetConfig},
        fmt::{ColorMode, Rgb, Styled},
        io::{CaptureOutput, ScriptedKeys},
        widgets::{Label, OptionList, TextInput},
        Key,
    };

    fn quiet(width: usize) -> DialogConfig {
        DialogConfig::new(width).spinner(false)
    }

    fn inputs(n: usize, mode: CycleMode) -> Dialog {
        let mut d = Dialog::new(quiet(30).cycle_mode(mode));
        for i in 0..n {
            d.add_widget(TextInput::new("> ", WidgetConfig::new().size(20, 1).pos(2, 1 + 3 * i))).unwrap();
        }
        d
    }

    fn abc() -> OptionList {
        OptionList::new(
            vec![
                OptionList::choice("A", |_| "A".into()),
                OptionList::choice("B", |_| "B".into()),
                OptionList::choice("C", |_| "C".into()),
            ],
            WidgetConfig::new().size(10, 0).pos(2, 1),
        )
        .unwrap()
    }

    fn enabled(d: &Dialog) -> Vec<bool> {
        d.widgets().iter().filter(|w| w.base().selectable).map(|w| !w.base().disabled).collect()
    }

    #[test]
    fn names_generated_per_kind() {
        let mut d = Dialog::new(quiet(20));
        d.add_widget(Label::new("a", WidgetConfig::new())).unwrap();
        d.add_widget(TextInput::new("", WidgetConfig::new())).unwrap();
        d.add_widget(Label::new("b", WidgetConfig::new())).unwrap();
        let names: Vec<_> = d.widgets().iter().map(|w| w.base().name.clone().unwrap()).collect();
        assert_eq!(names, vec!["Label_1", "TextInput_1", "Label_2"]);
    }

    #[test]
    fn duplicate_names_rejected() {
        let mut d = Dialog::new(quiet(20));
        d.add_widget(TextInput::new("", WidgetConfig::new().name("pw"))).unwrap();
        let again = d.add_widget(TextInput::new("", WidgetConfig::new().name("pw")));
        assert!(matches!(again, Err(Error::InvalidArgument(_))));
        assert_eq!(d.widgets().len(), 1);
        assert!(d.widget("pw").is_some());
    }

    #[test]
    fn generated_names_skip_taken_ones() {
        let mut d = Dialog::new(quiet(20));
        d.add_widget(Label::new("a", WidgetConfig::new().name("Label_1"))).unwrap();
        d.add_widget(Label::new("b", WidgetConfig::new())).unwrap();
        assert!(d.widget("Label_2").is_some());
    }

    #[test]
    fn height_tracks_lowest_widget() {
        let mut d = Dialog::new(quiet(20));
        assert_eq!(d.height(), 1);
        d.add_widget(TextInput::new("", WidgetConfig::new().pos(0, 4))).unwrap();
        assert_eq!(d.height(), 6);
        d.add_widget(Label::new("x", WidgetConfig::new().pos(0, 1))).unwrap();
        assert_eq!(d.height(), 6);
    }

    #[test]
    fn first_selectable_gets_focus() {
        let mut d = Dialog::new(quiet(20));
        d.add_widget(Label::new("title", WidgetConfig::new())).unwrap();
        assert_eq!(d.active(), None);
        assert_eq!(d.selectable_count(), 0);
        d.add_widget(TextInput::new("", WidgetConfig::new())).unwrap();
        d.add_widget(TextInput::new("", WidgetConfig::new())).unwrap();
        assert_eq!(d.active(), Some(0));
        assert_eq!(d.selectable_count(), 2);
        assert_eq!(enabled(&d), vec![true, false]);
        assert_eq!(d.active_widget().unwrap().base().name.as_deref(), Some("TextInput_1"));
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut d = inputs(3, CycleMode::Vertical);
        assert_eq!(d.update(Key::Up.into()), Flow::Redraw);
        assert_eq!(d.active(), Some(2));
        assert_eq!(enabled(&d), vec![false, false, true]);
        d.update(Key::Down.into());
        assert_eq!(d.active(), Some(0));
        d.update(Key::Tab.into());
        d.update(Key::Tab.into());
        assert_eq!(d.active(), Some(2));
        d.update(Key::BackTab.into());
        assert_eq!(d.active(), Some(1));
        assert_eq!(enabled(&d), vec![false, true, false]);
    }

    #[test]
    fn inverted_and_horizontal_modes() {
        let mut d = inputs(3, CycleMode::InvertedVertical);
        d.update(Key::Up.into());
        assert_eq!(d.active(), Some(1));
        d.update(Key::Down.into());
        d.update(Key::Down.into());
        assert_eq!(d.active(), Some(2));

        let mut d = inputs(3, CycleMode::Horizontal);
        d.update(Key::Down.into());
        assert_eq!(d.active(), Some(0));
        d.update(Key::Left.into());
        assert_eq!(d.active(), Some(2));

        let mut d = inputs(3, CycleMode::InvertedHorizontal);
        d.update(Key::Left.into());
        assert_eq!(d.active(), Some(1));
    }

    #[test]
    fn keys_go_to_focused_widget_only() {
        let mut d = inputs(2, CycleMode::Vertical);
        d.update(Key::Char('a').into());
        d.update(Key::Tab.into());
        d.update(Key::Char('b').into());
        let typed: Vec<_> = d
            .widgets()
            .iter()
            .map(|w| match w {
                Widgets::TextInput(ti) => ti.input(),
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(typed, vec!["a", "b"]);
    }

    #[test]
    fn quit_keys_close_without_result() {
        for key in [Key::Ctrl('c'), Key::Escape] {
            let mut d = inputs(1, CycleMode::Vertical);
            d.closed = false;
            d.update(Key::Char('x').into());
            assert_eq!(d.update(key.into()), Flow::Close);
            assert!(d.is_closed());
            assert_eq!(d.result(), None);
        }
    }

    #[test]
    fn ticks_count_up_and_reach_widget() {
        let mut d = inputs(1, CycleMode::Vertical);
        for _ in 0..13 {
            assert_eq!(d.update(Event::Tick), Flow::Redraw);
        }
        assert_eq!(d.tick(), 13);
        let caret_on = match d.active_widget() {
            Some(Widgets::TextInput(ti)) => {
                let mut c = Canvas::new(ti.base().size, None);
                ti.render(&mut c, &Context { active: true, ..Context::default() });
                c.line(0).unwrap().runs().iter().any(|r| r.text() == " " && !r.get_style().attrs.is_empty())
            }
            _ => unreachable!(),
        };
        assert!(caret_on);
    }

    #[test]
    fn spinner_cycles() {
        let mut d = Dialog::new(DialogConfig::new(10));
        assert_eq!(d.spinner_frame(), "▁▂▃");
        d.tick = 10;
        assert_eq!(d.spinner_frame(), "▂▁▂");
        d.tick = 11;
        assert_eq!(d.spinner_frame(), "▁▂▃");
        assert_eq!(d.render().plain_rows(), vec![" ▁▂▃      "]);
    }

    #[test]
    fn render_borders_focused_widget() {
        let mut d = Dialog::new(quiet(20));
        d.add_widget(abc()).unwrap();
        assert_eq!(d.height(), 6);
        assert_eq!(
            d.render().plain_rows(),
            vec![
                " ┌──────────┐       ",
                " │  Options:│       ",
                " │  > A     │       ",
                " │    B     │       ",
                " │    C     │       ",
                " └──────────┘       ",
            ]
        );
    }

    #[test]
    fn unfocused_widgets_have_no_border() {
        let mut d = Dialog::new(quiet(12));
        d.add_widget(Label::new("hi", WidgetConfig::new().size(12, 0).pos(0, 1))).unwrap();
        assert_eq!(d.render().plain_rows(), vec!["            ", "     hi     ", "            "]);
    }

    #[test]
    fn pick_an_option() {
        let mut d = Dialog::new(quiet(30));
        d.add_widget(Label::new("Choose wisely", WidgetConfig::new().size(30, 0))).unwrap();
        d.add_widget(OptionList::new(
            vec![
                OptionList::choice("A", |_| "A".into()),
                OptionList::choice("B", |_| "B".into()),
                OptionList::choice("C", |_| "C".into()),
            ],
            WidgetConfig::new().size(20, 0).pos(2, 2),
        )
        .unwrap())
        .unwrap();
        let keys = ScriptedKeys::new([Key::Down, Key::Enter, Key::Down]);
        let result = d.show_with(keys, CaptureOutput::default()).unwrap();
        assert_eq!(result.as_deref(), Some("B"));
        assert!(d.is_closed());
    }

    #[test]
    fn submit_text() {
        let mut d = inputs(2, CycleMode::Vertical);
        let keys = ScriptedKeys::new([Key::Tab, Key::Char('h'), Key::Char('i'), Key::Enter]);
        assert_eq!(d.show_with(keys, CaptureOutput::default()).unwrap().as_deref(), Some("hi"));
    }

    #[test]
    fn running_out_of_keys_cancels() {
        let mut d = inputs(1, CycleMode::Vertical);
        let keys = ScriptedKeys::new([Key::Char('h')]);
        assert_eq!(d.show_with(keys, CaptureOutput::default()).unwrap(), None);
    }

    #[test]
    fn output_protocol() {
        let mut d = Dialog::new(quiet(6));
        d.add_widget(Label::new("ok", WidgetConfig::new().size(6, 0))).unwrap();
        assert_eq!(d.height(), 2);
        let frame = d.render().serialize(d.config().color_mode).unwrap();

        let seen = CaptureOutput::default();
        d.show_with(ScriptedKeys::default(), seen.clone()).unwrap();
        let out = seen.contents();
        let start = format!("\n\n\x1b[2F{}\n", frame);
        let end = "\x1b[2F\n      \n      \x1bM\x1bM\r      \x1bM\n";
        assert!(out.starts_with(&start), "{:?}", out);
        assert!(out.ends_with(end), "{:?}", out);
    }

    #[test]
    fn keys_redraw_once_each() {
        let mut d = inputs(1, CycleMode::Vertical);
        let frame_start = "\x1b[3F";
        let seen = CaptureOutput::default();
        let keys = ScriptedKeys::new([Key::Char('a'), Key::Char('b'), Key::Enter]);
        d.show_with(keys, seen.clone()).unwrap();
        let out = seen.contents();
        // the first frame, one per non-closing key, the erase, and maybe some ticks
        let frames = out.matches(frame_start).count();
        assert!(frames >= 4, "{:?}", out);
        assert!(out.contains("ab"));
    }

    struct UnpluggedKeys;

    impl KeySource for UnpluggedKeys {
        fn read_key(&mut self) -> Result<Key> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "keyboard went away").into())
        }
    }

    #[test]
    fn failed_key_read_still_closes() {
        let mut d = Dialog::new(quiet(6));
        d.add_widget(Label::new("ok", WidgetConfig::new().size(6, 0))).unwrap();
        let seen = CaptureOutput::default();
        assert!(matches!(d.show_with(UnpluggedKeys, seen.clone()), Err(Error::Io(_))));
        assert!(d.is_closed());
        assert!(seen.contents().ends_with("\x1b[2F\n      \n      \x1bM\x1bM\r      \x1bM\n"));
    }

    #[test]
    fn unrenderable_first_frame_gives_back_its_space() {
        let mut d = Dialog::new(quiet(6).color_mode(ColorMode::Basic16).background_color(Rgb(1, 2, 3)));
        d.add_widget(Label::new("ok", WidgetConfig::new().size(6, 0))).unwrap();
        let seen = CaptureOutput::default();
        assert!(matches!(
            d.show_with(ScriptedKeys::new([Key::Enter]), seen.clone()),
            Err(Error::NotSupported(_))
        ));
        assert!(d.is_closed());
        assert_eq!(seen.contents(), "\n\n\x1b[2F\n      \n      \x1bM\x1bM\r      \x1bM\n");
    }

    #[test]
    fn ticks_skip_frames_while_a_draw_is_in_flight() {
        let mut d = Dialog::new(DialogConfig::new(10));
        let seen = CaptureOutput::default();
        {
            let state = Mutex::new(&mut d);
            let output = Mutex::new(seen.clone());
            let closed = AtomicBool::new(false);
            thread::scope(|s| {
                let drawing = output.lock();
                let ticker = s.spawn(|| tick_loop(&state, &output, &closed, 1));
                thread::sleep(std::time::Duration::from_millis(300));
                closed.store(true, Ordering::Release);
                ticker.join().unwrap().unwrap();
                drop(drawing);
            });
        }
        assert!(d.tick() >= 2, "only {} ticks", d.tick());
        assert_eq!(seen.contents(), "");
    }
}
