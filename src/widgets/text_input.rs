use std::collections::HashSet;

use crate::{
    canvas::Canvas,
    config::WidgetConfig,
    fmt::{Attrs, Rgb, Style, StyledLine, StyledRun},
    Event, Key,
};

use super::{Context, Response, Widget, WidgetBase};

const LABEL_FG: Rgb = Rgb(50, 200, 50);
/// The caret is visible for this many of every [`BLINK_PERIOD`] ticks.
const BLINK_PERIOD: u64 = 20;
const BLINK_OFF: u64 = 12;

/// A single-line text field, scrolling horizontally when the text outgrows it.
///
/// Only a window of the input is shown at a time. The caret always stays inside that window, which scrolls as
/// needed to follow it. `<` and `>` at the edges show when there's more text hidden on that side.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TextInput {
    base: WidgetBase,
    label: String,
    input: Vec<char>,
    cursor: usize,
    view: usize,
    show_pointer: bool,
    allowed: Option<HashSet<char>>,
}

impl TextInput {
    pub fn new(label: &str, config: WidgetConfig) -> Self {
        Self {
            base: WidgetBase::from_config(&config, 1, true),
            label: label.into(),
            input: vec![],
            cursor: 0,
            view: 0,
            show_pointer: false,
            allowed: config.allowed_characters.map(|chars| chars.chars().collect()),
        }
    }

    /// What's been typed so far.
    pub fn input(&self) -> String {
        self.input.iter().collect()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible character.
    pub fn view(&self) -> usize {
        self.view
    }

    /// Clear out the text and scroll back to the start.
    pub fn reset(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.view = 0;
    }

    /// How many characters the window shows.
    pub fn max_input_len(&self) -> usize {
        self.base.size.w().saturating_sub(4 + self.label.chars().count()).max(1)
    }

    fn accepts(&self, ch: char) -> bool {
        self.allowed.as_ref().map_or(true, |set| set.contains(&ch))
    }

    /// Scroll so the caret is back inside the window.
    fn follow_cursor(&mut self) {
        let last = self.max_input_len() - 1;
        if self.cursor < self.view {
            self.view = self.cursor;
        } else if self.cursor > self.view + last {
            self.view = self.cursor - last;
        }
    }

    fn keypress(&mut self, key: Key) -> Response {
        match key {
            Key::Char(ch) if key.printable().is_some() && self.accepts(ch) => {
                self.input.insert(self.cursor, ch);
                self.cursor += 1;
                self.follow_cursor();
            }
            Key::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.input.remove(self.cursor);
                }
                if self.cursor < self.view {
                    // jump a whole window back, so there's some context to the left of the caret
                    self.view = self.view.saturating_sub(self.max_input_len());
                }
            }
            Key::Delete => {
                if self.cursor < self.input.len() {
                    self.input.remove(self.cursor);
                }
            }
            Key::Left if self.cursor > 0 => {
                self.cursor -= 1;
                self.follow_cursor();
            }
            Key::Right if self.cursor < self.input.len() => {
                self.cursor += 1;
                self.follow_cursor();
            }
            Key::Home => {
                self.cursor = 0;
                self.follow_cursor();
            }
            Key::End => {
                self.cursor = self.input.len();
                self.follow_cursor();
            }
            Key::Enter => {
                self.base.result = Some(self.input());
                return Response::Close;
            }
            other => return Response::Ignored(other),
        }
        Response::Consumed
    }

    /// The label, scroll markers, and visible window, caret included.
    fn textbox(&self, active: bool) -> StyledLine {
        let max = self.max_input_len();
        let len = self.input.len();
        let more_after = self.view + max - 1 < len;
        let mut window: Vec<char> = if more_after {
            self.input[self.view..self.view + max].to_vec()
        } else {
            self.input[self.view.min(len)..].to_vec()
        };
        if !more_after {
            window.push(' ');
        }

        let label_style = Style { fg: Some(LABEL_FG), ..Style::NONE };
        let caret_at = self.cursor - self.view;
        let caret = window.get(caret_at).copied().unwrap_or(' ');
        let caret_style = if (active && self.show_pointer) || caret != ' ' {
            Style { attrs: Attrs::REVERSE, ..Style::NONE }
        } else {
            Style::NONE
        };

        let mut line = StyledLine::from(StyledRun::with_style(self.label.as_str(), label_style));
        line += StyledRun::with_style(if self.view > 0 { "<" } else { " " }, label_style);
        line += StyledRun::new(window[..caret_at].iter().collect::<String>());
        line += StyledRun::with_style(caret.to_string(), caret_style);
        let after: String = window[caret_at + 1..].iter().collect();
        line += StyledRun::new(format!("{:<1$}", after, max.saturating_sub(caret_at + 1)));
        line += StyledRun::with_style(if more_after { ">" } else { " " }, label_style);
        line
    }
}

impl Widget for TextInput {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "TextInput"
    }

    fn update(&mut self, event: Event, ctx: &Context) -> Response {
        match event {
            Event::Key(key) => self.keypress(key),
            Event::Tick => {
                self.show_pointer = ctx.tick % BLINK_PERIOD >= BLINK_OFF;
                Response::Consumed
            }
        }
    }

    fn render(&self, canvas: &mut Canvas, ctx: &Context) {
        let label_len = self.label.chars().count();
        if let Some(bg) = ctx.background {
            let width = self.base.size.w().saturating_sub(2 + label_len);
            let shadow = StyledRun::fill(' ', width, Style { bg: Some(bg.scale(0.8)), ..Style::NONE });
            canvas.place(&StyledLine::from(shadow), 1 + label_len as isize, 0);
        }
        canvas.place(&self.textbox(ctx.active), 1, 0);
    }
}
