use crate::{
    canvas::Canvas,
    config::WidgetConfig,
    fmt::{Rgb, Style, StyledLine, StyledRun},
    Event,
};

use super::{Context, Response, Widget, WidgetBase};

const LABEL_FG: Rgb = Rgb(220, 220, 220);

/// Static, word-wrapped text. Never takes focus.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Label {
    base: WidgetBase,
    lines: Vec<StyledLine>,
    centered: bool,
    padding: usize,
}

impl Label {
    /// A label of plain light-gray text.
    pub fn new(text: &str, config: WidgetConfig) -> Self {
        let run = StyledRun::with_style(text, Style { fg: Some(LABEL_FG), ..Style::NONE });
        Self::styled(run.into(), config)
    }

    /// A label of already-styled text.
    pub fn styled(text: StyledLine, config: WidgetConfig) -> Self {
        let limit = config.width().saturating_sub(config.padding * 2).max(1);
        let lines = wrap(text, limit);
        Self {
            base: WidgetBase::from_config(&config, lines.len(), false),
            lines,
            centered: config.centered,
            padding: config.padding,
        }
    }

    /// The text, as it was wrapped.
    pub fn lines(&self) -> &[StyledLine] {
        &self.lines
    }
}

/// Break `text` into lines of at most `limit` chars, splitting only at spaces (which are dropped).
///
/// Each break goes at the last space that keeps the line within the limit. A word with no such space stays whole.
fn wrap(mut text: StyledLine, limit: usize) -> Vec<StyledLine> {
    let mut lines = vec![];
    while text.len() > limit {
        let chars: Vec<char> = text.plain().chars().collect();
        let at = (0..=limit)
            .rev()
            .find(|&i| chars[i] == ' ')
            .or_else(|| (limit + 1..chars.len()).find(|&i| chars[i] == ' '));
        let at = match at {
            Some(at) => at,
            None => break,
        };
        lines.push(text.slice(0..at));
        text = text.slice(at + 1..chars.len());
    }
    lines.push(text);
    lines
}

impl Widget for Label {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "Label"
    }

    fn update(&mut self, event: Event, _ctx: &Context) -> Response {
        match event {
            Event::Key(key) => Response::Ignored(key),
            Event::Tick => Response::Consumed,
        }
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &Context) {
        for (y, line) in self.lines.iter().enumerate() {
            if self.centered {
                canvas.center_place(line, y as isize);
            } else {
                canvas.place(line, self.padding as isize, y as isize);
            }
        }
    }
}
