use crate::{
    canvas::Canvas,
    config::WidgetConfig,
    fmt::{Rgb, Style, StyledRun},
    util::abbrev_debug,
    Error, Event, Key, Result,
};

use super::{Context, Response, Widget, WidgetBase};

const TEXT_FG: Rgb = Rgb(220, 220, 220);
const SELECTED_FG: Rgb = Rgb(50, 220, 80);
const INDENT: usize = 2;

/// Run when an option is picked. Whatever it returns becomes the dialog's result.
pub type Callback = Box<dyn Fn(&Context) -> String + Send>;

/// A captioned list of choices, navigated with the arrow keys and picked with Enter.
pub struct OptionList {
    base: WidgetBase,
    caption: String,
    options: Vec<(String, Callback)>,
    selected: usize,
}

abbrev_debug! {
    OptionList;
    write base,
    write caption,
    write selected,
    ignore options,
}

impl OptionList {
    /// Fails if there are no options, or if the configured default isn't one of them.
    pub fn new(options: Vec<(String, Callback)>, config: WidgetConfig) -> Result<Self> {
        if options.is_empty() {
            return Err(Error::invalid("an option list needs at least one option"));
        }
        if config.default_option >= options.len() {
            return Err(Error::invalid(format!(
                "default option {} out of range for {} options",
                config.default_option,
                options.len()
            )));
        }
        Ok(Self {
            base: WidgetBase::from_config(&config, 1 + options.len(), true),
            caption: "Options:".into(),
            selected: config.default_option,
            options,
        })
    }

    /// Shorthand for building one entry of the list.
    pub fn choice(label: impl Into<String>, callback: impl Fn(&Context) -> String + Send + 'static) -> (String, Callback) {
        (label.into(), Box::new(callback))
    }

    /// Replace the default `Options:` caption.
    #[must_use]
    pub fn caption(mut self, caption: &str) -> Self {
        self.caption = caption.into();
        self
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    fn step(&mut self, by: isize) {
        let n = self.options.len() as isize;
        self.selected = (self.selected as isize + by).rem_euclid(n) as usize;
    }
}

impl Widget for OptionList {
    fn base(&self) -> &WidgetBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WidgetBase {
        &mut self.base
    }

    fn kind(&self) -> &'static str {
        "OptionList"
    }

    fn update(&mut self, event: Event, ctx: &Context) -> Response {
        let key = match event {
            Event::Key(key) => key,
            Event::Tick => return Response::Consumed,
        };
        match key {
            Key::Up => self.step(-1),
            Key::Down => self.step(1),
            Key::Enter => {
                let (_, callback) = &self.options[self.selected];
                self.base.result = Some(callback(ctx));
                return Response::Close;
            }
            other => return Response::Ignored(other),
        }
        Response::Consumed
    }

    fn render(&self, canvas: &mut Canvas, _ctx: &Context) {
        let caption = format!("{:<1$}", self.caption, self.base.size.w().saturating_sub(INDENT));
        canvas.place_str(&caption, INDENT as isize, 0, Some(TEXT_FG));
        for (i, (label, _)) in self.options.iter().enumerate() {
            let (marker, fg) = if i == self.selected { ("> ", SELECTED_FG) } else { ("  ", TEXT_FG) };
            let row = StyledRun::with_style(marker, Style { fg: Some(TEXT_FG), ..Style::NONE })
                + StyledRun::with_style(label.as_str(), Style { fg: Some(fg), ..Style::NONE });
            canvas.place(&row, INDENT as isize, i as isize + 1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{fmt::Styled, Size};

    fn abc(config: WidgetConfig) -> Result<OptionList> {
        OptionList::new(
            vec![
                OptionList::choice("A", |_| "A".into()),
                OptionList::choice("B", |_| "B".into()),
                OptionList::choice("C", |ctx| format!("C at {}", ctx.tick)),
            ],
            config,
        )
    }

    macro_rules! feed {
        ( $ol:ident: $( $key:ident ),* $(,)? ) => {
            $(
                assert_eq!($ol.update(Event::Key(Key::$key), &Context::default()), Response::Consumed);
            )*
        };
    }

    #[test]
    fn rejects_bad_construction() {
        assert!(matches!(OptionList::new(vec![], WidgetConfig::new()), Err(Error::InvalidArgument(_))));
        assert!(matches!(abc(WidgetConfig::new().default_option(3)), Err(Error::InvalidArgument(_))));
        assert_eq!(abc(WidgetConfig::new().default_option(2)).unwrap().selected(), 2);
    }

    #[test]
    fn height_fits_options() {
        let ol = abc(WidgetConfig::new().size(20, 0)).unwrap();
        assert_eq!(ol.base().size, Size(20, 4));
        assert!(ol.base().selectable);
    }

    #[test]
    fn selection_wraps() {
        let mut ol = abc(WidgetConfig::new()).unwrap();
        feed!(ol: Up);
        assert_eq!(ol.selected(), 2);
        feed!(ol: Down);
        assert_eq!(ol.selected(), 0);
        feed!(ol: Down, Down, Down, Down);
        assert_eq!(ol.selected(), 1);
    }

    #[test]
    fn enter_runs_callback() {
        let mut ol = abc(WidgetConfig::new()).unwrap();
        feed!(ol: Down, Down);
        let ctx = Context { tick: 7, ..Context::default() };
        assert_eq!(ol.update(Event::Key(Key::Enter), &ctx), Response::Close);
        assert_eq!(ol.base().result.as_deref(), Some("C at 7"));
    }

    #[test]
    fn other_keys_ignored() {
        let mut ol = abc(WidgetConfig::new()).unwrap();
        let ctx = Context::default();
        assert_eq!(ol.update(Event::Key(Key::Tab), &ctx), Response::Ignored(Key::Tab));
        assert_eq!(ol.update(Event::Key(Key::Left), &ctx), Response::Ignored(Key::Left));
        assert_eq!(ol.update(Event::Tick, &ctx), Response::Consumed);
        assert_eq!(ol.selected(), 0);
    }

    #[test]
    fn renders_marker_on_selection() {
        let mut ol = abc(WidgetConfig::new().size(12, 0)).unwrap().caption("Pick:");
        feed!(ol: Down);
        let mut c = Canvas::new(ol.base().size, None);
        ol.render(&mut c, &Context::default());
        assert_eq!(c.plain_rows(), vec!["  Pick:     ", "    A       ", "  > B       ", "    C       "]);
        let picked = c.line(2).unwrap();
        assert_eq!(picked.runs()[1].get_style().fg, Some(TEXT_FG));
        assert_eq!(picked.runs()[2].text(), "B");
        assert_eq!(picked.runs()[2].get_style().fg, Some(SELECTED_FG));
    }

    #[test]
    fn debug_skips_callbacks() {
        let ol = abc(WidgetConfig::new()).unwrap();
        let dbg = format!("{:?}", ol);
        assert!(dbg.starts_with("OptionList { base: "));
        assert!(dbg.contains("options: .., "));
    }
}
