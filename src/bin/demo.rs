//! Shows off a couple of dialogs, one after the other.
//!
//! Pass a TOML file to configure the dialogs (see `DialogConfig::from_toml`). Set `TERMBUD_LOG` to a filter, e.g.
//! `TERMBUD_LOG=debug`, to get logs on stderr; redirect it somewhere, or they'll scribble over the dialog.

use termbud::{
    config::{DialogConfig, WidgetConfig},
    fmt::Rgb,
    styled,
    widgets::{Label, OptionList, TextInput},
    Dialog, Result,
};

fn init_logging() {
    if let Ok(filter) = std::env::var("TERMBUD_LOG") {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::new(filter))
            .with_writer(std::io::stderr)
            .init();
    }
}

fn load_config() -> Result<DialogConfig> {
    match std::env::args().nth(1) {
        Some(path) => DialogConfig::from_toml(&std::fs::read_to_string(path)?),
        None => Ok(DialogConfig::new(60).background_color(Rgb(40, 40, 60))),
    }
}

fn main() -> Result<()> {
    init_logging();
    let config = load_config()?;
    let width = config.width;

    let mut ask = Dialog::new(config.clone());
    ask.add_widget(Label::styled(
        styled![rgb(220, 220, 220) "Welcome to ", rgb(50, 220, 80) bold "termbud", rgb(220, 220, 220) "! What should we call you?"],
        WidgetConfig::new().size(width, 0).pos(0, 1),
    ))?;
    let field = WidgetConfig::new().size(width.saturating_sub(8), 1).pos(4, 4).name("name");
    ask.add_widget(TextInput::new("Name: ", field))?;
    let name = match ask.show()? {
        Some(name) if !name.is_empty() => name,
        _ => return Ok(()),
    };

    let mut pick = Dialog::new(config);
    pick.add_widget(Label::new(
        &format!("Nice to meet you, {}. Which do you want to try next?", name),
        WidgetConfig::new().size(width, 0).pos(0, 1),
    ))?;
    pick.add_widget(
        OptionList::new(
            vec![
                OptionList::choice("Another dialog", |_| "another dialog".into()),
                OptionList::choice("Nothing, thanks", |_| "nothing".into()),
                OptionList::choice("Count the ticks", |ctx| format!("{} ticks", ctx.tick)),
            ],
            WidgetConfig::new().size(width.saturating_sub(8), 0).pos(4, 4),
        )?
        .caption("Pick one:"),
    )?;
    if let Some(picked) = pick.show()? {
        println!("{} picked: {}", name, picked);
    }
    Ok(())
}
