use clap::Parser;
use conmenu_core::constants::{
    DEFAULT_DOWN_KEY, DEFAULT_HEAD_CODE, DEFAULT_HEADING, DEFAULT_MAX_FIELD_WIDTH,
    DEFAULT_SELECT_KEY, DEFAULT_UP_KEY,
};
use conmenu_core::{Keybinds, MenuConfig};

#[derive(Parser, Debug)]
#[command(
    name = "conmenu",
    version,
    about = "Keyboard-driven console menu demo"
)]
pub struct Cli {
    /// Width each field is centred into
    #[arg(long, default_value_t = DEFAULT_MAX_FIELD_WIDTH as i64, allow_negative_numbers = true)]
    pub width: i64,
    #[arg(long, default_value = DEFAULT_HEADING)]
    pub heading: String,
    /// Two-character ANSI code for the heading and selected entry
    #[arg(long, default_value = DEFAULT_HEAD_CODE)]
    pub head_color: String,
    /// Two-character ANSI code for the other entries
    #[arg(long)]
    pub body_color: Option<String>,
    #[arg(long, default_value_t = DEFAULT_UP_KEY)]
    pub up: char,
    #[arg(long, default_value_t = DEFAULT_DOWN_KEY)]
    pub down: char,
    #[arg(long, default_value_t = DEFAULT_SELECT_KEY)]
    pub select: char,
    /// Return to the menu right after an action instead of waiting for a key
    #[arg(long)]
    pub no_wait: bool,
}

impl Cli {
    pub fn menu_config(&self) -> MenuConfig {
        let config = MenuConfig::default()
            .with_max_field_width(self.width)
            .with_heading(self.heading.clone())
            .with_keybinds(Keybinds::new(self.up, self.down, self.select))
            .with_wait_after_action(!self.no_wait);

        match &self.body_color {
            Some(body) => config.with_colors(self.head_color.clone(), body.clone()),
            None => MenuConfig {
                head_color: self.head_color.clone(),
                ..config
            },
        }
    }
}
