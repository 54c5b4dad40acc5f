mod cli;

use clap::Parser;
use cli::Cli;
use conmenu_core::{MenuError, MenuWidget};
use std::cell::Cell;
use std::process::ExitCode;
use std::rc::Rc;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    debug!(?cli, "CLI arguments parsed");

    match run(&cli) {
        Ok(()) => {
            info!("Menu closed");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(error = %err, kind = ?err.kind(), "Menu failed");
            eprintln!("conmenu: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), MenuError> {
    let mut menu = MenuWidget::from_config(cli.menu_config())?;
    register_demo_fields(&mut menu);
    info!(fields = menu.len(), "Starting menu");
    menu.run()
}

fn register_demo_fields(menu: &mut MenuWidget) {
    menu.add_field("Say hello", || {
        println!("Hello from the menu!");
    });

    let count = Rc::new(Cell::new(0u32));
    menu.add_field("Count", move || {
        count.set(count.get() + 1);
        println!("Selected {} time(s).", count.get());
    });

    menu.add_field("About", || {
        println!("conmenu {}", env!("CARGO_PKG_VERSION"));
        println!("Move with the up/down keys and pick an entry with select.");
    });
}

/// Logs go to stderr so they never interleave with the menu frame
fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .with_writer(std::io::stderr)
            .init();
    });
}
