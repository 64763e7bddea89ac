mod app;
mod components;
mod config;
mod error;
mod event;
mod handler;
mod manifest;
mod model;
mod theme;
mod tui;
mod ui;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use crate::app::App;
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::tui::{install_panic_hook, Tui};

/// A terminal file-tree and visibility filter for code-review change sets.
#[derive(Parser, Debug)]
#[command(name = "diff_filter_tui", version, about)]
struct Cli {
    /// Path to the change-set manifest (JSON array of {path, href, marker})
    manifest: PathBuf,

    /// Initial include expression (overrides the saved default)
    #[arg(long)]
    include: Option<String>,

    /// Initial exclude expression (overrides the saved default)
    #[arg(long)]
    exclude: Option<String>,

    /// Ignore saved filter defaults
    #[arg(long)]
    no_defaults: bool,
}

#[tokio::main]
async fn main() -> error::Result<()> {
    let cli = Cli::parse();

    let entries = manifest::load(&cli.manifest).map_err(|e| match e {
        error::AppError::Io(_) => {
            error::AppError::InvalidPath(format!("cannot read {}", cli.manifest.display()))
        }
        other => other,
    })?;

    let config = if cli.no_defaults {
        AppConfig::default()
    } else {
        AppConfig::load()
    };
    let include = cli
        .include
        .unwrap_or_else(|| config.include_default().to_string());
    let exclude = cli
        .exclude
        .unwrap_or_else(|| config.exclude_default().to_string());

    install_panic_hook();

    let mut tui = Tui::new()?;
    let mut app = App::new(entries, config, include, exclude);
    let mut events = EventHandler::new(Duration::from_millis(16));

    loop {
        tui.terminal_mut().draw(|frame| {
            ui::render(&mut app, frame);
        })?;

        match events.next().await? {
            Event::Key(key) => handler::handle_key_event(&mut app, key),
            Event::Tick => app.on_tick(Instant::now()),
            Event::Resize(_, _) => {}
        }

        if app.should_quit {
            break;
        }
    }

    tui.restore()?;
    Ok(())
}
