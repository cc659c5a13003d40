//! `doable` — a terminal todo-list client.
//!
//! Talks to a REST todo service (create, list, delete) and renders the
//! list in a [ratatui](https://ratatui.rs) interface: a title input on
//! top, the list below it, and a clickable remove control on every row.
//!
//! Logs are written to a file (default `/tmp/doable.log`) to avoid
//! corrupting the terminal UI.
//!
//! Entry point: CLI argument parsing, tracing setup, panic hooks, and
//! app launch.

mod action;
mod app;
mod event;
mod theme;
mod tui;
mod view;

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

use doable_core::{Controller, ControllerConfig};

use crate::app::App;

/// Terminal client for a REST todo service.
#[derive(Parser, Debug)]
#[command(name = "doable", version, about)]
struct Cli {
    /// Todo service URL (defaults to http://localhost:3000/todos)
    #[arg(short = 'u', long)]
    url: Option<Url>,

    /// Log file path
    #[arg(long, default_value = "/tmp/doable.log")]
    log_file: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Set up file-based tracing. We MUST NOT log to stdout/stderr — that
/// would corrupt the TUI output. Returns a guard that must be held for
/// the lifetime of the application to ensure logs are flushed.
fn setup_tracing(cli: &Cli) -> WorkerGuard {
    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::new(format!(
        "doable={log_level},doable_core={log_level},doable_api={log_level}"
    ));

    let log_dir = cli
        .log_file
        .parent()
        .unwrap_or(std::path::Path::new("/tmp"));
    let log_filename = cli
        .log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("doable.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Install panic/error hooks BEFORE entering the terminal
    tui::install_hooks()?;

    // Tracing to file — hold the guard so logs flush on exit
    let _log_guard = setup_tracing(&cli);

    let config = match &cli.url {
        Some(url) => ControllerConfig::new(url.clone()),
        None => ControllerConfig::default(),
    };
    info!(url = %config.base_url, "starting doable");

    let controller = Controller::new(&config)?;
    let mut app = App::new(controller);
    app.run().await?;

    Ok(())
}
