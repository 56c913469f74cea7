// pagerlink: five-button messaging client in the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pagerlink::config::{Cli, SeedData};
use pagerlink::nav::Controller;
use pagerlink::services::SystemClipboard;
use pagerlink::ui::App;

fn init_logging(cli: &Cli) -> anyhow::Result<()> {
    // The terminal belongs to the TUI; logs only go to a file
    let Some(path) = &cli.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter =
        EnvFilter::try_from_env("PAGERLINK_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("cannot install log subscriber")
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli)?;

    let seed = match &cli.seed {
        Some(path) => SeedData::load(path)?,
        None => SeedData::default(),
    };
    let store = seed.with_my_code(cli.my_code).into_store();
    let my_code = store.my_code();
    info!(?my_code, "session starting");

    let controller = Controller::new(store.clone(), SystemClipboard::new(), store)
        .with_clipboard_timeout(cli.clipboard_timeout());
    let mut app = App::new(controller, my_code);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal, cli.tick()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.context("terminal event loop failed")?;
    info!("session ended");
    Ok(())
}
