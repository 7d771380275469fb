//! custview - a terminal-based viewer for a searchable customers table.
//!
//! Renders a windowed table over 5,000 synthetic customer records with a
//! debounced substring filter.

use std::io::{self, Stdout};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod config;
mod data;
mod error;
mod events;
mod logging;
mod ui;

use app::App;
use config::Config;
use events::EventHandler;

/// Command-line options. Flags override values from the config file.
#[derive(Debug, Parser)]
#[command(name = "custview", version, about)]
struct Cli {
    /// Number of synthetic rows to generate.
    #[arg(long)]
    rows: Option<usize>,

    /// Debounce delay for filter keystrokes, in milliseconds.
    #[arg(long)]
    debounce_ms: Option<u64>,

    /// Path to an alternative config file.
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the effective configuration: file values, then flag overrides.
    fn resolve_config(&self) -> Result<Config, error::AppError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(debounce_ms) = self.debounce_ms {
            config.debounce_ms = debounce_ms;
        }
        // Record ids are sequential u32s.
        config.rows = config.rows.min(u32::MAX as usize);
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let config = cli
        .resolve_config()
        .map_err(|e| anyhow::anyhow!(e.user_message()))?;

    let mut terminal = setup_terminal().context("failed to set up terminal")?;
    let result = run(&mut terminal, &config);
    restore_terminal(&mut terminal).context("failed to restore terminal")?;

    logging::shutdown();
    result
}

/// The draw/handle loop: render the current state, then apply one event.
fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config) -> anyhow::Result<()> {
    let mut app = App::new(config);
    let events = EventHandler::with_tick_rate(config.tick_rate_ms);

    while !app.should_quit() {
        terminal.draw(|frame| app.draw(frame))?;
        let event = events.next()?;
        app.handle_event(event);
    }
    Ok(())
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, error::AppError> {
    enable_raw_mode()
        .map_err(|e| error::AppError::terminal(format!("could not enter raw mode: {}", e)))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(terminal)
}

fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), error::AppError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
