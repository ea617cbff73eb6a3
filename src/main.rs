mod app;
mod domain;
mod input;
mod persistence;
mod ui;

use anyhow::{Context, Result};
use app::Application;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use persistence::{resolve_list_file, LIST_FILE_NAME};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tareas")]
#[command(about = "A small terminal task-list manager", long_about = None)]
struct Cli {
    /// Task list file. Relative paths resolve against the current directory.
    #[arg(short, long, default_value = LIST_FILE_NAME)]
    file: PathBuf,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "info" or "tareas=debug"
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_file) = &cli.log_file {
        init_logging(log_file, &cli.log_level)?;
    }

    let list_path = resolve_list_file(&cli.file).context("Could not determine current directory")?;
    tracing::info!(path = %list_path.display(), "starting");

    // Loads the list once before the first frame
    let mut app = Application::start(list_path);

    run_tui(&mut app)
}

/// Install a file-backed subscriber; the terminal belongs to the UI
fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file: {}", path.display()))?;
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

fn run_tui(app: &mut Application) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::warn!(error = %err, "event loop stopped");
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut Application) -> Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        // Nothing changes between key presses, so block on the next event
        if let Event::Key(key) = event::read()? {
            // Only process key press events (ignore key release)
            if key.kind == KeyEventKind::Press && input::handle_key(app, key) {
                return Ok(());
            }
        }
    }
}
