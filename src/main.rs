mod app;
mod card_file;
mod config;
mod deck;
mod group;
mod store;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app::App;
use config::Config;
use store::CardStore;

#[derive(Parser, Debug)]
#[command(name = "carddraw")]
#[command(about = "Manage card groups and draw cards without replacement")]
#[command(version)]
struct Cli {
    /// Config file path
    #[arg(long, default_value = "~/.config/carddraw/config.toml")]
    config: String,

    /// Seed for reproducible draws (overrides config)
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path (default: data dir/carddraw/carddraw.log)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Card files to load as groups at startup, one card per line
    files: Vec<PathBuf>,
}

fn default_log_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("carddraw")
        .join("carddraw.log")
}

/// Log to a file: the terminal belongs to the TUI
fn init_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }
    let file = File::create(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "carddraw=info".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_logging(&log_path)?;

    // Load config
    let config = Config::load(&cli.config)?;

    let store = match cli.seed.or(config.behavior.seed) {
        Some(seed) => {
            tracing::info!("Using fixed seed {}", seed);
            CardStore::seeded(seed)
        }
        None => CardStore::new(),
    };

    let mut app = App::new(store, config);
    app.load_files(&cli.files);
    tracing::info!("Started with {} groups", app.store().groups().len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run main loop
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            // Resize needs no handling: the next draw recomputes the grid
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }
    }
    Ok(())
}
