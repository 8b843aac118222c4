//! Lemonade - Terminal Lemonade Maker
//!
//! Walks through picking, squeezing, drinking and restarting a glass of
//! lemonade, one tap at a time, in the terminal.

use std::io;
use std::path::PathBuf;
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    Terminal,
};
use tracing::info;

use lemonade::application::{App, AppMode, Dimensions};
use lemonade::domain::{RandomSource, RngSource};
use lemonade::infrastructure::{init_logging, FileRepository, LogConfig};
use lemonade::presentation::{render_ui, screen_regions, InputHandler};

/// Make a glass of lemonade, one tap at a time.
#[derive(Debug, Parser)]
#[command(name = "lemonade", version, about)]
struct Cli {
    /// Seed for the squeeze count, for reproducible sessions
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with button and padding sizes
    #[arg(long, value_name = "PATH")]
    layout: Option<PathBuf>,

    /// Write the layout in effect to PATH and exit
    #[arg(long, value_name = "PATH")]
    dump_layout: Option<PathBuf>,

    /// Append log lines to PATH
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter directive, e.g. `debug` (falls back to RUST_LOG, then info)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

/// Entry point for the lemonade maker.
///
/// Loads settings, sets up the terminal interface, and runs the main
/// event loop until the user quits.
///
/// # Errors
///
/// Returns an error if the layout file or log file cannot be used, or if
/// terminal setup fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let dimensions = match &cli.layout {
        Some(path) => FileRepository::load_dimensions(path)?,
        None => Dimensions::default(),
    };

    if let Some(path) = &cli.dump_layout {
        FileRepository::save_dimensions(&dimensions, path)?;
        println!("Layout written to {}", path.display());
        return Ok(());
    }

    init_logging(&LogConfig {
        level: cli.log_level.clone(),
        log_file: cli.log_file.clone(),
    })?;

    let rng: Box<dyn RandomSource> = match cli.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::thread()),
    };
    let mut app = App::new(rng, dimensions);
    info!(seed = ?cli.seed, ?dimensions, "starting lemonade session");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(glasses_made = app.glasses_made, "session ended");

    res.map_err(Into::into)
}

/// Main application event loop.
///
/// Redraws after every event and dispatches key and mouse input.
/// Continues running until the user presses 'q' in normal mode.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        app.viewport_rows = terminal.size()?.height;
        terminal.draw(|f| render_ui(f, app))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') if app.mode == AppMode::Normal => return Ok(()),
                _ => InputHandler::handle_key_event(app, key.code, key.modifiers),
            },
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                let regions = screen_regions(area, &app.dimensions);
                InputHandler::handle_mouse_event(app, mouse, &regions);
            }
            _ => {}
        }
    }
}
