//! panel-kit gallery - an interactive showcase of the panel-kit widgets
//!
//! Opens every dialog and popup in a crossterm terminal, shows the top bar
//! with a custom content slot and reports each widget callback as a toast.

mod app;
mod gallery;

use anyhow::{Context, Result};
use app::{App, Flow};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use panel_kit::Config;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::time::Duration;

/// Frame interval of the event loop
const FRAME: Duration = Duration::from_millis(16);

/// Application entry point.
///
/// Loads the configuration, installs file logging, initializes the terminal,
/// runs the event loop and restores the terminal even if the loop fails.
///
/// # Errors
/// This function will return an error if:
/// - The configuration cannot be read or created
/// - The log file cannot be opened
/// - Terminal initialization or restoration fails
#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    init_logging(&config)?;
    log::info!("Starting panel-kit gallery v{}", env!("CARGO_PKG_VERSION"));

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config);

    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        log::error!("Gallery exited with error: {err:#}");
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Sends log records to the file named in `[logging]`. The terminal belongs
/// to the TUI, so nothing is written to stderr.
fn init_logging(config: &Config) -> Result<()> {
    let path = config.log_file_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory: {dir:?}"))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file: {path:?}"))?;

    env_logger::Builder::new()
        .parse_filters(&config.logging.level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:>5} {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to initialize logger")?;

    Ok(())
}

/// Runs the main event loop.
///
/// Each frame advances popup transitions by the time since the previous
/// frame, drains reported widget events, redraws, then handles every pending
/// terminal event. The loop ends when the app asks to quit.
///
/// # Errors
/// This function will return an error if drawing or reading terminal events
/// fails.
async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    let mut ticker = tokio::time::interval(FRAME);
    let mut last = ticker.tick().await;

    loop {
        let now = ticker.tick().await;
        app.tick(now - last);
        last = now;

        terminal.draw(|f| gallery::draw(f, app))?;

        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }
}
