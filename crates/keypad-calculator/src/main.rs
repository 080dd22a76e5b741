//! Keypad Calculator terminal front-end
//!
//! Click the buttons with the mouse; `q`, `Esc` or `Ctrl+C` quits.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use keypad_calculator::config::AppConfig;
use keypad_calculator::logging;
use keypad_calculator::tui::{render, screen_layout, CalculatorApp, InputHandler};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

/// Button-driven four-function calculator
#[derive(Debug, Parser)]
#[command(name = "keypad-calculator", version, about)]
struct Cli {
    /// JSON configuration file
    #[arg(long, env = "KEYPAD_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Title shown above the calculator
    #[arg(long, env = "KEYPAD_CALC_TITLE")]
    title: Option<String>,

    /// Write logs to this file
    #[arg(long, env = "KEYPAD_CALC_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Log filter (e.g. `info`, `keypad_calculator=debug`)
    #[arg(long, env = "KEYPAD_CALC_LOG")]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    }
    .merge_cli(cli.title, cli.log_level, cli.log_file);
    logging::init(&config)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &config, event::read);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        error!(%err, "calculator exited with error");
    }

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    config: &AppConfig,
    mut next_event: impl FnMut() -> io::Result<Event>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = CalculatorApp::with_config(config);
    let input_handler = InputHandler::new();
    info!("terminal front-end started");

    while !app.should_quit() {
        let frame_area = terminal.draw(|f| render(&app, f))?.area;

        let event = next_event()?;
        let keypad_area = screen_layout(frame_area).keypad;
        let action = input_handler.handle_event(&event, app.keypad(), keypad_area);
        app.handle(action);
    }

    Ok(())
}
