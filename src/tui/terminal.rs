//! Terminal setup and teardown
//!
//! This module handles initializing and restoring the terminal state,
//! including setting up the panic hook to restore the terminal on crash.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::info;

use crate::config::Settings;
use crate::services::{MockResponseService, ResponseService};

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    // Set up panic hook to restore terminal on panic
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the TUI application
///
/// Fetches run on `runtime`; this thread only draws and handles events.
pub fn run_tui(settings: &Settings, runtime: Handle) -> Result<()> {
    let mut terminal = init_terminal()?;

    let service: Arc<dyn ResponseService> = Arc::new(MockResponseService::from_settings(settings));
    let events = EventHandler::new(settings.tick_rate());
    let mut app = App::new(settings, service, runtime, events.sender());
    info!("tui started");

    let result = (|| -> Result<()> {
        loop {
            terminal.draw(|frame| super::views::render(frame, &app))?;

            handle_event(&mut app, events.next()?)?;

            if app.should_quit {
                return Ok(());
            }
        }
    })();

    // Restore the terminal even when the loop failed
    restore_terminal()?;
    info!("tui stopped");
    result
}
