//! TUI Views module
//!
//! The landing screen, the demo modal (stepper, step body, status bar),
//! dialogs and toast notifications.

pub mod landing;
pub mod status_bar;
pub mod stepper;
pub mod steps;

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use super::app::{ActiveDialog, App, Screen};
use super::dialogs;
use super::layout::{toast_rect, DemoLayout};

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    landing::render(frame, app, frame.area());

    if app.screen == Screen::Demo {
        render_demo(frame, app);
    }

    if app.has_dialog() {
        render_dialog(frame, app);
    }

    if let Some(notification) = app.notifications.current() {
        frame.render_widget(notification, toast_rect(40, 4, frame.area()));
    }
}

/// The wizard modal over the landing screen
fn render_demo(frame: &mut Frame, app: &App) {
    let Some(session) = app.active_session() else {
        return;
    };
    let layout = DemoLayout::new(frame.area());

    frame.render_widget(Clear, layout.modal);
    let block = Block::default()
        .title(" Try Savr - Interactive Demo ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, layout.modal);

    stepper::render(frame, session, layout.stepper);
    steps::render(frame, app, session, layout.body);
    status_bar::render(frame, session, layout.status_bar);
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::Confirm(action) => dialogs::confirm::render(frame, action),
        ActiveDialog::None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::services::{MockResponseService, ResponseService};
    use crate::tui::app::ConfirmAction;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::{mpsc, Arc};
    use std::time::Duration;
    use tokio::runtime::Runtime;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_landing_then_demo() {
        let runtime = Runtime::new().unwrap();
        let settings = Settings::default();
        let (sender, _receiver) = mpsc::channel();
        let service: Arc<dyn ResponseService> =
            Arc::new(MockResponseService::with_delay(Duration::from_secs(60)));
        let mut app = App::new(&settings, service, runtime.handle().clone(), sender);

        let landing = screen_text(&app);
        assert!(landing.contains("Financial freedom made simple"));
        assert!(landing.contains("Try Demo"));

        app.open_demo();
        let demo = screen_text(&app);
        assert!(demo.contains("Let's get to know you better"));
        assert!(demo.contains("Step 1 of 5"));
        assert!(demo.contains("Complete Assessment"));

        app.next_step();
        app.submit_step();
        let connecting = screen_text(&app);
        assert!(connecting.contains("Connecting..."));

        app.open_dialog(ActiveDialog::Confirm(ConfirmAction::Close));
        assert!(screen_text(&app).contains("Close the demo?"));
    }
}
