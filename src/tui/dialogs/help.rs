//! Help dialog
//!
//! Shows the keys for the current screen

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, Screen};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(help_lines(app.screen))
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn help_lines(screen: Screen) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    match screen {
        Screen::Landing => {
            lines.push(heading("Landing"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Try the demo"));
            lines.push(key_line("q/Esc", "Quit"));
        }
        Screen::Demo => {
            lines.push(heading("Demo"));
            lines.push(Line::from(""));
            lines.push(key_line("Ctrl+n", "Next step"));
            lines.push(key_line("Ctrl+p", "Previous step"));
            lines.push(key_line("Ctrl+r", "Start over"));
            lines.push(key_line("Esc", "Close the demo"));
            lines.push(key_line("F1", "Show this help"));
            lines.push(Line::from(""));
            lines.push(heading("Forms"));
            lines.push(Line::from(""));
            lines.push(key_line("Tab", "Next field"));
            lines.push(key_line("Shift+Tab", "Previous field"));
            lines.push(key_line("Up/Down", "Pick an option"));
            lines.push(key_line("Enter", "Submit"));
            lines.push(Line::from(""));
            lines.push(heading("Other steps"));
            lines.push(Line::from(""));
            lines.push(key_line("Enter", "Run the step's action / retry"));
            lines.push(key_line("n/Right", "Next step"));
            lines.push(key_line("b/Left", "Previous step"));
            lines.push(key_line("q", "Quit"));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

fn heading(text: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        text,
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Yellow),
    )])
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>12}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
