//! Stepper header
//!
//! One cell per step: done steps get a check mark, the active one is
//! highlighted in its accent color.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{StepId, StepStatus, STEP_COUNT};
use crate::wizard::WizardSession;

/// Accent color of each step, in order
const STEP_COLORS: [Color; STEP_COUNT] = [
    Color::Rgb(0x0D, 0x8C, 0xFE),
    Color::Rgb(0x8F, 0xDE, 0x02),
    Color::Rgb(0xF2, 0xF5, 0x0E),
    Color::Rgb(0x0D, 0x8C, 0xFE),
    Color::Rgb(0x8F, 0xDE, 0x02),
];

pub fn accent(step: StepId) -> Color {
    STEP_COLORS[step.index()]
}

pub fn render(frame: &mut Frame, session: &WizardSession, area: Rect) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, STEP_COUNT as u32); STEP_COUNT])
        .split(area);

    for (step, cell) in StepId::ALL.into_iter().zip(cells.iter()) {
        let is_current = step == session.current_step();
        let (marker, marker_color) = match session.state(step).status() {
            StepStatus::Completed => ("✓", Color::Green),
            StepStatus::Loading => ("…", Color::Yellow),
            StepStatus::Failed { .. } => ("!", Color::Red),
            StepStatus::NotStarted => (" ", Color::Reset),
        };

        let (border, text) = if is_current {
            (
                Style::default().fg(accent(step)),
                Style::default()
                    .fg(accent(step))
                    .add_modifier(Modifier::BOLD),
            )
        } else if step < session.current_step() {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::Gray),
            )
        } else {
            (
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        };

        let label = Line::from(vec![
            Span::styled(format!("{} ", step.index() + 1), text),
            Span::styled(step.label(), text),
            Span::raw(" "),
            Span::styled(marker, Style::default().fg(marker_color)),
        ]);
        let paragraph = Paragraph::new(label)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::BOTTOM).border_style(border));
        frame.render_widget(paragraph, *cell);
    }
}
