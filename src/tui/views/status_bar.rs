//! Status bar view
//!
//! Shows the step position, the step's status and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::{StepId, StepStatus, STEP_COUNT};
use crate::wizard::WizardSession;

/// Key hints for the current step
fn hints(session: &WizardSession) -> &'static str {
    let state = session.current_state();
    let step = session.current_step();
    if state.failure().is_some() {
        " Enter:Retry  ^N:Next  ^P:Back  Esc:Close "
    } else if !session.can_advance() {
        " Enter:Start Over  ^P:Back  Esc:Close  F1:Help "
    } else if matches!(step, StepId::Profile | StepId::Goal) && !state.is_completed() {
        " Tab:Field  Enter:Submit  ^N:Next  ^P:Back  Esc:Close "
    } else if session.can_submit() {
        " Enter:Go  n:Next  b:Back  Esc:Close  F1:Help "
    } else {
        " n:Next  b:Back  ^R:Reset  Esc:Close  F1:Help "
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, session: &WizardSession, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" Step {} of {} ", session.current_index() + 1, STEP_COUNT),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let (status, color) = match session.current_state().status() {
        StepStatus::NotStarted => ("", Color::Gray),
        StepStatus::Loading => (" working...", Color::Yellow),
        StepStatus::Completed => (" done", Color::Green),
        StepStatus::Failed { .. } => (" failed", Color::Red),
    };
    spans.push(Span::styled(status, Style::default().fg(color)));

    let hints = hints(session);

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
