//! Step bodies
//!
//! Renders whatever the active step shows: a form, a busy message, a failure
//! with a retry hint, or the step's result.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use super::stepper::accent;
use crate::models::{
    BankConnection, DashboardSnapshot, GoalPlan, Portfolio, PrimaryGoal, ProfileAssessment,
    RiskTolerance, StepId, StepStatus,
};
use crate::tui::app::App;
use crate::tui::forms::{GoalField, ProfileField};
use crate::tui::widgets::TextInput;
use crate::wizard::WizardSession;

pub fn render(frame: &mut Frame, app: &App, session: &WizardSession, area: Rect) {
    let step = session.current_step();
    let view = session.current_view();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(area);

    let heading = Paragraph::new(Line::from(Span::styled(
        view.heading(),
        Style::default()
            .fg(accent(step))
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, padded(chunks[0]));
    let body = padded(chunks[1]);

    let state = session.current_state();
    match state.status() {
        StepStatus::Loading => render_busy(frame, view.busy_label(), body),
        StepStatus::Failed { reason } => render_failure(frame, reason, body),
        StepStatus::Completed => {
            let symbol = app.settings.currency_symbol.as_str();
            let Some(payload) = state.result() else {
                return;
            };
            if let Some(profile) = payload.as_profile() {
                render_profile_result(frame, profile, body);
            } else if let Some(connection) = payload.as_connection() {
                render_connection(frame, connection, symbol, body);
            } else if let Some(portfolio) = payload.as_portfolio() {
                render_portfolio(frame, portfolio, symbol, body);
            } else if let Some(plan) = payload.as_goal_plan() {
                render_goal_plan(frame, plan, symbol, body);
            }
        }
        StepStatus::NotStarted => match step {
            StepId::Profile => render_profile_form(frame, app, body),
            StepId::Connection => render_connection_prompt(frame, body),
            // fetches on enter; only visible for the instant before it starts
            StepId::Recommendation => render_busy(frame, view.busy_label(), body),
            StepId::Goal => render_goal_form(frame, app, body),
            StepId::Summary => {
                let symbol = app.settings.currency_symbol.as_str();
                render_dashboard(frame, &DashboardSnapshot::illustrative(), symbol, body)
            }
        },
    }
}

fn padded(area: Rect) -> Rect {
    Rect {
        x: area.x + 2,
        width: area.width.saturating_sub(4),
        ..area
    }
}

fn button(label: &str, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Enter ",
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(label.to_string(), Style::default().fg(Color::White)),
    ])
}

fn error_line(message: &Option<String>) -> Line<'static> {
    match message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}

fn render_busy(frame: &mut Frame, label: &str, area: Rect) {
    let text = Paragraph::new(Line::from(Span::styled(
        label.to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC),
    )));
    frame.render_widget(text, area);
}

fn render_failure(frame: &mut Frame, reason: &str, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            format!("Something went wrong: {}", reason),
            Style::default().fg(Color::Red),
        )),
        Line::from(""),
        button("Retry", Color::Red),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_input(frame: &mut Frame, input: &TextInput, focused: bool, area: Rect) {
    let input = input.clone().focused(focused);
    frame.render_widget(&input, area);
}

/// A vertical list of radio options
fn radio_lines<'a>(
    title: &'a str,
    labels: impl Iterator<Item = &'static str>,
    selected: Option<usize>,
    focused: bool,
) -> Vec<Line<'a>> {
    let title_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let mut lines = vec![Line::from(Span::styled(title, title_style))];
    for (i, label) in labels.enumerate() {
        let chosen = selected == Some(i);
        let mark = if chosen { "(•)" } else { "( )" };
        let style = if chosen {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(Span::styled(format!("  {} {}", mark, label), style)));
    }
    lines
}

fn render_profile_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.profile_form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Age
            Constraint::Length(1),
            Constraint::Length(5), // Goals
            Constraint::Length(1),
            Constraint::Length(4), // Risk
            Constraint::Length(1),
            Constraint::Length(1), // Button
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(area);

    render_input(frame, &form.name_input, form.focused_field == ProfileField::Name, chunks[0]);
    render_input(frame, &form.age_input, form.focused_field == ProfileField::Age, chunks[1]);

    let goals = radio_lines(
        "Primary Financial Goal",
        PrimaryGoal::ALL.iter().map(|g| g.label()),
        form.goal_index,
        form.focused_field == ProfileField::Goal,
    );
    frame.render_widget(Paragraph::new(goals), chunks[3]);

    let risks = radio_lines(
        "Risk Tolerance",
        RiskTolerance::ALL.iter().map(|r| r.label()),
        form.risk_index,
        form.focused_field == ProfileField::Risk,
    );
    frame.render_widget(Paragraph::new(risks), chunks[5]);

    frame.render_widget(
        Paragraph::new(button("Complete Assessment", accent(StepId::Profile))),
        chunks[7],
    );
    frame.render_widget(Paragraph::new(error_line(&form.error_message)), chunks[8]);
}

fn render_profile_result(frame: &mut Frame, profile: &ProfileAssessment, area: Rect) {
    let label = Style::default().fg(Color::Gray);
    let value = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::from(Span::styled(
            "Onboarding Complete!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Your risk profile:     ", label),
            Span::styled(profile.risk_profile.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Recommended portfolio: ", label),
            Span::styled(profile.recommended_portfolio.clone(), value),
        ]),
        Line::from(""),
        Line::from(Span::styled("Next steps", label)),
    ];
    for step in &profile.next_steps {
        lines.push(Line::from(format!("  • {}", step)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press n to continue",
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_connection_prompt(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Securely link your accounts to see all your money in one place.",
            Style::default().fg(Color::Gray),
        )),
        Line::from(Span::styled(
            "Bank-level encryption. We never store your credentials.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        button("Connect Bank", accent(StepId::Connection)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_connection(frame: &mut Frame, connection: &BankConnection, symbol: &str, area: Rect) {
    let width = area.width.saturating_sub(2) as usize;
    let row = |name: &str, amount: String, style: Style| {
        let gap = width.saturating_sub(name.chars().count() + amount.chars().count());
        Line::from(vec![
            Span::styled(name.to_string(), style),
            Span::raw(" ".repeat(gap.max(1))),
            Span::styled(amount, style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            "Successfully Connected!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    for account in &connection.accounts {
        lines.push(row(
            &account.name,
            account.balance.format_with_symbol(symbol),
            Style::default().fg(Color::White),
        ));
    }
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(row(
        "Total Balance",
        connection.total_balance().format_with_symbol(symbol),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_portfolio(frame: &mut Frame, portfolio: &Portfolio, symbol: &str, area: Rect) {
    let mut constraints = vec![Constraint::Length(3)];
    constraints.extend(portfolio.allocation.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let header = vec![
        Line::from(vec![
            Span::styled(
                portfolio.total_value.format_with_symbol(symbol),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {}% expected return", portfolio.expected_return),
                Style::default().fg(Color::Green),
            ),
        ]),
        Line::from(Span::styled(
            format!("Asset Allocation (Risk Level: {})", portfolio.risk_level),
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(Paragraph::new(header), chunks[0]);

    for (slice, chunk) in portfolio.allocation.iter().zip(chunks.iter().skip(1)) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(*chunk);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(slice.label.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!("  {}", slice.value.format_with_symbol(symbol)),
                    Style::default().fg(Color::Gray),
                ),
            ])),
            rows[0],
        );
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(accent(StepId::Recommendation)))
            .percent(slice.percentage.min(100) as u16)
            .label(format!("{}%", slice.percentage));
        frame.render_widget(gauge, rows[1]);
    }
}

fn render_goal_form(frame: &mut Frame, app: &App, area: Rect) {
    let form = &app.goal_form;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Intro
            Constraint::Length(1), // Emergency fund
            Constraint::Length(1), // Monthly savings
            Constraint::Length(1),
            Constraint::Length(1), // Button
            Constraint::Length(1), // Error
            Constraint::Min(0),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "How much do you want set aside, and how much can you save each month?",
            Style::default().fg(Color::Gray),
        ))
        .wrap(Wrap { trim: true }),
        chunks[0],
    );
    render_input(
        frame,
        &form.emergency_input,
        form.focused_field == GoalField::EmergencyFund,
        chunks[1],
    );
    render_input(
        frame,
        &form.savings_input,
        form.focused_field == GoalField::MonthlySavings,
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(button("Save Goals", accent(StepId::Goal))),
        chunks[4],
    );
    frame.render_widget(Paragraph::new(error_line(&form.error_message)), chunks[5]);
}

fn render_goal_plan(frame: &mut Frame, plan: &GoalPlan, symbol: &str, area: Rect) {
    let mut constraints = vec![Constraint::Length(2)];
    constraints.extend(plan.goals.iter().map(|_| Constraint::Length(2)));
    constraints.push(Constraint::Length(2));
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Your Goals",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    for (i, goal) in plan.goals.iter().enumerate() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(chunks[i + 1]);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(goal.name.clone(), Style::default().fg(Color::White)),
                Span::styled(
                    format!(
                        "  {} / {}",
                        goal.current.format_with_symbol(symbol),
                        goal.target.format_with_symbol(symbol)
                    ),
                    Style::default().fg(Color::Gray),
                ),
            ])),
            rows[0],
        );
        let progress = goal.progress();
        frame.render_widget(
            Gauge::default()
                .gauge_style(Style::default().fg(accent(StepId::Goal)))
                .percent(progress.min(100) as u16)
                .label(format!("{}%", progress)),
            rows[1],
        );
    }

    let contribution = Line::from(vec![
        Span::styled("Monthly contribution: ", Style::default().fg(Color::Gray)),
        Span::styled(
            plan.monthly_contribution.format_with_symbol(symbol),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(contribution), chunks[plan.goals.len() + 1]);
}

fn render_dashboard(frame: &mut Frame, snapshot: &DashboardSnapshot, symbol: &str, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Cards
            Constraint::Length(1),
            Constraint::Length(1), // Contribution
            Constraint::Length(1),
            Constraint::Length(1), // Button
            Constraint::Min(0),
        ])
        .split(area);
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(chunks[0]);

    let card = |title: &'static str| {
        Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
    };

    let performance = Paragraph::new(vec![
        Line::from(Span::styled(
            snapshot.ytd_return_label(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled("This year", Style::default().fg(Color::Gray))),
    ])
    .block(card("Portfolio Performance"));
    frame.render_widget(performance, cards[0]);

    let progress_block = card("Goal Progress");
    let progress_inner = progress_block.inner(cards[1]);
    frame.render_widget(progress_block, cards[1]);
    let progress_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(0)])
        .split(progress_inner);
    frame.render_widget(
        Gauge::default()
            .gauge_style(Style::default().fg(accent(StepId::Summary)))
            .percent(snapshot.goal_progress.min(100) as u16)
            .label(format!("{}%", snapshot.goal_progress)),
        progress_rows[0],
    );
    frame.render_widget(
        Paragraph::new(Span::styled(
            snapshot.goal_caption.clone(),
            Style::default().fg(Color::Gray),
        )),
        progress_rows[1],
    );

    let circle: Vec<Span> = snapshot
        .circle
        .iter()
        .flat_map(|c| {
            [
                Span::styled(
                    format!(" {} ", c),
                    Style::default()
                        .fg(Color::Black)
                        .bg(accent(StepId::Profile)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    let accountability = Paragraph::new(vec![
        Line::from(circle),
        Line::from(Span::styled(
            snapshot.circle_caption(),
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(card("Accountability Circle"));
    frame.render_widget(accountability, cards[2]);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Monthly contribution: ", Style::default().fg(Color::Gray)),
            Span::styled(
                snapshot.monthly_contribution.format_with_symbol(symbol),
                Style::default().fg(Color::White),
            ),
        ])),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(button("Start Over", accent(StepId::Summary))),
        chunks[4],
    );
}
