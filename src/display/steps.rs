//! Step result formatting
//!
//! Formats step states and payloads for plain terminal output.

use crate::models::{
    BankConnection, DashboardSnapshot, GoalPlan, Payload, Portfolio, ProfileAssessment, StepId,
    StepState, StepStatus,
};
use crate::wizard::{view_for, WizardSession};

const BAR_WIDTH: usize = 20;

/// One-line progress header, e.g. `✓ Onboarding Quiz > [Bank Connection] > ...`
pub fn format_stepper(session: &WizardSession) -> String {
    StepId::ALL
        .iter()
        .map(|&step| {
            let label = step.label();
            if step == session.current_step() {
                format!("[{}]", label)
            } else if session.state(step).is_completed() {
                format!("✓ {}", label)
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" > ")
}

/// Render a step's state: busy text, failure, result or nothing yet
pub fn format_step_state(step: StepId, state: &StepState, symbol: &str) -> String {
    let view = view_for(step);
    match state.status() {
        StepStatus::NotStarted => match view.action_label() {
            Some(action) => format!("Waiting for '{}'.", action),
            None if step == StepId::Summary => format_dashboard(&DashboardSnapshot::illustrative()),
            None => String::new(),
        },
        StepStatus::Loading => view.busy_label().to_string(),
        StepStatus::Failed { reason } => {
            format!("Something went wrong: {}. Press retry to try again.", reason)
        }
        StepStatus::Completed => state
            .result()
            .map(|payload| format_payload(payload, symbol))
            .unwrap_or_default(),
    }
}

/// Render any payload
pub fn format_payload(payload: &Payload, symbol: &str) -> String {
    match payload {
        Payload::Profile(profile) => format_profile(profile),
        Payload::Connection(connection) => format_connection(connection, symbol),
        Payload::Recommendation(portfolio) => format_portfolio(portfolio, symbol),
        Payload::Goal(plan) => format_goal_plan(plan, symbol),
        Payload::Echo { success, data } => format!("success: {}\ndata: {}", success, data),
    }
}

/// Onboarding result summary
pub fn format_profile(profile: &ProfileAssessment) -> String {
    let mut output = String::new();
    output.push_str("Onboarding Complete!\n");
    output.push_str(&format!("Your risk profile:      {}\n", profile.risk_profile));
    output.push_str(&format!(
        "Recommended portfolio:  {}\n",
        profile.recommended_portfolio
    ));
    if !profile.next_steps.is_empty() {
        output.push_str(&format!("Next steps:             {}\n", profile.next_steps.join(", ")));
    }
    output
}

/// Linked accounts with their total
pub fn format_connection(connection: &BankConnection, symbol: &str) -> String {
    if connection.accounts.is_empty() {
        return "No accounts connected.".to_string();
    }

    let name_width = connection
        .accounts
        .iter()
        .map(|a| a.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Total Balance".len());

    let mut output = String::new();
    output.push_str("Successfully Connected!\n");
    for account in &connection.accounts {
        output.push_str(&format!(
            "  {:<name_width$}  {:>12}\n",
            account.name,
            account.balance.format_with_symbol(symbol),
            name_width = name_width,
        ));
    }
    output.push_str(&format!(
        "  {:-<name_width$}  {:->12}\n",
        "",
        "",
        name_width = name_width
    ));
    output.push_str(&format!(
        "  {:<name_width$}  {:>12}\n",
        "Total Balance",
        connection.total_balance().format_with_symbol(symbol),
        name_width = name_width,
    ));
    output
}

/// Allocation breakdown with percentage bars
pub fn format_portfolio(portfolio: &Portfolio, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{}  ({}% expected return)\n",
        portfolio.total_value.format_with_symbol(symbol),
        portfolio.expected_return
    ));
    output.push_str(&format!(
        "Asset Allocation (Risk Level: {})\n",
        portfolio.risk_level
    ));

    let label_width = portfolio
        .allocation
        .iter()
        .map(|a| a.label.len())
        .max()
        .unwrap_or(0);

    for slice in &portfolio.allocation {
        output.push_str(&format!(
            "  {:<label_width$} {:>3}%  {}  {:>10}\n",
            slice.label,
            slice.percentage,
            bar(slice.percentage),
            slice.value.format_with_symbol(symbol),
            label_width = label_width,
        ));
    }
    output
}

/// Saved goals with progress bars
pub fn format_goal_plan(plan: &GoalPlan, symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Your Goals\n");
    for goal in &plan.goals {
        let progress = goal.progress();
        output.push_str(&format!(
            "  {:<16} {}  {:>3}%  ({} / {})\n",
            goal.name,
            bar(progress),
            progress,
            goal.current.format_with_symbol(symbol),
            goal.target.format_with_symbol(symbol),
        ));
    }
    output.push_str(&format!(
        "Monthly contribution: {}\n",
        plan.monthly_contribution.format_with_symbol(symbol)
    ));
    output
}

/// The illustrative dashboard
pub fn format_dashboard(snapshot: &DashboardSnapshot) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Portfolio Performance:  {}  (year to date)\n",
        snapshot.ytd_return_label()
    ));
    output.push_str(&format!(
        "Goal Progress:          {}%   ({})\n",
        snapshot.goal_progress, snapshot.goal_caption
    ));
    let circle: String = snapshot
        .circle
        .iter()
        .map(|c| format!("({})", c))
        .collect::<Vec<_>>()
        .join(" ");
    output.push_str(&format!(
        "Accountability Circle:  {}  {}\n",
        circle,
        snapshot.circle_caption()
    ));
    output
}

fn bar(percent: u32) -> String {
    let filled = (percent.min(100) as usize * BAR_WIDTH + 50) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}
