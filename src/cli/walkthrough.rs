//! Walkthrough CLI command
//!
//! Drives a wizard session from start to finish without a terminal UI,
//! printing every step as it goes. Useful for scripted demos and for checking
//! the mock service end to end.

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::display::{format_step_state, format_stepper};
use crate::error::{SavrError, SavrResult};
use crate::models::{Money, PrimaryGoal, RiskTolerance, StepId};
use crate::services::{Endpoint, MockResponseService};
use crate::wizard::{FetchOutcome, FetchTrigger, WizardSession};

/// What to do once the last step has been shown
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FinishAction {
    /// Start over on the first step with an empty form
    #[default]
    Reset,
    /// Close the demo
    Close,
}

/// Arguments for `savr walkthrough`
#[derive(Args, Debug)]
pub struct WalkthroughArgs {
    /// Your name
    #[arg(long, default_value = "")]
    pub name: String,

    /// Your age
    #[arg(long)]
    pub age: Option<u32>,

    /// Primary goal (emergency, house, retirement, travel)
    #[arg(long)]
    pub goal: Option<String>,

    /// Risk tolerance (conservative, moderate, aggressive)
    #[arg(long)]
    pub risk: Option<String>,

    /// Emergency fund target (e.g., "10000" or "$10,000")
    #[arg(long)]
    pub emergency_fund: Option<String>,

    /// Monthly savings amount (e.g., "500")
    #[arg(long)]
    pub monthly_savings: Option<String>,

    /// Override the simulated response delay (milliseconds)
    #[arg(long)]
    pub delay_ms: Option<u64>,

    /// Make the first request to this endpoint fail (repeatable)
    #[arg(long)]
    pub fail: Vec<String>,

    /// What to do after the dashboard
    #[arg(long, value_enum, default_value_t = FinishAction::Reset)]
    pub finish: FinishAction,
}

/// Handle the walkthrough command
pub async fn handle_walkthrough_command(settings: &Settings, args: WalkthroughArgs) -> SavrResult<()> {
    let mut settings = settings.clone();
    if let Some(ms) = args.delay_ms {
        settings.response_delay_ms = ms;
    }
    let service = MockResponseService::from_settings(&settings);
    for name in &args.fail {
        service.fail_next(Endpoint::parse(name), 1);
    }
    let symbol = settings.currency_symbol.as_str();

    let mut session = WizardSession::open();
    fill_form(&mut session, &args)?;

    println!("Try Savr - Interactive Demo");
    println!("Session {}", session.id());

    let mut entered: Option<FetchOutcome> = None;
    loop {
        let step = session.current_step();
        let view = session.current_view();

        println!();
        println!("{}", format_stepper(&session));
        println!(
            "Step {}/{}: {}",
            step.index() + 1,
            StepId::ALL.len(),
            view.heading()
        );

        match view.trigger() {
            FetchTrigger::OnSubmit => {
                if let Some(action) = view.action_label() {
                    println!("> {}", action);
                }
                let outcome = session.submit_and_wait(&service).await?;
                retry_on_failure(&mut session, &service, outcome).await?;
            }
            FetchTrigger::OnEnter => {
                if let Some(outcome) = entered.take() {
                    retry_on_failure(&mut session, &service, outcome).await?;
                }
            }
            FetchTrigger::Never => {}
        }

        println!("{}", format_step_state(step, session.current_state(), symbol));

        if !session.can_advance() {
            break;
        }
        entered = session.advance_and_wait(&service).await?;
    }

    println!();
    match args.finish {
        FinishAction::Reset => {
            session.reset()?;
            println!(
                "Demo reset: back to step 1 ({}) with an empty form.",
                session.current_step().label()
            );
        }
        FinishAction::Close => {
            session.close();
            println!("Demo closed.");
        }
    }
    Ok(())
}

/// Copy the command-line answers into the session's form
fn fill_form(session: &mut WizardSession, args: &WalkthroughArgs) -> SavrResult<()> {
    let form = session.form_mut()?;
    form.name = args.name.clone();
    form.age = args.age;

    if let Some(goal) = &args.goal {
        form.primary_goal = Some(PrimaryGoal::parse(goal).ok_or_else(|| {
            SavrError::InvalidInput(format!(
                "Invalid goal: '{}'. Valid goals: emergency, house, retirement, travel",
                goal
            ))
        })?);
    }
    if let Some(risk) = &args.risk {
        form.risk_tolerance = Some(RiskTolerance::parse(risk).ok_or_else(|| {
            SavrError::InvalidInput(format!(
                "Invalid risk tolerance: '{}'. Valid values: conservative, moderate, aggressive",
                risk
            ))
        })?);
    }
    if let Some(amount) = &args.emergency_fund {
        form.emergency_fund_target = parse_amount("emergency fund", amount)?;
    }
    if let Some(amount) = &args.monthly_savings {
        form.monthly_savings = parse_amount("monthly savings", amount)?;
    }
    Ok(())
}

fn parse_amount(field: &str, raw: &str) -> SavrResult<Money> {
    Money::parse(raw)
        .map_err(|e| SavrError::InvalidInput(format!("Invalid {} amount '{}': {}", field, raw, e)))
}

/// Print a failure and press retry once
async fn retry_on_failure(
    session: &mut WizardSession,
    service: &MockResponseService,
    outcome: FetchOutcome,
) -> SavrResult<()> {
    if let FetchOutcome::Failed { reason, .. } = outcome {
        println!("! Something went wrong: {}. Retrying...", reason);
        session.submit_and_wait(service).await?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> WalkthroughArgs {
        WalkthroughArgs {
            name: "Alex".into(),
            age: Some(24),
            goal: Some("retirement".into()),
            risk: Some("moderate".into()),
            emergency_fund: Some("$10,000".into()),
            monthly_savings: Some("500".into()),
            delay_ms: Some(0),
            fail: Vec::new(),
            finish: FinishAction::Reset,
        }
    }

    #[test]
    fn test_fill_form() {
        let mut session = WizardSession::open();
        fill_form(&mut session, &args()).unwrap();

        let form = session.form();
        assert_eq!(form.name, "Alex");
        assert_eq!(form.primary_goal, Some(PrimaryGoal::Retirement));
        assert_eq!(form.risk_tolerance, Some(RiskTolerance::Moderate));
        assert_eq!(form.emergency_fund_target, Money::from_dollars(10_000));
        assert_eq!(form.monthly_savings, Money::from_dollars(500));
        assert!(form.validate_profile().is_ok());
        assert!(form.validate_goals().is_ok());
    }

    #[test]
    fn test_fill_form_rejects_unknown_goal() {
        let mut session = WizardSession::open();
        let mut bad = args();
        bad.goal = Some("yacht".into());

        let err = fill_form(&mut session, &bad).unwrap_err();
        assert!(matches!(err, SavrError::InvalidInput(_)));
        assert!(err.to_string().contains("yacht"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_walkthrough_runs_to_completion() {
        let settings = Settings::default();
        let mut run = args();
        run.delay_ms = None;
        run.fail = vec!["bank-connection".into()];
        handle_walkthrough_command(&settings, run).await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_walkthrough_stops_on_missing_name() {
        let settings = Settings::default();
        let mut run = args();
        run.name = String::new();

        let err = handle_walkthrough_command(&settings, run).await.unwrap_err();
        assert!(err.is_validation());
    }
}
