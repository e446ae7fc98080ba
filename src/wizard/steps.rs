//! Step views
//!
//! Every step answers the same questions: what it is called, what it needs
//! before it can submit, what triggers its fetch and which endpoint it calls.
//! Rendering lives with the front ends (`display` and `tui`).

use crate::models::{FormData, StepId, ValidationError};
use crate::services::Endpoint;

/// What causes a step to fetch its result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// The visitor presses the step's action
    OnSubmit,
    /// The controller fetches as soon as the step becomes active
    OnEnter,
    /// Display only
    Never,
}

/// Behaviour shared by all wizard steps
pub trait StepView: Send + Sync {
    fn id(&self) -> StepId;

    /// Heading shown above the step body
    fn heading(&self) -> &'static str;

    fn trigger(&self) -> FetchTrigger;

    /// Endpoint this step fetches from, if any
    fn endpoint(&self) -> Option<Endpoint>;

    /// Check the fields this step requires before submitting
    fn validate(&self, _form: &FormData) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Label of the submit action
    fn action_label(&self) -> Option<&'static str> {
        None
    }

    /// Text shown while the fetch is in flight
    fn busy_label(&self) -> &'static str {
        "Loading..."
    }
}

struct ProfileStep;

impl StepView for ProfileStep {
    fn id(&self) -> StepId {
        StepId::Profile
    }

    fn heading(&self) -> &'static str {
        "Let's get to know you better"
    }

    fn trigger(&self) -> FetchTrigger {
        FetchTrigger::OnSubmit
    }

    fn endpoint(&self) -> Option<Endpoint> {
        Some(Endpoint::Profile)
    }

    fn validate(&self, form: &FormData) -> Result<(), ValidationError> {
        form.validate_profile()
    }

    fn action_label(&self) -> Option<&'static str> {
        Some("Complete Assessment")
    }

    fn busy_label(&self) -> &'static str {
        "Analyzing..."
    }
}

struct ConnectionStep;

impl StepView for ConnectionStep {
    fn id(&self) -> StepId {
        StepId::Connection
    }

    fn heading(&self) -> &'static str {
        "Connect Your Bank Accounts"
    }

    fn trigger(&self) -> FetchTrigger {
        FetchTrigger::OnSubmit
    }

    fn endpoint(&self) -> Option<Endpoint> {
        Some(Endpoint::Connection)
    }

    fn action_label(&self) -> Option<&'static str> {
        Some("Connect Bank")
    }

    fn busy_label(&self) -> &'static str {
        "Connecting..."
    }
}

struct RecommendationStep;

impl StepView for RecommendationStep {
    fn id(&self) -> StepId {
        StepId::Recommendation
    }

    fn heading(&self) -> &'static str {
        "Your AI-Generated Portfolio"
    }

    fn trigger(&self) -> FetchTrigger {
        FetchTrigger::OnEnter
    }

    fn endpoint(&self) -> Option<Endpoint> {
        Some(Endpoint::Recommendation)
    }

    fn busy_label(&self) -> &'static str {
        "AI is creating your portfolio..."
    }
}

struct GoalStep;

impl StepView for GoalStep {
    fn id(&self) -> StepId {
        StepId::Goal
    }

    fn heading(&self) -> &'static str {
        "Set Your Financial Goals"
    }

    fn trigger(&self) -> FetchTrigger {
        FetchTrigger::OnSubmit
    }

    fn endpoint(&self) -> Option<Endpoint> {
        Some(Endpoint::Goal)
    }

    fn validate(&self, form: &FormData) -> Result<(), ValidationError> {
        form.validate_goals()
    }

    fn action_label(&self) -> Option<&'static str> {
        Some("Save Goals")
    }

    fn busy_label(&self) -> &'static str {
        "Saving..."
    }
}

struct SummaryStep;

impl StepView for SummaryStep {
    fn id(&self) -> StepId {
        StepId::Summary
    }

    fn heading(&self) -> &'static str {
        "Your Savr Dashboard"
    }

    fn trigger(&self) -> FetchTrigger {
        FetchTrigger::Never
    }

    fn endpoint(&self) -> Option<Endpoint> {
        None
    }
}

/// The view implementing a step
pub fn view_for(step: StepId) -> &'static dyn StepView {
    match step {
        StepId::Profile => &ProfileStep,
        StepId::Connection => &ConnectionStep,
        StepId::Recommendation => &RecommendationStep,
        StepId::Goal => &GoalStep,
        StepId::Summary => &SummaryStep,
    }
}
