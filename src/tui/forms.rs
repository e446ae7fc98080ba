//! Form state for the steps that take input
//!
//! The profile quiz and goal setting steps keep their raw field text here.
//! Every edit is copied into the session's [`FormData`] so that the wizard
//! always holds what the visitor has typed so far.

use crate::models::{FormData, Money, PrimaryGoal, RiskTolerance};
use crate::tui::widgets::input::TextInput;

/// Which field is focused in the profile quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileField {
    #[default]
    Name,
    Age,
    Goal,
    Risk,
}

impl ProfileField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Age,
            Self::Age => Self::Goal,
            Self::Goal => Self::Risk,
            Self::Risk => Self::Name,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Risk,
            Self::Age => Self::Name,
            Self::Goal => Self::Age,
            Self::Risk => Self::Goal,
        }
    }
}

/// State for the onboarding quiz
#[derive(Debug, Clone)]
pub struct ProfileFormState {
    pub focused_field: ProfileField,
    pub name_input: TextInput,
    pub age_input: TextInput,
    /// Index into [`PrimaryGoal::ALL`]; unset until the visitor picks one
    pub goal_index: Option<usize>,
    /// Index into [`RiskTolerance::ALL`]
    pub risk_index: Option<usize>,
    pub error_message: Option<String>,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileFormState {
    pub fn new() -> Self {
        Self {
            focused_field: ProfileField::Name,
            name_input: TextInput::new().label("Name").placeholder("Your name"),
            age_input: TextInput::new().label("Age").placeholder("Optional"),
            goal_index: None,
            risk_index: None,
            error_message: None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Whether the focused field takes typed text
    pub fn on_text_field(&self) -> bool {
        matches!(self.focused_field, ProfileField::Name | ProfileField::Age)
    }

    /// Get the currently focused text input (if applicable)
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ProfileField::Name => Some(&mut self.name_input),
            ProfileField::Age => Some(&mut self.age_input),
            _ => None,
        }
    }

    /// Move the focused radio group's selection by `delta`
    pub fn cycle_choice(&mut self, delta: isize) {
        match self.focused_field {
            ProfileField::Goal => {
                self.goal_index = Some(cycle(self.goal_index, delta, PrimaryGoal::ALL.len()))
            }
            ProfileField::Risk => {
                self.risk_index = Some(cycle(self.risk_index, delta, RiskTolerance::ALL.len()))
            }
            _ => {}
        }
    }

    pub fn selected_goal(&self) -> Option<PrimaryGoal> {
        self.goal_index.and_then(|i| PrimaryGoal::ALL.get(i).copied())
    }

    pub fn selected_risk(&self) -> Option<RiskTolerance> {
        self.risk_index.and_then(|i| RiskTolerance::ALL.get(i).copied())
    }

    /// Copy the fields into the session's form data
    pub fn apply(&self, form: &mut FormData) -> Result<(), String> {
        form.name = self.name_input.value().to_string();
        form.primary_goal = self.selected_goal();
        form.risk_tolerance = self.selected_risk();

        let age = self.age_input.value().trim();
        if age.is_empty() {
            form.age = None;
        } else {
            form.age = Some(
                age.parse()
                    .map_err(|_| format!("Age must be a whole number, got '{}'", age))?,
            );
        }
        Ok(())
    }
}

/// Which field is focused in goal setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalField {
    #[default]
    EmergencyFund,
    MonthlySavings,
}

impl GoalField {
    pub fn toggle(self) -> Self {
        match self {
            Self::EmergencyFund => Self::MonthlySavings,
            Self::MonthlySavings => Self::EmergencyFund,
        }
    }
}

/// State for the goal setting step
#[derive(Debug, Clone)]
pub struct GoalFormState {
    pub focused_field: GoalField,
    pub emergency_input: TextInput,
    pub savings_input: TextInput,
    pub error_message: Option<String>,
}

impl Default for GoalFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl GoalFormState {
    pub fn new() -> Self {
        Self {
            focused_field: GoalField::EmergencyFund,
            emergency_input: TextInput::new()
                .label("Emergency Fund Target")
                .placeholder("10000"),
            savings_input: TextInput::new()
                .label("Monthly Savings Amount")
                .placeholder("500"),
            error_message: None,
        }
    }

    pub fn toggle_field(&mut self) {
        self.focused_field = self.focused_field.toggle();
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            GoalField::EmergencyFund => &mut self.emergency_input,
            GoalField::MonthlySavings => &mut self.savings_input,
        }
    }

    /// Copy the amounts into the session's form data; empty means zero
    pub fn apply(&self, form: &mut FormData) -> Result<(), String> {
        form.emergency_fund_target = parse_amount(self.emergency_input.value())?;
        form.monthly_savings = parse_amount(self.savings_input.value())?;
        Ok(())
    }
}

fn parse_amount(raw: &str) -> Result<Money, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Money::zero());
    }
    Money::parse(raw).map_err(|e| e.to_string())
}

fn cycle(current: Option<usize>, delta: isize, len: usize) -> usize {
    match current {
        None if delta < 0 => len - 1,
        None => 0,
        Some(i) => (i as isize + delta).rem_euclid(len as isize) as usize,
    }
}
