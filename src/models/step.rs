//! Step identity and per-step state
//!
//! A [`StepState`] moves `NotStarted → Loading → Completed`. A rejected fetch
//! moves `Loading → Failed`, and a retry moves `Failed → Loading`. Nothing
//! moves backwards otherwise; only a wizard reset discards the state.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::payload::Payload;
use crate::error::{SavrError, SavrResult};

/// Number of steps in the demo wizard
pub const STEP_COUNT: usize = 5;

/// The five steps of the demo, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Profile,
    Connection,
    Recommendation,
    Goal,
    Summary,
}

impl StepId {
    pub const ALL: [StepId; STEP_COUNT] = [
        StepId::Profile,
        StepId::Connection,
        StepId::Recommendation,
        StepId::Goal,
        StepId::Summary,
    ];

    /// Zero-based position in the wizard
    pub fn index(self) -> usize {
        self as usize
    }

    /// Step at a position, if in range
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn first() -> Self {
        Self::ALL[0]
    }

    pub fn last() -> Self {
        Self::ALL[STEP_COUNT - 1]
    }

    pub fn is_last(self) -> bool {
        self == Self::last()
    }

    /// The following step, or `None` at the end
    pub fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// The preceding step, or `None` at the start
    pub fn prev(self) -> Option<Self> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// Label shown in the stepper
    pub fn label(self) -> &'static str {
        match self {
            Self::Profile => "Onboarding Quiz",
            Self::Connection => "Bank Connection",
            Self::Recommendation => "AI Portfolio",
            Self::Goal => "Goal Setting",
            Self::Summary => "Dashboard",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where a step is in its fetch lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StepStatus {
    #[default]
    NotStarted,
    Loading,
    Completed,
    /// The last fetch was rejected; the step can be retried
    Failed { reason: String },
}

impl StepStatus {
    pub fn name(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Loading => "loading",
            Self::Completed => "completed",
            Self::Failed { .. } => "failed",
        }
    }
}

/// Local state of a single step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepState {
    status: StepStatus,
    result: Option<Payload>,
}

impl StepState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> &StepStatus {
        &self.status
    }

    /// The fetched payload; only available once completed
    pub fn result(&self) -> Option<&Payload> {
        match self.status {
            StepStatus::Completed => self.result.as_ref(),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == StepStatus::Loading
    }

    pub fn is_completed(&self) -> bool {
        self.status == StepStatus::Completed
    }

    /// Reason for the last failure, if the step is in the failed state
    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            StepStatus::Failed { reason } => Some(reason),
            _ => None,
        }
    }

    /// Whether a fetch may begin (first attempt or retry)
    pub fn can_start(&self) -> bool {
        matches!(
            self.status,
            StepStatus::NotStarted | StepStatus::Failed { .. }
        )
    }

    /// Enter the loading state
    pub fn start(&mut self) -> SavrResult<()> {
        if !self.can_start() {
            return Err(SavrError::InvalidTransition(format!(
                "cannot start a fetch while {}",
                self.status.name()
            )));
        }
        self.status = StepStatus::Loading;
        Ok(())
    }

    /// Accept a payload and complete the step
    pub fn complete(&mut self, payload: Payload) -> SavrResult<()> {
        self.require_loading("complete")?;
        self.result = Some(payload);
        self.status = StepStatus::Completed;
        Ok(())
    }

    /// Record a rejected fetch
    pub fn fail(&mut self, reason: impl Into<String>) -> SavrResult<()> {
        self.require_loading("fail")?;
        self.status = StepStatus::Failed {
            reason: reason.into(),
        };
        Ok(())
    }

    fn require_loading(&self, action: &str) -> SavrResult<()> {
        if self.status != StepStatus::Loading {
            return Err(SavrError::InvalidTransition(format!(
                "cannot {} a step that is {}",
                action,
                self.status.name()
            )));
        }
        Ok(())
    }
}
