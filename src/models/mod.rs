//! Core data models for the Savr demo
//!
//! This module contains the data structures of the onboarding wizard: the
//! visitor's form data, per-step state, and the payloads a response service
//! returns.

pub mod dashboard;
pub mod form;
pub mod money;
pub mod payload;
pub mod profile;
pub mod step;

pub use dashboard::DashboardSnapshot;
pub use form::{FormData, ValidationError};
pub use money::Money;
pub use payload::{
    Allocation, BankConnection, Goal, GoalPlan, LinkedAccount, Payload, Portfolio,
    ProfileAssessment,
};
pub use profile::{PrimaryGoal, RiskTolerance};
pub use step::{StepId, StepState, StepStatus, STEP_COUNT};
