//! The demo wizard
//!
//! A linear, five-step guided flow. The controller owns all session state;
//! step views describe what each step needs and fetches.

pub mod controller;
pub mod steps;

pub use controller::{FetchOutcome, FetchReply, FetchRequest, FetchTicket, WizardSession};
pub use steps::{view_for, FetchTrigger, StepView};
