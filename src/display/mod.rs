//! Display formatting for terminal output
//!
//! Provides utilities for formatting wizard state and step results as plain
//! text for the command line.

pub mod steps;

pub use steps::{format_payload, format_step_state, format_stepper};
