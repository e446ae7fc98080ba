//! CLI command handlers
//!
//! This module contains the implementation of the non-interactive commands,
//! bridging the clap argument parsing with the wizard and service layer.

pub mod respond;
pub mod walkthrough;

pub use respond::{handle_respond_command, RespondArgs};
pub use walkthrough::{handle_walkthrough_command, FinishAction, WalkthroughArgs};
