//! Savr demo - an interactive onboarding walkthrough
//!
//! This library implements the "Try Demo" flow of the Savr product page: a
//! five-step wizard (onboarding quiz, bank connection, AI portfolio, goal
//! setting, dashboard) backed by a mock response service with simulated
//! latency.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Form data, step state and response payloads
//! - `services`: The response service contract and its mock
//! - `wizard`: The wizard controller and step views
//! - `display`: Plain-text formatting for the command line
//! - `cli`: Non-interactive command handlers
//! - `tui`: The interactive terminal interface
//! - `logging`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust,ignore
//! use savr::services::MockResponseService;
//! use savr::wizard::WizardSession;
//!
//! let service = MockResponseService::new();
//! let mut session = WizardSession::open();
//! session.advance()?;
//! let outcome = session.submit_and_wait(&service).await?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod wizard;

pub use error::{SavrError, SavrResult};
