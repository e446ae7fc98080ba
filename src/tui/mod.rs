//! Terminal User Interface module
//!
//! This module provides the interactive demo using ratatui: a landing screen,
//! the wizard modal with its stepper and step bodies, dialogs and toasts.

pub mod app;
pub mod event;
pub mod forms;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
