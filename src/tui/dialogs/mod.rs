//! Dialog modules for the TUI
//!
//! Modal dialogs drawn over the demo

pub mod confirm;
pub mod help;
