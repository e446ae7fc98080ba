//! Configuration module for the Savr demo
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Settings persistence
//! - Mock service and logging preferences

pub mod paths;
pub mod settings;

pub use paths::SavrPaths;
pub use settings::Settings;
