//! Path management for the Savr demo
//!
//! Provides XDG-compliant path resolution for configuration and logs.
//!
//! ## Path Resolution Order
//!
//! 1. `SAVR_DEMO_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/savr-demo` or `~/.config/savr-demo`
//! 3. Anywhere else: the platform config directory reported by `directories`

use std::path::PathBuf;

use crate::error::SavrError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "SAVR_DEMO_DIR";

/// Manages all paths used by the Savr demo
#[derive(Debug, Clone)]
pub struct SavrPaths {
    /// Base directory for settings and logs
    base_dir: PathBuf,
}

impl SavrPaths {
    /// Create a new SavrPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, SavrError> {
        let base_dir = if let Ok(custom) = std::env::var(DIR_ENV_VAR) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create SavrPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/savr-demo/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the log directory (~/.config/savr-demo/logs/)
    pub fn log_dir(&self) -> PathBuf {
        self.base_dir.join("logs")
    }

    /// Ensure the base and log directories exist
    pub fn ensure_directories(&self) -> Result<(), SavrError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| SavrError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.log_dir())
            .map_err(|e| SavrError::Io(format!("Failed to create log directory: {}", e)))?;

        Ok(())
    }

    /// Check if settings have been written (via `savr init`)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default base directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, SavrError> {
    if let Ok(config_home) = std::env::var("XDG_CONFIG_HOME") {
        return Ok(PathBuf::from(config_home).join("savr-demo"));
    }
    if let Ok(home) = std::env::var("HOME") {
        return Ok(PathBuf::from(home).join(".config").join("savr-demo"));
    }
    platform_config_dir()
}

/// Resolve the default base directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, SavrError> {
    platform_config_dir()
}

fn platform_config_dir() -> Result<PathBuf, SavrError> {
    directories::BaseDirs::new()
        .map(|dirs| dirs.config_dir().join("savr-demo"))
        .ok_or_else(|| SavrError::Config("Could not determine a config directory".into()))
}
