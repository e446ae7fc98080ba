//! User settings for the Savr demo
//!
//! Manages the simulated response delay, failure injection, display
//! preferences and logging.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::paths::SavrPaths;
use crate::error::SavrError;
use crate::services::mock::RESPONSE_DELAY_MS;

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default level filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write logs to a file while the TUI owns the terminal
    #[serde(default = "default_true")]
    pub to_file: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            to_file: true,
        }
    }
}

/// Mock service behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MockSettings {
    /// Endpoints that always reject (e.g. "connection")
    #[serde(default)]
    pub fail_endpoints: Vec<String>,
}

/// User settings for the Savr demo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Simulated latency of every mock response, in milliseconds
    #[serde(default = "default_response_delay_ms")]
    pub response_delay_ms: u64,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// TUI tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Logging preferences
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Mock service behaviour
    #[serde(default)]
    pub mock: MockSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_response_delay_ms() -> u64 {
    RESPONSE_DELAY_MS
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            response_delay_ms: default_response_delay_ms(),
            currency_symbol: default_currency(),
            tick_rate_ms: default_tick_rate_ms(),
            logging: LoggingSettings::default(),
            mock: MockSettings::default(),
        }
    }
}

impl Settings {
    /// Simulated latency as a Duration
    pub fn response_delay(&self) -> Duration {
        Duration::from_millis(self.response_delay_ms)
    }

    /// TUI tick rate as a Duration
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &SavrPaths) -> Result<Self, SavrError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| SavrError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                SavrError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &SavrPaths) -> Result<(), SavrError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| SavrError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| SavrError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.response_delay_ms, 1500);
        assert_eq!(settings.response_delay(), Duration::from_millis(1500));
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.mock.fail_endpoints.is_empty());
        assert!(settings.logging.to_file);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SavrPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.response_delay_ms = 10;
        settings.mock.fail_endpoints = vec!["connection".into()];
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.response_delay_ms, 10);
        assert_eq!(loaded.mock.fail_endpoints, vec!["connection".to_string()]);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"response_delay_ms": 0}"#).unwrap();
        assert_eq!(settings.response_delay_ms, 0);
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.logging.level, "info");
    }

    #[test]
    fn test_tick_rate_has_floor() {
        let settings = Settings {
            tick_rate_ms: 0,
            ..Settings::default()
        };
        assert_eq!(settings.tick_rate(), Duration::from_millis(10));
    }
}
