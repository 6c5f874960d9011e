//! Application configuration structs
//!
//! Loads configuration from environment variables with sensible defaults;
//! a `.env` file is honored when present.

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionConfig,
    pub refresh: RefreshConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Persisted-session configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Directory holding the single session record file
    #[serde(default = "default_session_dir")]
    pub dir: PathBuf,
}

/// Display-refresh tick configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between read-only status recomputations
    #[serde(default = "default_tick_interval_secs")]
    pub tick_interval_secs: u64,
}

// Default value functions
fn default_app_name() -> String {
    "savefood".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_session_dir() -> PathBuf {
    PathBuf::from("./.savefood")
}

fn default_tick_interval_secs() -> u64 {
    60
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every setting has a default; the only failure mode is a value that
    /// is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let tick_interval_secs = match env::var("TICK_INTERVAL_SECS") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("TICK_INTERVAL_SECS", raw))?,
            Err(_) => default_tick_interval_secs(),
        };

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            session: SessionConfig {
                dir: env::var("SESSION_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| default_session_dir()),
            },
            refresh: RefreshConfig { tick_interval_secs },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_is_production() {
        assert!(!Environment::Development.is_production());
        assert!(!Environment::Staging.is_production());
        assert!(Environment::Production.is_production());
    }

    #[test]
    fn test_environment_is_development() {
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_development());
        assert!(!Environment::Production.is_development());
    }

    #[test]
    fn test_default_values() {
        assert_eq!(default_app_name(), "savefood");
        assert_eq!(default_session_dir(), PathBuf::from("./.savefood"));
        assert_eq!(default_tick_interval_secs(), 60);
    }
}
