use std::env;
use std::fmt;

use crate::recommendations::scoring::{DEFAULT_TOP_K, MAX_TOP_K};

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub recommendations: RecommendationDefaults,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let top_k = env::var("RECO_TOP_K")
            .unwrap_or_else(|_| DEFAULT_TOP_K.to_string())
            .parse::<usize>()
            .map_err(|_| ConfigError::InvalidTopK)?;
        if top_k == 0 || top_k > MAX_TOP_K {
            return Err(ConfigError::TopKOutOfRange { value: top_k });
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            recommendations: RecommendationDefaults { top_k },
        })
    }
}

/// Defaults applied when a request does not carry its own limits.
#[derive(Debug, Clone)]
pub struct RecommendationDefaults {
    pub top_k: usize,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidTopK,
    TopKOutOfRange { value: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTopK => write!(f, "RECO_TOP_K must be a valid integer"),
            ConfigError::TopKOutOfRange { value } => {
                write!(f, "RECO_TOP_K must be between 1 and {MAX_TOP_K}, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("RECO_TOP_K");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.recommendations.top_k, DEFAULT_TOP_K);
    }

    #[test]
    fn rejects_top_k_outside_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RECO_TOP_K", "0");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::TopKOutOfRange { value: 0 })
        ));
        env::set_var("RECO_TOP_K", "99");
        assert!(matches!(
            AppConfig::load(),
            Err(ConfigError::TopKOutOfRange { value: 99 })
        ));
        reset_env();
    }

    #[test]
    fn rejects_non_numeric_top_k() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("RECO_TOP_K", "many");
        assert!(matches!(AppConfig::load(), Err(ConfigError::InvalidTopK)));
        reset_env();
    }
}
