use crate::complexity::{KnowledgeArea as Area, PrimaryWeights};
use std::env;
use std::fmt;
use std::path::PathBuf;

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
    pub scoring: ScoringConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = PrimaryWeights::default();
        let weights = PrimaryWeights::new(
            weight_var("APP_WEIGHT_RESOURCES", defaults.weight(Area::Resources))?,
            weight_var("APP_WEIGHT_COSTS", defaults.weight(Area::Costs))?,
            weight_var("APP_WEIGHT_QUALITY", defaults.weight(Area::Quality))?,
            weight_var("APP_WEIGHT_SCOPE", defaults.weight(Area::Scope))?,
        )
        .map_err(|source| ConfigError::InvalidWeights {
            detail: source.to_string(),
        })?;

        let rubric_path = env::var("APP_RUBRIC_PATH")
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            scoring: ScoringConfig {
                weights,
                rubric_path,
            },
        })
    }
}

fn weight_var(key: &'static str, default: f64) -> Result<f64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|_| ConfigError::InvalidWeight { key, value: raw }),
        Err(_) => Ok(default),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Engine tuning: aggregation weights and an optional catalog override.
#[derive(Debug, Clone)]
pub struct ScoringConfig {
    pub weights: PrimaryWeights,
    pub rubric_path: Option<PathBuf>,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWeight { key: &'static str, value: String },
    InvalidWeights { detail: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWeight { key, value } => {
                write!(f, "{key} must be a number, got '{value}'")
            }
            ConfigError::InvalidWeights { detail } => {
                write!(f, "primary weights rejected: {detail}")
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
        env::remove_var("APP_WEIGHT_RESOURCES");
        env::remove_var("APP_WEIGHT_COSTS");
        env::remove_var("APP_WEIGHT_QUALITY");
        env::remove_var("APP_WEIGHT_SCOPE");
        env::remove_var("APP_RUBRIC_PATH");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.scoring.weights, PrimaryWeights::default());
        assert!(config.scoring.rubric_path.is_none());
    }

    #[test]
    fn reads_weight_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "ci");
        env::set_var("APP_WEIGHT_SCOPE", "0.3");
        env::set_var("APP_RUBRIC_PATH", "rubrics/custom.json");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        assert!((config.scoring.weights.weight(Area::Scope) - 0.3).abs() < f64::EPSILON);
        assert_eq!(
            config.scoring.rubric_path,
            Some(PathBuf::from("rubrics/custom.json"))
        );
        reset_env();
    }

    #[test]
    fn rejects_unparseable_weight() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_WEIGHT_COSTS", "heavy");
        let err = AppConfig::load().expect_err("weight must be numeric");
        assert!(matches!(
            err,
            ConfigError::InvalidWeight {
                key: "APP_WEIGHT_COSTS",
                ..
            }
        ));
        reset_env();
    }

    #[test]
    fn rejects_all_zero_weights() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        for key in [
            "APP_WEIGHT_RESOURCES",
            "APP_WEIGHT_COSTS",
            "APP_WEIGHT_QUALITY",
            "APP_WEIGHT_SCOPE",
        ] {
            env::set_var(key, "0");
        }
        let err = AppConfig::load().expect_err("zero weights rejected");
        assert!(matches!(err, ConfigError::InvalidWeights { .. }));
        reset_env();
    }
}
