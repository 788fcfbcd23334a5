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

/// Top-level configuration for the matching engine and its bundled ingest.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub snapshot: SnapshotConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let snapshot_dir = env::var("SNAPSHOT_DIR").unwrap_or_else(|_| "./snapshot".to_string());
        if snapshot_dir.trim().is_empty() {
            return Err(ConfigError::EmptySnapshotDir);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            snapshot: SnapshotConfig {
                directory: PathBuf::from(snapshot_dir),
            },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Location of the CSV table exports consumed by the snapshot ingest.
#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub directory: PathBuf,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptySnapshotDir,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptySnapshotDir => {
                write!(f, "SNAPSHOT_DIR must not be blank when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
