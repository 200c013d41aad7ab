//! Runtime configuration sourced from the environment.

use std::path::PathBuf;

/// Current deployment environment, read from `APP_ENV`.
pub fn get_environment() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the append-only spending ledger.
    pub ledger_path: PathBuf,
    /// Default forecast horizon in days.
    pub horizon_days: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger_path: PathBuf::from("spending.csv"),
            horizon_days: 30,
        }
    }
}

impl Config {
    /// Build a config from environment variables, falling back to defaults.
    ///
    /// - `KAKEIBO_LEDGER`: ledger file path
    /// - `KAKEIBO_HORIZON_DAYS`: forecast horizon
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let ledger_path = std::env::var("KAKEIBO_LEDGER")
            .map(PathBuf::from)
            .unwrap_or(defaults.ledger_path);
        let horizon_days = std::env::var("KAKEIBO_HORIZON_DAYS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.horizon_days);
        Self {
            ledger_path,
            horizon_days,
        }
    }
}
