use std::env;
use std::path::PathBuf;
use std::time::Duration;
use crate::errors::AppError;
use crate::store::DEFAULT_STORAGE_KEY;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub data_dir: PathBuf,
    pub storage_key: String,
    /// Artificial delay before loads and saves, zero to disable.
    pub simulated_latency: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let jwt_secret = lookup("JWT_SECRET")
            .ok_or_else(|| AppError::ConfigError("JWT_SECRET must be set".to_string()))?;
        if jwt_secret.is_empty() {
            return Err(AppError::ConfigError("JWT_SECRET cannot be empty".to_string()));
        }

        let simulated_latency = match lookup("SIMULATED_LATENCY_MS") {
            Some(raw) => {
                let millis = raw.trim().parse::<u64>().map_err(|_| {
                    AppError::ConfigError(format!("SIMULATED_LATENCY_MS is not a number: {}", raw))
                })?;
                Duration::from_millis(millis)
            }
            None => Duration::ZERO,
        };

        Ok(AppConfig {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| "127.0.0.1:8080".to_string()),
            jwt_secret,
            data_dir: lookup("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),
            storage_key: lookup("STORAGE_KEY").unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string()),
            simulated_latency,
        })
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
