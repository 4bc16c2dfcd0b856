//! Server configuration read from the environment.

use std::str::FromStr;

use life_engine::application::limits::RequestLimits;

use crate::error::AppError;

/// Where boards are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreConfig {
    /// PostgreSQL at `database_url`.
    Postgres {
        /// Connection URL.
        database_url: String,
        /// Pool size.
        max_connections: u32,
    },
    /// Process memory; boards are lost on restart.
    Memory,
}

/// Settings for the API server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Board store selection.
    pub store: StoreConfig,
    /// Per-request work limits.
    pub limits: RequestLimits,
    /// OTLP collector endpoint; span export is off when unset.
    pub otlp_endpoint: Option<String>,
}

impl AppConfig {
    /// Reads the configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but unparsable.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable or `None` when it is unset.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if a variable is present but unparsable.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = RequestLimits::default();

        let store = match lookup("DATABASE_URL").filter(|url| !url.trim().is_empty()) {
            Some(database_url) => StoreConfig::Postgres {
                database_url,
                max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 10)?,
            },
            None => StoreConfig::Memory,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            store,
            limits: RequestLimits {
                max_steps: parse_or(&lookup, "LIFE_MAX_STEPS", defaults.max_steps)?,
                max_cells: parse_or(&lookup, "LIFE_MAX_CELLS", defaults.max_cells)?,
                max_cell_generations: parse_or(
                    &lookup,
                    "LIFE_MAX_CELL_GENERATIONS",
                    defaults.max_cell_generations,
                )?,
            },
            otlp_endpoint: lookup("OTEL_EXPORTER_OTLP_ENDPOINT").filter(|e| !e.trim().is_empty()),
        })
    }

    /// The `HOST:PORT` string to bind.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, AppError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| {
                AppError::Config(format!(
                    "{key} must be a valid {}: {e}",
                    std::any::type_name::<T>()
                ))
            }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> Result<AppConfig, AppError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_use_memory_store() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.store, StoreConfig::Memory);
        assert_eq!(config.limits, RequestLimits::default());
        assert_eq!(config.otlp_endpoint, None);
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
    }

    #[test]
    fn test_database_url_selects_postgres_store() {
        let config = config_from(&[
            ("DATABASE_URL", "postgres://localhost/life"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
        ])
        .unwrap();

        assert_eq!(
            config.store,
            StoreConfig::Postgres {
                database_url: "postgres://localhost/life".to_string(),
                max_connections: 4,
            }
        );
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("LIFE_MAX_STEPS", "50"),
            ("LIFE_MAX_CELLS", "400"),
            ("LIFE_MAX_CELL_GENERATIONS", "20000"),
            ("OTEL_EXPORTER_OTLP_ENDPOINT", "http://collector:4317"),
        ])
        .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(
            config.limits,
            RequestLimits {
                max_steps: 50,
                max_cells: 400,
                max_cell_generations: 20_000,
            }
        );
        assert_eq!(
            config.otlp_endpoint.as_deref(),
            Some("http://collector:4317")
        );
    }

    #[test]
    fn test_invalid_port_is_config_error() {
        let result = config_from(&[("PORT", "not-a-port")]);

        match result {
            Err(AppError::Config(msg)) => assert!(msg.starts_with("PORT must be a valid u16")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_step_limit_is_config_error() {
        assert!(matches!(
            config_from(&[("LIFE_MAX_STEPS", "-1")]),
            Err(AppError::Config(_))
        ));
    }
}
