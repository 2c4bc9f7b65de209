// src/config.rs
use std::env;

pub const MIN_API_SECRET_LEN: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value}")]
    Invalid { key: &'static str, value: String },

    #[error("API_SECRET must be at least 16 characters long")]
    ApiSecretTooShort,

    #[error("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS")]
    PoolBounds,
}

#[derive(Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub api_secret: String,
    /// Public origin used for sitemap links, e.g. `https://example.dev`.
    pub site_url: Option<String>,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub run_migrations: bool,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("site_url", &self.site_url)
            .field("db_max_connections", &self.db_max_connections)
            .field("db_min_connections", &self.db_min_connections)
            .field("run_migrations", &self.run_migrations)
            .finish_non_exhaustive()
    }
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| -> Result<String, ConfigError> {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing(key))
        };

        let database_url = required("DATABASE_URL")?;
        let api_secret = required("API_SECRET")?;
        if api_secret.chars().count() < MIN_API_SECRET_LEN {
            return Err(ConfigError::ApiSecretTooShort);
        }

        let host = lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parse_or(&lookup, "PORT", 8080u16)?;
        let db_max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", 20u32)?;
        let db_min_connections = parse_or(&lookup, "DB_MIN_CONNECTIONS", 2u32)?;

        if db_max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }
        if db_min_connections > db_max_connections {
            return Err(ConfigError::PoolBounds);
        }

        let site_url = lookup("SITE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());

        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", false)?;

        Ok(Self {
            database_url,
            host,
            port,
            api_secret,
            site_url,
            db_max_connections,
            db_min_connections,
            run_migrations,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
    }
}
