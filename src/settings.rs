//! Runtime settings read from the environment (`.env` is honoured by the server binary).

use crate::error::ConfigError;
use axum::http::HeaderValue;
use std::str::FromStr;

/// Which `TriviaRepository` backs the API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            "memory" => Ok(StorageKind::Memory),
            other => Err(ConfigError::UnknownStorage(other.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub storage: StorageKind,
    pub database_url: String,
    pub max_connections: u32,
    pub host: String,
    pub port: u16,
    pub questions_per_page: u32,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<HeaderValue>,
    pub body_limit_bytes: usize,
    pub seed_categories: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            storage: StorageKind::Postgres,
            database_url: "postgres://localhost/trivia".into(),
            max_connections: 5,
            host: "0.0.0.0".into(),
            port: 5000,
            questions_per_page: 10,
            cors_origins: Vec::new(),
            body_limit_bytes: 64 * 1024,
            seed_categories: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut s = Settings::default();
        if let Some(v) = lookup("TRIVIA_STORAGE") {
            s.storage = v.parse()?;
        }
        if let Some(v) = lookup("DATABASE_URL") {
            s.database_url = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            s.max_connections = parse_value("DATABASE_MAX_CONNECTIONS", &v)?;
        }
        if let Some(v) = lookup("HOST") {
            s.host = v;
        }
        if let Some(v) = lookup("PORT") {
            s.port = parse_value("PORT", &v)?;
        }
        if let Some(v) = lookup("QUESTIONS_PER_PAGE") {
            s.questions_per_page = parse_value("QUESTIONS_PER_PAGE", &v)?;
            if s.questions_per_page == 0 {
                return Err(ConfigError::Invalid {
                    key: "QUESTIONS_PER_PAGE",
                    value: v,
                });
            }
        }
        if let Some(v) = lookup("CORS_ORIGINS") {
            s.cors_origins = parse_origins(&v)?;
        }
        if let Some(v) = lookup("BODY_LIMIT_BYTES") {
            s.body_limit_bytes = parse_value("BODY_LIMIT_BYTES", &v)?;
        }
        if let Some(v) = lookup("SEED_CATEGORIES") {
            s.seed_categories = parse_bool("SEED_CATEGORIES", &v)?;
        }
        Ok(s)
    }

    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

fn parse_origins(value: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(|o| {
            HeaderValue::from_str(o).map_err(|_| ConfigError::Invalid {
                key: "CORS_ORIGINS",
                value: o.to_string(),
            })
        })
        .collect()
}

fn parse_bool(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        }),
    }
}
