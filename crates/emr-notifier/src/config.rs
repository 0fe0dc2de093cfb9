use std::env;

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use tracing::debug;

use crate::error::ConfigError;

pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_DB_TABLE: &str = "emr_job_details";
pub const DEFAULT_DB_POOL_SIZE: u32 = 2;

#[derive(Debug, Clone)]
pub struct NotifierConfig {
    pub database: DatabaseConfig,
    /// Region for the EMR Serverless client. Falls back to the AWS default chain.
    pub emr_region: Option<String>,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: Redacted<String>,
    pub name: String,
    pub ssl_mode: PgSslMode,
    pub table: String,
    pub pool_size: u32,
}

impl NotifierConfig {
    /// Load from the process environment, after an optional `.env` file.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err.into()),
        }

        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |var: &'static str| lookup(var).ok_or(ConfigError::Missing(var));

        let port = match lookup("DB_PORT") {
            Some(value) => value.parse::<u16>().map_err(|err| {
                ConfigError::Invalid {
                    var: "DB_PORT",
                    reason: err.to_string(),
                    value,
                }
            })?,
            None => DEFAULT_DB_PORT,
        };

        let ssl_mode = match lookup("DB_SSLMODE") {
            Some(value) => value.parse::<PgSslMode>().map_err(|err| ConfigError::Invalid {
                var: "DB_SSLMODE",
                reason: err.to_string(),
                value,
            })?,
            None => PgSslMode::Disable,
        };

        let table = lookup("DB_TABLE").unwrap_or_else(|| DEFAULT_DB_TABLE.to_string());
        if !is_plain_identifier(&table) {
            return Err(ConfigError::Invalid {
                var: "DB_TABLE",
                value: table,
                reason: "expected a plain SQL identifier".to_string(),
            });
        }

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return Err(ConfigError::Invalid {
                        var: "DB_POOL_SIZE",
                        value,
                        reason: "expected a positive integer".to_string(),
                    });
                }
            },
            None => DEFAULT_DB_POOL_SIZE,
        };

        let database = DatabaseConfig {
            host: required("DB_HOST")?,
            port,
            user: required("DB_USER")?,
            password: lookup("DB_PASSWORD").unwrap_or_default().into(),
            name: required("DB_NAME")?,
            ssl_mode,
            table,
            pool_size,
        };

        Ok(Self {
            database,
            emr_region: lookup("EMR_REGION").filter(|region| !region.is_empty()),
        })
    }
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
            .ssl_mode(self.ssl_mode)
    }
}

/// Table names are spliced into queries, so only `[A-Za-z_][A-Za-z0-9_]*`
/// optionally qualified by a schema is accepted.
fn is_plain_identifier(name: &str) -> bool {
    let valid_part = |part: &str| {
        let mut chars = part.chars();
        matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
    };

    match name.split_once('.') {
        Some((schema, table)) => valid_part(schema) && valid_part(table),
        None => valid_part(name),
    }
}

/// Hides its contents from `Debug` output.
#[derive(Clone, PartialEq, Eq)]
pub struct Redacted<T>(T);

impl<T> From<T> for Redacted<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T> std::ops::Deref for Redacted<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> std::fmt::Debug for Redacted<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}
