use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),

    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid value {value:?} for {var}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Error executing database query: {0}")]
    Db(#[from] sqlx::Error),
}

#[derive(Error, Debug)]
pub enum DiagnosticsError {
    #[error("GetJobRun request failed: {0}")]
    Request(String),
}
