//! Error types for bullpen operations.

use thiserror::Error;

/// Webhook provisioning errors from the `stripe listen` step.
#[derive(Error, Debug)]
pub enum WebhookError {
    #[error("no webhook signing secret found in stripe output")]
    SecretNotFound,

    #[error("stripe listen failed: {0}")]
    Listen(String),
}

/// Database connection string errors.
#[derive(Error, Debug)]
pub enum DatabaseUrlError {
    #[error("invalid database URL: {0}")]
    Parse(#[from] url::ParseError),

    #[error("database URL cannot carry a password")]
    PasswordNotSupported,
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error("webhook error: {0}")]
    Webhook(#[from] WebhookError),

    #[error("database URL error: {0}")]
    DatabaseUrl(#[from] DatabaseUrlError),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
