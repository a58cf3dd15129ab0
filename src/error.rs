//! Error types shared by every adapter.
//!
//! Variants split along the boundaries that matter to callers: bad input
//! (caught before any external call), failures reported by an external
//! service or subprocess, and domain conditions like a digest mismatch
//! that deserve their own message. Everything implements [`std::error::Error`]
//! so commands can bubble through `anyhow` at the top level.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpsError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("broker error: {0}")]
    Broker(String),

    #[error("cache error: {0}")]
    Cache(String),

    #[error("object storage error: {0}")]
    ObjectStore(String),

    #[error("secret store error: {0}")]
    SecretStore(String),

    #[error("container engine error: {0}")]
    Container(String),

    #[error("crypto error: {0}")]
    Crypto(String),

    #[error("chart error: {0}")]
    Chart(String),

    #[error("Unknown time zone '{0}'")]
    UnknownTimezone(String),

    #[error("could not parse date/time '{0}'")]
    DateParse(String),

    #[error("column '{0}' not found")]
    ColumnNotFound(String),

    #[error("unsupported {what} '{value}'")]
    Unsupported { what: &'static str, value: String },

    #[error("Token verification failed: token is invalid or expired")]
    TokenInvalid,

    #[error("digest mismatch for {path}: expected {expected}, got {actual}")]
    DigestMismatch {
        path: String,
        expected: String,
        actual: String,
    },
}

impl From<ureq::Error> for OpsError {
    fn from(err: ureq::Error) -> Self {
        OpsError::Http(err.to_string())
    }
}

impl From<redis::RedisError> for OpsError {
    fn from(err: redis::RedisError) -> Self {
        OpsError::Cache(err.to_string())
    }
}

impl From<rdkafka::error::KafkaError> for OpsError {
    fn from(err: rdkafka::error::KafkaError) -> Self {
        OpsError::Broker(err.to_string())
    }
}

impl From<bollard::errors::Error> for OpsError {
    fn from(err: bollard::errors::Error) -> Self {
        OpsError::Container(err.to_string())
    }
}

impl From<openssl::error::ErrorStack> for OpsError {
    fn from(err: openssl::error::ErrorStack) -> Self {
        OpsError::Crypto(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, OpsError>;
