//! Error types for signet.
//!
//! Each failure domain gets its own enum; [`Error`] wraps them so library
//! callers can match on the domain and the CLI can attach hints.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::profile::SigningKey;
use crate::core::types::VariantName;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Signing(#[from] SigningError),

    #[error(transparent)]
    Properties(#[from] PropertiesError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

/// Errors from `signet.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read signet.toml: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse signet.toml: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to serialize signet.toml: {0}")]
    Serialize(#[source] toml::ser::Error),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("{} already exists (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),
}

/// Errors resolving release-signing credentials.
#[derive(Error, Debug)]
pub enum SigningError {
    /// The properties file does not exist.
    ///
    /// Loading degrades to an absent profile; this only surfaces when a
    /// caller demands a profile.
    #[error("signing properties not found: {}", .0.display())]
    MissingConfigFile(PathBuf),

    #[error("incomplete signing config in {}: missing {}", .path.display(), join_keys(.missing))]
    IncompleteSigningConfig {
        path: PathBuf,
        missing: Vec<SigningKey>,
    },

    #[error("keystore not found: {}", .path.display())]
    KeystoreNotFound { path: PathBuf },

    #[error("{variant} build requires signing but no signing properties were found at {}", .path.display())]
    SigningRequired { variant: VariantName, path: PathBuf },
}

/// Errors reading a `.properties` file.
#[derive(Error, Debug)]
pub enum PropertiesError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed escape on line {line}: {reason}")]
    MalformedEscape { line: usize, reason: String },
}

fn join_keys(keys: &[SigningKey]) -> String {
    keys.iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, Error>;
