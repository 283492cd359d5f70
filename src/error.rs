//! Error types.
//!
//! One top-level [`Error`] wraps a sub-enum per concern so callers can match
//! on the category (e.g. to attach a hint) without string inspection.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Repo(#[from] RepoError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Malformed `<stage>=<env>,<env>,...` token.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SpecError {
    #[error("invalid stage spec '{0}': must be of form <stage>=<env>,<env>... or <env>,<env>...")]
    Format(String),
}

/// Missing or unobtainable credentials.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("{var} is not set")]
    MissingToken { var: &'static str },

    #[error("unable to obtain a Google Cloud access token: {0}")]
    Gcloud(String),
}

/// The target repository could not be determined.
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("unable to determine repo: no github.com origin remote found")]
    NoOrigin,

    #[error("unable to determine repo: {0}")]
    Git(String),
}

/// A remote platform rejected a request or could not be reached.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{service} {method} {url} failed (HTTP {status}): {body}")]
    Status {
        service: &'static str,
        method: String,
        url: String,
        status: u16,
        body: String,
    },

    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("{service} returned an unexpected payload from {url}: {reason}")]
    Decode {
        service: &'static str,
        url: String,
        reason: String,
    },

    #[error("invalid {service} url: {url}")]
    Url { service: &'static str, url: String },
}

/// Configuration file problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
