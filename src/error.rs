// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Network(String),
    Backend(BackendError),
    Capture(String),
}

/// Failures reported by the storefront backend.
/// Used to pick the notification shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// Credentials were rejected (401/403).
    Unauthorized,

    /// The product id is unknown to the backend.
    NotFound,

    /// The backend refused the payload (4xx other than the above).
    Rejected(u16),

    /// The backend failed while handling the request (5xx).
    Server(u16),

    /// The response body could not be decoded.
    InvalidResponse(String),
}

impl BackendError {
    /// Maps an HTTP status code to a backend error.
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => BackendError::Unauthorized,
            404 => BackendError::NotFound,
            500..=599 => BackendError::Server(status),
            _ => BackendError::Rejected(status),
        }
    }

    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            BackendError::Unauthorized => "error-backend-unauthorized",
            BackendError::NotFound => "error-backend-not-found",
            BackendError::Rejected(_) => "error-backend-rejected",
            BackendError::Server(_) => "error-backend-server",
            BackendError::InvalidResponse(_) => "error-backend-invalid-response",
        }
    }
}

impl fmt::Display for BackendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendError::Unauthorized => write!(f, "Unauthorized"),
            BackendError::NotFound => write!(f, "Product not found"),
            BackendError::Rejected(status) => write!(f, "Request rejected ({})", status),
            BackendError::Server(status) => write!(f, "Server error ({})", status),
            BackendError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Network(e) => write!(f, "Network Error: {}", e),
            Error::Backend(e) => write!(f, "Backend Error: {}", e),
            Error::Capture(e) => write!(f, "Capture Error: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<BackendError> for Error {
    fn from(err: BackendError) -> Self {
        Error::Backend(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Error::Backend(BackendError::InvalidResponse(err.to_string()));
        }
        match err.status() {
            Some(status) => Error::Backend(BackendError::from_status(status.as_u16())),
            None => Error::Network(err.to_string()),
        }
    }
}

impl Error {
    /// Returns the i18n key of the notification describing this error.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Error::Io(_) => "error-io",
            Error::Config(_) => "error-config",
            Error::Network(_) => "error-network",
            Error::Backend(e) => e.i18n_key(),
            Error::Capture(_) => "error-capture",
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
