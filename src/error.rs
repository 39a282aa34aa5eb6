//! Typed errors for every failure the client can surface.

use serde_json::Value;
use thiserror::Error;

/// Unified error type. Auth and validation failures are raised before any
/// network activity; service errors carry the HTTP status of the failed call.
#[derive(Error, Debug)]
pub enum Error {
    #[error("auth: {0}")]
    Auth(String),
    #[error("validation: {0}")]
    Validation(String),
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("service error (status {code}): {message}")]
    Service {
        message: String,
        more_info: Option<Value>,
        code: u16,
    },
}

impl Error {
    /// Service error with the raw response body attached as detail.
    pub(crate) fn service_raw(message: &str, raw_body: String, code: u16) -> Self {
        Error::Service {
            message: message.to_string(),
            more_info: Some(Value::String(raw_body)),
            code,
        }
    }

    /// HTTP status carried by a service error, if this is one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { code, .. } => Some(*code),
            _ => None,
        }
    }
}
