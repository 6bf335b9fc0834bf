//! Error types for the todo client.
//!
//! # Design
//! The wire layer keeps a detailed `ApiError` taxonomy for debugging.
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the resource does not exist" from "the server returned an unexpected
//! status." The controller deliberately collapses all of it into a single
//! `RemoteOperationFailed` surface: the UI only ever says which operation
//! failed, never why.

use std::fmt;

/// Errors returned by `TodoClient` parse methods and `RemoteCollection`
/// implementations.
#[derive(Debug)]
pub enum ApiError {
    /// The server returned 404 — the requested todo does not exist.
    NotFound,

    /// The server returned a non-2xx status other than 404.
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound => write!(f, "resource not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// The remote operation a controller failure belongs to. Used to pick the
/// user-facing notification text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Add => write!(f, "Add"),
            Operation::Update => write!(f, "Update"),
            Operation::Delete => write!(f, "Delete"),
        }
    }
}

/// Error surfaced by `TodoListController` mutations.
///
/// The local list is never mutated speculatively, so this error always means
/// the displayed state still equals the last known-good server state.
#[derive(Debug)]
pub enum ControllerError {
    /// A create/update/delete request came back non-success.
    RemoteOperationFailed { op: Operation, source: ApiError },
}

impl ControllerError {
    /// The user-facing notification text, e.g. "Add failed".
    pub fn notification(&self) -> String {
        match self {
            ControllerError::RemoteOperationFailed { op, .. } => format!("{op} failed"),
        }
    }
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControllerError::RemoteOperationFailed { op, source } => {
                write!(f, "{op} failed: {source}")
            }
        }
    }
}

impl std::error::Error for ControllerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ControllerError::RemoteOperationFailed { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_names_the_failed_operation() {
        let err = ControllerError::RemoteOperationFailed {
            op: Operation::Update,
            source: ApiError::HttpError {
                status: 500,
                body: "boom".to_string(),
            },
        };
        assert_eq!(err.notification(), "Update failed");
        assert_eq!(err.to_string(), "Update failed: HTTP 500: boom");
    }

    #[test]
    fn controller_error_exposes_the_api_error_as_source() {
        let err = ControllerError::RemoteOperationFailed {
            op: Operation::Delete,
            source: ApiError::NotFound,
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "resource not found");
    }
}
