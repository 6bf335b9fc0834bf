//! Domain DTOs for the todo API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently,
//! so the client crate never depends on Axum internals. Integration tests
//! catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: Uuid,
    pub text: String,
    pub email: String,
}

/// Request payload for creating or updating a todo.
///
/// Create and update share one shape: an update is a full replacement of
/// `text` and `email`, never a partial patch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoInput {
    pub text: String,
    pub email: String,
}

impl TodoInput {
    pub fn new(text: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            email: email.into(),
        }
    }
}
