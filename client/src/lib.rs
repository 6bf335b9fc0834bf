//! Client-side state synchronization for the todo service.
//!
//! # Overview
//! `TodoListController` owns the visible todo list, the pending form input,
//! and the edit cursor, and mediates every mutation through a
//! `RemoteCollection`. The list is only changed after the server confirms a
//! write, so the displayed state always equals the last known-good server
//! state.
//!
//! # Design
//! - The wire layer is split build/parse (host-does-IO pattern): `TodoClient`
//!   produces `HttpRequest` values and consumes `HttpResponse` values without
//!   touching the network, so it stays deterministic and testable.
//! - `RemoteCollection` is the seam between controller and transport;
//!   `HttpRemote` implements it over an injected executor, tests use an
//!   in-memory fake.
//! - The delete confirmation prompt is injected as a `ConfirmDelete`
//!   predicate rather than baked in as a dialog.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod client;
pub mod controller;
pub mod error;
pub mod http;
pub mod remote;
pub mod types;

pub use client::TodoClient;
pub use controller::{ConfirmDelete, PendingInput, Snapshot, TodoListController};
pub use error::{ApiError, ControllerError, Operation};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use remote::{HttpRemote, RemoteCollection};
pub use types::{Todo, TodoInput};
