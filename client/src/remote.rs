//! The remote-collection abstraction consumed by the controller.
//!
//! # Design
//! `TodoListController` talks to the backend only through `RemoteCollection`,
//! so tests can substitute an in-memory fake and assert exactly which
//! requests were issued. `HttpRemote` is the production implementation: it
//! composes the stateless `TodoClient` build/parse pairs with an injected
//! executor that performs the actual HTTP round-trip (ureq in the integration
//! tests, whatever transport the host prefers elsewhere).

use uuid::Uuid;

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::types::{Todo, TodoInput};

/// The backend collection of todo items, seen as four request/response calls.
pub trait RemoteCollection {
    /// Fetch the full item list, in the server's insertion order.
    fn list(&mut self) -> Result<Vec<Todo>, ApiError>;

    /// Create an item; the server assigns the id.
    fn create(&mut self, input: &TodoInput) -> Result<Todo, ApiError>;

    /// Replace an item's text and email, returning the updated item.
    fn update(&mut self, id: Uuid, input: &TodoInput) -> Result<Todo, ApiError>;

    /// Remove an item.
    fn delete(&mut self, id: Uuid) -> Result<(), ApiError>;
}

/// `RemoteCollection` over real HTTP.
///
/// The executor takes a built `HttpRequest` and returns the corresponding
/// `HttpResponse`; status interpretation stays in `TodoClient`.
pub struct HttpRemote<E> {
    client: TodoClient,
    execute: E,
}

impl<E> HttpRemote<E>
where
    E: FnMut(HttpRequest) -> HttpResponse,
{
    pub fn new(base_url: &str, execute: E) -> Self {
        Self {
            client: TodoClient::new(base_url),
            execute,
        }
    }
}

impl<E> RemoteCollection for HttpRemote<E>
where
    E: FnMut(HttpRequest) -> HttpResponse,
{
    fn list(&mut self) -> Result<Vec<Todo>, ApiError> {
        let req = self.client.build_list_todos();
        self.client.parse_list_todos((self.execute)(req))
    }

    fn create(&mut self, input: &TodoInput) -> Result<Todo, ApiError> {
        let req = self.client.build_create_todo(input)?;
        self.client.parse_create_todo((self.execute)(req))
    }

    fn update(&mut self, id: Uuid, input: &TodoInput) -> Result<Todo, ApiError> {
        let req = self.client.build_update_todo(id, input)?;
        self.client.parse_update_todo((self.execute)(req))
    }

    fn delete(&mut self, id: Uuid) -> Result<(), ApiError> {
        let req = self.client.build_delete_todo(id);
        self.client.parse_delete_todo((self.execute)(req))
    }
}
