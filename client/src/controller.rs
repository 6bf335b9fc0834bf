//! State synchronization between the visible todo list and the remote
//! collection.
//!
//! # Design
//! `TodoListController` owns the in-memory list, the pending form input, and
//! the edit cursor; every mutation goes through the injected
//! `RemoteCollection` and the list is only changed after the server confirms.
//! There is no optimistic insert: a failed request always leaves the
//! displayed state equal to the last known-good server state.
//!
//! The controller requires `&mut self` for every operation, which encodes the
//! single-threaded, event-serialized model: one user event resolves fully
//! before the next one can start mutating state.
//!
//! Each operation returns a `Snapshot` of the new state so the caller can
//! re-render deterministically instead of relying on implicit change
//! notification.

use uuid::Uuid;

use crate::error::{ApiError, ControllerError, Operation};
use crate::remote::RemoteCollection;
use crate::types::{Todo, TodoInput};

/// Transient text/email values bound to the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingInput {
    pub text: String,
    pub email: String,
}

impl PendingInput {
    fn clear(&mut self) {
        self.text.clear();
        self.email.clear();
    }
}

/// The controller's full observable state after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub todos: Vec<Todo>,
    pub pending: PendingInput,
    /// Id of the item being edited, or `None` in add mode. The UI uses this
    /// to pick the "Add" vs "Update" label and show the Cancel action.
    pub edit_cursor: Option<Uuid>,
}

/// The blocking yes/no prompt shown before a delete, abstracted as an
/// injected predicate. Returning `false` aborts the delete before any
/// request is issued.
pub trait ConfirmDelete {
    fn confirm_delete(&mut self, todo: &Todo) -> bool;
}

impl<F> ConfirmDelete for F
where
    F: FnMut(&Todo) -> bool,
{
    fn confirm_delete(&mut self, todo: &Todo) -> bool {
        self(todo)
    }
}

/// Owns the todo list and edit state, and keeps both consistent with the
/// remote collection across create/read/update/delete.
pub struct TodoListController<R, C> {
    remote: R,
    confirm: C,
    todos: Vec<Todo>,
    pending: PendingInput,
    edit_cursor: Option<Uuid>,
}

impl<R, C> TodoListController<R, C>
where
    R: RemoteCollection,
    C: ConfirmDelete,
{
    pub fn new(remote: R, confirm: C) -> Self {
        Self {
            remote,
            confirm,
            todos: Vec::new(),
            pending: PendingInput::default(),
            edit_cursor: None,
        }
    }

    /// One-time initial load. Replaces the local list with the server's
    /// sequence as-is; on failure the list stays empty and the error is only
    /// logged, so the app still renders (best-effort soft start).
    pub fn load(&mut self) -> Snapshot {
        match self.remote.list() {
            Ok(todos) => self.todos = todos,
            Err(e) => {
                tracing::warn!(error = %e, "initial todo load failed, starting empty");
                self.todos.clear();
            }
        }
        self.snapshot()
    }

    /// Single form entry point: adds in add mode, updates the cursored item
    /// in edit mode.
    pub fn submit(&mut self, text: &str, email: &str) -> Result<Snapshot, ControllerError> {
        match self.edit_cursor {
            Some(id) => self.update(id, text, email),
            None => self.add(text, email),
        }
    }

    /// Enter edit mode for the item with `id`, copying its current values
    /// into the form. Unknown ids are ignored. No request is issued.
    pub fn start_edit(&mut self, id: Uuid) -> Snapshot {
        if let Some(todo) = self.todos.iter().find(|t| t.id == id) {
            self.pending.text = todo.text.clone();
            self.pending.email = todo.email.clone();
            self.edit_cursor = Some(id);
        }
        self.snapshot()
    }

    /// Leave edit mode and clear the form. Idempotent; no request is issued.
    pub fn cancel_edit(&mut self) -> Snapshot {
        self.edit_cursor = None;
        self.pending.clear();
        self.snapshot()
    }

    /// Delete the item with `id` after the injected confirmation approves.
    /// A declined confirmation issues no request and changes nothing.
    pub fn delete(&mut self, id: Uuid) -> Result<Snapshot, ControllerError> {
        let Some(todo) = self.todos.iter().find(|t| t.id == id).cloned() else {
            return Ok(self.snapshot());
        };
        if !self.confirm.confirm_delete(&todo) {
            return Ok(self.snapshot());
        }
        self.remote.delete(id).map_err(|e| remote_failed(Operation::Delete, e))?;
        self.todos.retain(|t| t.id != id);
        tracing::debug!(%id, "todo deleted");
        Ok(self.snapshot())
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn pending(&self) -> &PendingInput {
        &self.pending
    }

    pub fn edit_cursor(&self) -> Option<Uuid> {
        self.edit_cursor
    }

    pub fn is_editing(&self) -> bool {
        self.edit_cursor.is_some()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            todos: self.todos.clone(),
            pending: self.pending.clone(),
            edit_cursor: self.edit_cursor,
        }
    }

    /// Create path. Empty text or email is a silent no-op: no request, and
    /// neither the list nor the pending input is touched.
    fn add(&mut self, text: &str, email: &str) -> Result<Snapshot, ControllerError> {
        if text.is_empty() || email.is_empty() {
            return Ok(self.snapshot());
        }
        self.pending.text = text.to_string();
        self.pending.email = email.to_string();
        let input = TodoInput::new(text, email);
        let created = self
            .remote
            .create(&input)
            .map_err(|e| remote_failed(Operation::Add, e))?;
        tracing::debug!(id = %created.id, "todo created");
        // Newest first; the rest of the list keeps server order.
        self.todos.insert(0, created);
        self.pending.clear();
        Ok(self.snapshot())
    }

    /// Update path. Unlike add there is no presence check: the source app
    /// allows overwriting a field with an empty string while editing, and
    /// that behavior is kept.
    fn update(&mut self, id: Uuid, text: &str, email: &str) -> Result<Snapshot, ControllerError> {
        self.pending.text = text.to_string();
        self.pending.email = email.to_string();
        let input = TodoInput::new(text, email);
        let updated = self
            .remote
            .update(id, &input)
            .map_err(|e| remote_failed(Operation::Update, e))?;
        if let Some(slot) = self.todos.iter_mut().find(|t| t.id == id) {
            *slot = updated;
        }
        tracing::debug!(%id, "todo updated");
        self.edit_cursor = None;
        self.pending.clear();
        Ok(self.snapshot())
    }
}

fn remote_failed(op: Operation, source: ApiError) -> ControllerError {
    ControllerError::RemoteOperationFailed { op, source }
}
