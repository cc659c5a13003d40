// ── Controller facade ──
//
// Thin async facade over the remote store client. The UI spawns these
// operations and applies the results to the TodoStore itself; nothing
// here retries, sequences, or cancels — each call is one round trip,
// exactly like the client underneath.

use doable_api::{NewTodo, Todo, TodoApi, TodoId};
use tracing::{debug, info};

use crate::config::ControllerConfig;
use crate::error::CoreError;

/// The mutation/query entry point for UI consumers.
///
/// Cheaply cloneable — every spawned task gets its own handle.
#[derive(Debug, Clone)]
pub struct Controller {
    api: TodoApi,
}

impl Controller {
    /// Create a controller from configuration.
    pub fn new(config: &ControllerConfig) -> Result<Self, CoreError> {
        let api = TodoApi::new(config.base_url.clone()).map_err(CoreError::Api)?;
        Ok(Self { api })
    }

    /// Create a controller over an existing [`TodoApi`].
    pub fn with_api(api: TodoApi) -> Self {
        Self { api }
    }

    /// Fetch the current remote list.
    pub async fn load(&self) -> Result<Vec<Todo>, CoreError> {
        let todos = self.api.fetch_all().await?;
        debug!(count = todos.len(), "loaded todos");
        Ok(todos)
    }

    /// Create a todo from a user-entered title.
    ///
    /// Titles that trim to empty are rejected locally with
    /// [`CoreError::EmptyTitle`] — no request is made. The title is sent
    /// as entered; only the emptiness check looks at the trimmed form.
    pub async fn add(&self, title: &str) -> Result<Todo, CoreError> {
        if title.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        let todo = self.api.create(&NewTodo::new(title)).await?;
        info!(id = %todo.id, "created todo");
        Ok(todo)
    }

    /// Delete a todo by id.
    pub async fn remove(&self, id: TodoId) -> Result<(), CoreError> {
        self.api.remove(id).await?;
        info!(%id, "removed todo");
        Ok(())
    }
}
