//! State layer between `doable-api` and the UI.
//!
//! This crate owns the pieces of the MVVM split that are not the view:
//!
//! - **[`TodoStore`]** — the state container. Holds the one `Vec<Todo>`
//!   and at most one change callback; every wholesale replacement of the
//!   list synchronously notifies the subscriber.
//!
//! - **[`Controller`]** — thin async facade over
//!   [`TodoApi`](doable_api::TodoApi): `load()`, `add()` (with the
//!   non-empty-title check), `remove()`. The UI spawns these and applies
//!   the results to the store.
//!
//! - **[`ControllerConfig`]** — where the remote collection lives.

pub mod config;
pub mod controller;
pub mod error;
pub mod store;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::CoreError;
pub use store::TodoStore;

// Re-export the wire types (and the api error, for matching on remote
// failures) at the crate root for ergonomics.
pub use doable_api::{Error as ApiError, NewTodo, Todo, TodoId};
