//! Async HTTP client for a remote todo collection resource.
//!
//! The remote store is a plain JSON collection: `GET {base}` lists every
//! todo, `POST {base}` creates one (the server assigns the id), and
//! `DELETE {base}/{id}` removes one. Each call is a single best-effort
//! round trip — no retries, no caching. `doable-core` maps the error
//! type into user-facing diagnostics.

pub mod client;
pub mod error;
pub mod model;

pub use client::TodoApi;
pub use error::Error;
pub use model::{NewTodo, Todo, TodoId};
