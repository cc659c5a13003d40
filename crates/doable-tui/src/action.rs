//! All possible UI actions. Actions are the sole mechanism for state mutation.

use doable_core::{Todo, TodoId};

/// Severity of a blocking modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Local validation problem — the action was never attempted.
    Warning,
    /// A remote call failed.
    Error,
}

/// A blocking modal dialog. While one is up it captures all input until
/// dismissed, so the user cannot miss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Modal {
    pub message: String,
    pub kind: ModalKind,
}

impl Modal {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ModalKind::Warning,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ModalKind::Error,
        }
    }
}

/// Every state transition in the TUI is expressed as an Action.
#[derive(Debug, Clone)]
pub enum Action {
    // ── Lifecycle ──────────────────────────────────────────────────
    Quit,
    Tick,
    Render,
    Resize(u16, u16),

    // ── User events ───────────────────────────────────────────────
    /// The user asked to delete this item (click on its remove control,
    /// or Delete on the selected row).
    RequestDelete(TodoId),

    // ── Async completions (from spawned controller calls) ─────────
    /// Initial load finished.
    Loaded(Vec<Todo>),
    /// Create round trip succeeded; prepend this item.
    Created(Todo),
    /// Delete round trip succeeded for this id.
    Deleted(TodoId),
    /// Create round trip failed; show the detail.
    CreateFailed(String),
    /// Delete round trip failed; show the detail.
    DeleteFailed(String),

    // ── Modal ─────────────────────────────────────────────────────
    ShowModal(Modal),
    DismissModal,
}
