use thiserror::Error;

/// Errors surfaced by the [`Controller`](crate::Controller).
///
/// `EmptyTitle` is the one purely local failure — it blocks the action
/// before any request is made. Everything else is a remote failure
/// passed through from `doable-api`.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The submitted title trimmed to the empty string.
    #[error("title must not be empty")]
    EmptyTitle,

    /// The remote store rejected or failed the request.
    #[error(transparent)]
    Api(#[from] doable_api::Error),
}
