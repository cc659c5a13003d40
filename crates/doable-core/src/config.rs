//! Controller configuration.

use url::Url;

/// Default location of the remote todo collection.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/todos";

/// Where the remote todo collection lives.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Base URL of the collection resource, e.g.
    /// `http://localhost:3000/todos`.
    pub base_url: Url,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
        }
    }
}

impl ControllerConfig {
    pub fn new(base_url: Url) -> Self {
        Self { base_url }
    }
}
