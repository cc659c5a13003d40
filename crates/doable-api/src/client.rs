// Todo resource HTTP client
//
// Wraps `reqwest::Client` with URL construction against a fixed base
// resource and shared response parsing. Each operation is one
// best-effort round trip; there is no retry, timeout, or caching layer.

use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::error::Error;
use crate::model::{NewTodo, Todo, TodoId};

/// How much of an error body to keep when surfacing a failure.
const BODY_PREVIEW_LEN: usize = 200;

/// Async client for the remote todo collection.
///
/// Cheaply cloneable (`reqwest::Client` is `Arc` internally). The base
/// URL names the collection itself, e.g. `http://localhost:3000/todos`;
/// item URLs are formed by appending `/{id}`.
#[derive(Debug, Clone)]
pub struct TodoApi {
    http: reqwest::Client,
    base_url: Url,
}

impl TodoApi {
    /// Create a client with a default `reqwest::Client`.
    pub fn new(base_url: Url) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("doable/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    /// The collection base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build the URL for a single item: `{base}/{id}`.
    fn item_url(&self, id: TodoId) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}/{id}"))?)
    }

    /// Fetch the entire collection: `GET {base}`.
    pub async fn fetch_all(&self) -> Result<Vec<Todo>, Error> {
        debug!("GET {}", self.base_url);
        let resp = self.http.get(self.base_url.clone()).send().await?;
        parse_json(resp).await
    }

    /// Create a todo: `POST {base}` with a JSON `{title}` body.
    ///
    /// Resolves to the created item, server-assigned id included.
    pub async fn create(&self, new: &NewTodo) -> Result<Todo, Error> {
        debug!("POST {}", self.base_url);
        let resp = self
            .http
            .post(self.base_url.clone())
            .json(new)
            .send()
            .await?;
        parse_json(resp).await
    }

    /// Delete a todo by id: `DELETE {base}/{id}`.
    ///
    /// The server answers with a JSON confirmation payload whose shape
    /// we don't consume — it only has to be JSON.
    pub async fn remove(&self, id: TodoId) -> Result<(), Error> {
        let url = self.item_url(id)?;
        debug!("DELETE {url}");
        let resp = self.http.delete(url).send().await?;
        let _confirmation: serde_json::Value = parse_json(resp).await?;
        Ok(())
    }
}

/// Check the status, then parse the body as JSON.
///
/// Non-success responses surface the status plus a body preview so the
/// caller can show the server's own words to the user.
async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        return Err(Error::Api {
            status: status.as_u16(),
            body: body.chars().take(BODY_PREVIEW_LEN).collect(),
        });
    }

    serde_json::from_str(&body).map_err(|e| Error::Deserialization {
        message: e.to_string(),
        body,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn api(base: &str) -> TodoApi {
        TodoApi::with_client(reqwest::Client::new(), Url::parse(base).unwrap())
    }

    #[test]
    fn item_url_appends_id() {
        let url = api("http://localhost:3000/todos").item_url(TodoId::new(7)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/todos/7");
    }

    #[test]
    fn item_url_tolerates_trailing_slash() {
        let url = api("http://localhost:3000/todos/").item_url(TodoId::new(7)).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/todos/7");
    }
}
