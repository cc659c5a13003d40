#![allow(clippy::unwrap_used)]
// Integration tests for `TodoApi` using wiremock.

use serde_json::json;
use url::Url;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use doable_api::{Error, NewTodo, TodoApi, TodoId};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, TodoApi) {
    let server = MockServer::start().await;
    let base = Url::parse(&format!("{}/todos", server.uri())).unwrap();
    let api = TodoApi::with_client(reqwest::Client::new(), base);
    (server, api)
}

// ── fetch_all ───────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_all_parses_collection_in_order() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "title": "a" },
            { "id": 2, "title": "b" }
        ])))
        .mount(&server)
        .await;

    let todos = api.fetch_all().await.unwrap();

    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].title, "a");
    assert_eq!(todos[1].title, "b");
}

#[tokio::test]
async fn fetch_all_accepts_string_ids() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "7", "title": "stringly" }
        ])))
        .mount(&server)
        .await;

    let todos = api.fetch_all().await.unwrap();
    assert_eq!(todos[0].id, TodoId::new(7));
}

#[tokio::test]
async fn fetch_all_fails_on_unparseable_body() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api.fetch_all().await.unwrap_err();
    assert!(
        matches!(err, Error::Deserialization { .. }),
        "expected Deserialization error, got: {err:?}"
    );
}

#[tokio::test]
async fn fetch_all_surfaces_server_status_and_body() {
    let (server, api) = setup().await;

    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = api.fetch_all().await.unwrap_err();
    match err {
        Error::Api { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("expected Api error, got: {other:?}"),
    }
}

// ── create ──────────────────────────────────────────────────────────

#[tokio::test]
async fn create_posts_json_title_and_returns_assigned_item() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({ "title": "buy milk" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "id": 11, "title": "buy milk" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let todo = api.create(&NewTodo::new("buy milk")).await.unwrap();

    assert_eq!(todo.id, TodoId::new(11));
    assert_eq!(todo.title, "buy milk");
}

#[tokio::test]
async fn create_failure_carries_server_text() {
    let (server, api) = setup().await;

    Mock::given(method("POST"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(502).set_body_string("network down"))
        .mount(&server)
        .await;

    let err = api.create(&NewTodo::new("doomed")).await.unwrap_err();
    assert!(
        err.to_string().contains("network down"),
        "error text should include the server body, got: {err}"
    );
}

// ── remove ──────────────────────────────────────────────────────────

#[tokio::test]
async fn remove_deletes_by_id() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    api.remove(TodoId::new(7)).await.unwrap();
}

#[tokio::test]
async fn remove_ignores_confirmation_payload_shape() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deleted": true, "who": "knows", "extra": [1, 2, 3]
        })))
        .mount(&server)
        .await;

    api.remove(TodoId::new(3)).await.unwrap();
}

#[tokio::test]
async fn remove_missing_item_is_an_api_error() {
    let (server, api) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/todos/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&server)
        .await;

    let err = api.remove(TodoId::new(99)).await.unwrap_err();
    assert!(err.is_not_found(), "expected not-found, got: {err:?}");
}
