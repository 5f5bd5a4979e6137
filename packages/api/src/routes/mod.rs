//! # Route table
//!
//! [`router`] wires the resource handlers to their paths. Each path lists the
//! methods it serves; any other method gets a bare `405` from axum.
//!
//! | Path | Methods |
//! |------|---------|
//! | `/users` | `POST` |
//! | `/users/{id}` | `GET`, `PUT`, `DELETE` |
//! | `/profiles` | `POST` |
//! | `/profiles/{id}` | `GET` |
//!
//! The by-id routes capture the whole remaining path, and the bare `/users/`
//! and `/profiles/` paths are routed to the same handlers, so a missing or
//! malformed identifier (`/users/`, `/users/1/x`) is answered with `400`
//! rather than `404`. `HEAD` is refused explicitly since axum would otherwise
//! serve it from the `GET` handler.

mod profiles;
mod users;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::Router;

use crate::db::Store;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: impl Store + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

/// Build the application router over `state`.
pub fn router(state: AppState) -> Router {
    let user_by_id = get(users::get_user)
        .head(method_not_allowed)
        .put(users::update_user)
        .delete(users::delete_user);
    let profile_by_id = get(profiles::get_profile).head(method_not_allowed);

    Router::new()
        .route("/users", post(users::create_user))
        .route("/users/", user_by_id.clone())
        .route("/users/{*id}", user_by_id)
        .route("/profiles", post(profiles::create_profile))
        .route("/profiles/", profile_by_id.clone())
        .route("/profiles/{*id}", profile_by_id)
        .with_state(state)
}

async fn method_not_allowed() -> StatusCode {
    StatusCode::METHOD_NOT_ALLOWED
}

#[cfg(test)]
pub(crate) mod test_support {
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use axum::Router;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::{router, AppState};
    use crate::db::MemoryStore;

    /// A router over a fresh [`MemoryStore`], plus a handle on that store.
    pub fn app() -> (Router, MemoryStore) {
        let store = MemoryStore::new();
        (router(AppState::new(store.clone())), store)
    }

    pub struct TestResponse {
        pub status: StatusCode,
        pub content_type: Option<String>,
        pub body: Vec<u8>,
    }

    impl TestResponse {
        pub fn json(&self) -> serde_json::Value {
            serde_json::from_slice(&self.body).unwrap()
        }
    }

    pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> TestResponse {
        let body = match body {
            Some(body) => Body::from(body.to_string()),
            None => Body::empty(),
        };
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(body)
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get("content-type")
            .map(|value| value.to_str().unwrap().to_string());
        let body = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            content_type,
            body: body.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};

    use super::test_support::{app, send};

    #[tokio::test]
    async fn test_head_is_refused_for_existing_rows() {
        let (app, _) = app();
        send(&app, Method::POST, "/users", Some(r#"{"email": "a", "name": "b"}"#)).await;
        send(&app, Method::POST, "/profiles", Some(r#"{"user_id": 1}"#)).await;

        for uri in ["/users/1", "/profiles/1"] {
            let response = send(&app, Method::HEAD, uri, None).await;
            assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED, "HEAD {uri}");
        }
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (app, _) = app();
        let response = send(&app, Method::GET, "/accounts/1", None).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_methods_are_rejected() {
        let (app, _) = app();
        let cases = [
            (Method::GET, "/users"),
            (Method::PUT, "/users"),
            (Method::DELETE, "/users"),
            (Method::POST, "/users/1"),
            (Method::PATCH, "/users/1"),
            (Method::GET, "/profiles"),
            (Method::DELETE, "/profiles"),
            (Method::POST, "/profiles/1"),
            (Method::PUT, "/profiles/1"),
            (Method::DELETE, "/profiles/1"),
            (Method::HEAD, "/users"),
            (Method::HEAD, "/users/1"),
            (Method::HEAD, "/profiles"),
            (Method::HEAD, "/profiles/1"),
        ];

        for (method, uri) in cases {
            let response = send(&app, method.clone(), uri, Some("{}")).await;
            assert_eq!(
                response.status,
                StatusCode::METHOD_NOT_ALLOWED,
                "{method} {uri}"
            );
            assert!(response.body.is_empty());
        }
    }
}
