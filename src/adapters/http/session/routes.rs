//! Route configuration for session endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_session, sign_in, sign_out, SessionAppState};

/// Creates the session router.
///
/// Routes:
/// - `POST /api/session` - Log in or sign up
/// - `GET /api/session/:id` - Remembered profile
/// - `DELETE /api/session/:id` - Sign out
pub fn session_router(state: SessionAppState) -> Router {
    Router::new()
        .route("/api/session", post(sign_in))
        .route("/api/session/:id", get(get_session).delete(sign_out))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        session_router(SessionAppState::new(Arc::new(InMemoryProfileStore::new())))
    }

    fn sign_in_request(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/session")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn sign_in_creates_session() {
        let response = app()
            .oneshot(sign_in_request(
                json!({ "email": "tara@example.in", "password": "secret1" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let body = json_body(response).await;
        assert_eq!(body["name"], "tara");
        assert!(body.get("password").is_none());
    }

    #[tokio::test]
    async fn invalid_form_is_400_with_field_details() {
        let response = app()
            .oneshot(sign_in_request(json!({ "email": "", "password": "" })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], "VALIDATION_FAILED");
        assert_eq!(body["details"]["email"], "Email is required");
        assert_eq!(body["details"]["password"], "Password is required");
    }

    #[tokio::test]
    async fn sign_in_then_get_then_delete() {
        let app = app();

        let response = app
            .clone()
            .oneshot(sign_in_request(
                json!({ "mode": "sign_up", "email": "dev@example.in", "password": "secret1", "confirm_password": "secret1" }),
            ))
            .await
            .unwrap();
        let id = json_body(response).await["session_id"]
            .as_str()
            .unwrap()
            .to_string();

        let uri = format!("/api/session/{}", id);
        let response = app
            .clone()
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["email"], "dev@example.in");

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(&uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app
            .oneshot(Request::builder().uri(&uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_session_id_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/session/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], "INVALID_FORMAT");
        assert!(body["details"]["session_id"].is_string());
    }
}
