//! HTTP adapters - REST API implementations.
//!
//! Each domain module has its own HTTP adapter for endpoint exposure.
//! [`api_router`] merges them with the liveness probe.

mod error;
pub mod footprint;
pub mod session;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

pub use error::{ApiError, ErrorResponse};
pub use footprint::{footprint_router, FootprintAppState};
pub use session::{session_router, SessionAppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates the full API router.
pub fn api_router(footprint: FootprintAppState, session: SessionAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(footprint_router(footprint))
        .merge(session_router(session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryProfileStore;
    use crate::domain::emissions::EmissionFactorTable;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        api_router(
            FootprintAppState::new(EmissionFactorTable::canonical(), "https://www.climateos.in"),
            SessionAppState::new(Arc::new(InMemoryProfileStore::new())),
        )
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["status"], "ok");
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::builder().uri("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
