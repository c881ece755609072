//! Route configuration for footprint endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    calculate_business, calculate_individual, list_factors, share_footprint, FootprintAppState,
};

/// Creates the footprint router.
///
/// Routes:
/// - `GET /api/factors` - Canonical factor table
/// - `POST /api/footprint/individual` - Individual estimator
/// - `POST /api/footprint/business` - Scope 1/2/3 estimator
/// - `POST /api/footprint/share` - Share message (only when sharing is enabled)
pub fn footprint_router(state: FootprintAppState) -> Router {
    let router = Router::new()
        .route("/api/factors", get(list_factors))
        .route("/api/footprint/individual", post(calculate_individual))
        .route("/api/footprint/business", post(calculate_business));

    let router = if state.sharing_enabled {
        router.route("/api/footprint/share", post(share_footprint))
    } else {
        router
    };

    router.with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::emissions::EmissionFactorTable;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn state() -> FootprintAppState {
        FootprintAppState::new(EmissionFactorTable::canonical(), "https://www.climateos.in")
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn individual_calculation_returns_breakdown() {
        let response = footprint_router(state())
            .oneshot(post_json(
                "/api/footprint/individual",
                json!({ "electricity_kwh": "200", "petrol_litres": 30 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total_display"], "220.700 kg CO2e");
        assert_eq!(body["chart"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn business_calculation_scales_annual() {
        let response = footprint_router(state())
            .oneshot(post_json(
                "/api/footprint/business",
                json!({ "period": "annual", "diesel_litres": "100", "electricity_kwh": "1000" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["total_kg_co2e"], 12300.0);
        assert_eq!(body["period"], "annual");
    }

    #[tokio::test]
    async fn malformed_body_is_400_with_error_shape() {
        let response = footprint_router(state())
            .oneshot(post_json(
                "/api/footprint/individual",
                json!({ "period": "fortnightly" }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_body(response).await;
        assert_eq!(body["code"], "INVALID_FORMAT");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn verbose_errors_expose_reason() {
        let response = footprint_router(state().with_verbose_errors(true))
            .oneshot(post_json(
                "/api/footprint/individual",
                json!({ "period": "fortnightly" }),
            ))
            .await
            .unwrap();

        let body = json_body(response).await;
        assert!(body["details"]["body"].is_string());
    }

    #[tokio::test]
    async fn share_returns_copy_fallback() {
        let response = footprint_router(state())
            .oneshot(post_json(
                "/api/footprint/share",
                json!({ "audience": "individual", "total_kg": 220.7 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["outcome"], "copy_fallback");
        assert!(body["fallback_text"]
            .as_str()
            .unwrap()
            .starts_with("Share feature not supported in this browser."));
    }

    #[tokio::test]
    async fn share_route_absent_when_disabled() {
        let response = footprint_router(state().with_sharing(false))
            .oneshot(post_json(
                "/api/footprint/share",
                json!({ "audience": "business", "total_kg": 1.0 }),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn factors_are_listed() {
        let response = footprint_router(state())
            .oneshot(
                Request::builder()
                    .uri("/api/factors")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["factors"].as_array().unwrap().len(), 23);
    }
}
