//! HTTP handlers for footprint endpoints.
//!
//! These handlers connect Axum routes to application layer command handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::response::IntoResponse;

use crate::application::handlers::footprint::{
    CalculateBusinessFootprintCommand, CalculateBusinessFootprintHandler,
    CalculateIndividualFootprintCommand, CalculateIndividualFootprintHandler, ListFactorsHandler,
    ShareFootprintCommand, ShareFootprintHandler,
};
use crate::domain::emissions::EmissionFactorTable;
use crate::domain::footprint::{BusinessInputs, IndividualInputs};

use crate::adapters::http::ApiError;
use super::dto::{FactorListResponse, FootprintResponse, ShareRequest};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for footprint endpoints.
///
/// The factor table is process-wide and immutable, so the state is cheap to clone.
#[derive(Clone)]
pub struct FootprintAppState {
    pub table: &'static EmissionFactorTable,
    /// Link placed in share messages.
    pub public_url: String,
    /// Mount `POST /api/footprint/share`.
    pub sharing_enabled: bool,
    /// Include extractor reasons in 400 bodies.
    pub verbose_errors: bool,
}

impl FootprintAppState {
    pub fn new(table: &'static EmissionFactorTable, public_url: impl Into<String>) -> Self {
        Self {
            table,
            public_url: public_url.into(),
            sharing_enabled: true,
            verbose_errors: false,
        }
    }

    pub fn with_sharing(mut self, enabled: bool) -> Self {
        self.sharing_enabled = enabled;
        self
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn individual_handler(&self) -> CalculateIndividualFootprintHandler {
        CalculateIndividualFootprintHandler::new(self.table)
    }

    pub fn business_handler(&self) -> CalculateBusinessFootprintHandler {
        CalculateBusinessFootprintHandler::new(self.table)
    }

    pub fn share_handler(&self) -> ShareFootprintHandler {
        ShareFootprintHandler::new(self.public_url.clone())
    }

    pub fn list_factors_handler(&self) -> ListFactorsHandler {
        ListFactorsHandler::new(self.table)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Query Handlers (GET endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/factors - List the canonical factor table
pub async fn list_factors(State(state): State<FootprintAppState>) -> impl IntoResponse {
    Json(FactorListResponse {
        factors: state.list_factors_handler().handle(),
    })
}

// ════════════════════════════════════════════════════════════════════════════════
// Command Handlers (POST endpoints)
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/footprint/individual - Calculate an individual footprint
pub async fn calculate_individual(
    State(state): State<FootprintAppState>,
    payload: Result<Json<IndividualInputs>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(inputs) = payload.map_err(|r| ApiError::bad_body(r, state.verbose_errors))?;

    let footprint = state
        .individual_handler()
        .handle(CalculateIndividualFootprintCommand { inputs });

    Ok(Json(FootprintResponse::from(footprint)))
}

/// POST /api/footprint/business - Calculate a business footprint
pub async fn calculate_business(
    State(state): State<FootprintAppState>,
    payload: Result<Json<BusinessInputs>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(inputs) = payload.map_err(|r| ApiError::bad_body(r, state.verbose_errors))?;

    let footprint = state
        .business_handler()
        .handle(CalculateBusinessFootprintCommand { inputs });

    Ok(Json(FootprintResponse::from(footprint)))
}

/// POST /api/footprint/share - Build a share message or copy fallback
pub async fn share_footprint(
    State(state): State<FootprintAppState>,
    payload: Result<Json<ShareRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(req) = payload.map_err(|r| ApiError::bad_body(r, state.verbose_errors))?;

    let outcome = state.share_handler().handle(ShareFootprintCommand {
        audience: req.audience,
        period: req.period,
        total_kg: req.total_kg,
        native_share_available: req.native_share_available,
    })?;

    Ok(Json(outcome))
}
