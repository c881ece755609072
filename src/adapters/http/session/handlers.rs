//! HTTP handlers for session endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::adapters::http::ApiError;
use crate::application::handlers::session::{
    GetSessionHandler, GetSessionQuery, SignInCommand, SignInHandler, SignOutCommand,
    SignOutHandler,
};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::Credentials;
use crate::ports::ProfileStore;

use super::dto::SessionResponse;

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for session endpoints.
#[derive(Clone)]
pub struct SessionAppState {
    pub profile_store: Arc<dyn ProfileStore>,
    /// Include extractor reasons in 400 bodies.
    pub verbose_errors: bool,
}

impl SessionAppState {
    pub fn new(profile_store: Arc<dyn ProfileStore>) -> Self {
        Self {
            profile_store,
            verbose_errors: false,
        }
    }

    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }

    pub fn sign_in_handler(&self) -> SignInHandler {
        SignInHandler::new(self.profile_store.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.profile_store.clone())
    }

    pub fn sign_out_handler(&self) -> SignOutHandler {
        SignOutHandler::new(self.profile_store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/session - Log in or sign up
pub async fn sign_in(
    State(state): State<SessionAppState>,
    payload: Result<Json<Credentials>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(credentials) = payload.map_err(|r| ApiError::bad_body(r, state.verbose_errors))?;

    let result = state
        .sign_in_handler()
        .handle(SignInCommand { credentials })
        .await?;

    let body = SessionResponse::from_session(result.session_id, &result.session, result.remembered)
        .ok_or_else(|| DomainError::new(ErrorCode::InternalError, "Sign-in did not open a session"))?;

    Ok((StatusCode::CREATED, Json(body)))
}

/// GET /api/session/:id - Restore a remembered session
pub async fn get_session(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id: SessionId = id.parse().map_err(DomainError::from)?;

    let session = state
        .get_session_handler()
        .handle(GetSessionQuery { session_id })
        .await?;

    let body = SessionResponse::from_session(session_id, &session, true).ok_or_else(|| {
        DomainError::new(ErrorCode::SessionNotFound, "Session not found")
            .with_detail("session_id", session_id.to_string())
    })?;

    Ok(Json(body))
}

/// DELETE /api/session/:id - Sign out
pub async fn sign_out(
    State(state): State<SessionAppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id: SessionId = id.parse().map_err(DomainError::from)?;

    state
        .sign_out_handler()
        .handle(SignOutCommand { session_id })
        .await;

    Ok(StatusCode::NO_CONTENT)
}
