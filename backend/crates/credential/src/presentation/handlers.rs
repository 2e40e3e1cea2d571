//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::CredentialConfig;
use crate::application::{AuthenticateInput, AuthenticateUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::IdentityRepository;
use crate::error::CredentialResult;
use crate::presentation::dto::{AuthenticateResponse, CredentialsRequest};

/// Shared state for credential handlers
#[derive(Clone)]
pub struct CredentialAppState<R>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<CredentialConfig>,
}

// ============================================================================
// Register
// ============================================================================

/// POST /createuser
pub async fn register<R>(
    State(state): State<CredentialAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> CredentialResult<StatusCode>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let use_case = RegisterUseCase::new(state.repo.clone(), state.config.clone());

    let input = RegisterInput {
        customer_id: req.customer_id,
        password: req.password,
    };

    use_case.execute(input).await?;

    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Authenticate
// ============================================================================

/// POST /authuser
pub async fn authenticate<R>(
    State(state): State<CredentialAppState<R>>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> CredentialResult<Json<AuthenticateResponse>>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let Json(req) = payload?;
    let use_case = AuthenticateUseCase::new(state.repo.clone(), state.config.clone());

    let input = AuthenticateInput {
        customer_id: req.customer_id,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthenticateResponse::new(output.verified)))
}

// ============================================================================
// Probes
// ============================================================================

/// GET /health
pub async fn health() -> &'static str {
    "ok"
}

/// GET /ready
///
/// 503 when the store cannot be reached.
pub async fn ready<R>(State(state): State<CredentialAppState<R>>) -> CredentialResult<&'static str>
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    state.repo.health_check().await?;
    Ok("ready")
}
