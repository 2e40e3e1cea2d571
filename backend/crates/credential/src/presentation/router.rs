//! Credential Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::CredentialConfig;
use crate::domain::repository::IdentityRepository;
use crate::presentation::handlers::{self, CredentialAppState};

/// Create the credential router for any repository implementation
pub fn credential_router<R>(repo: R, config: CredentialConfig) -> Router
where
    R: IdentityRepository + Clone + Send + Sync + 'static,
{
    let state = CredentialAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/createuser", post(handlers::register::<R>))
        .route("/authuser", post(handlers::authenticate::<R>))
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready::<R>))
        .with_state(state)
}
