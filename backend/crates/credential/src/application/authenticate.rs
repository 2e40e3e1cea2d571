//! Authenticate Use Case
//!
//! Checks a submitted password against the stored identity.
//!
//! Unknown customer ids and wrong passwords both resolve to
//! `verified: false`; only store failures are errors. An unknown id is
//! still run through a decoy verification so both cases take the same time.

use std::sync::Arc;

use crate::application::config::CredentialConfig;
use crate::domain::repository::IdentityRepository;
use crate::domain::value_object::{
    customer_id::CustomerId,
    password::{PasswordHash, RawPassword},
};
use crate::error::{CredentialError, CredentialResult};

/// Authenticate input
pub struct AuthenticateInput {
    pub customer_id: String,
    pub password: String,
}

/// Authenticate output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticateOutput {
    pub verified: bool,
}

impl AuthenticateOutput {
    const REJECTED: Self = Self { verified: false };
}

/// Authenticate use case
pub struct AuthenticateUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    config: Arc<CredentialConfig>,
}

impl<R> AuthenticateUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CredentialConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: AuthenticateInput) -> CredentialResult<AuthenticateOutput> {
        // Input no identity could have been registered with
        let Ok(customer_id) = CustomerId::new(input.customer_id) else {
            tracing::debug!("Authentication rejected: customer id out of bounds");
            return Ok(AuthenticateOutput::REJECTED);
        };
        let Ok(raw_password) = RawPassword::new(input.password, &self.config.password_policy)
        else {
            tracing::debug!(customer_id = %customer_id, "Authentication rejected: password out of bounds");
            return Ok(AuthenticateOutput::REJECTED);
        };

        let identity = self.repo.find_by_customer_id(&customer_id).await?;
        let known = identity.is_some();
        let password_hash = match identity {
            Some(identity) => identity.password_hash,
            None => PasswordHash::decoy(self.config.hash_params),
        };

        let config = Arc::clone(&self.config);
        let matched = tokio::task::spawn_blocking(move || {
            password_hash.verify(&raw_password, config.pepper())
        })
        .await
        .map_err(|e| CredentialError::Internal(format!("Verification task failed: {}", e)))?;

        let verified = known && matched;

        tracing::debug!(customer_id = %customer_id, verified, "Authentication attempt");

        Ok(AuthenticateOutput { verified })
    }
}
