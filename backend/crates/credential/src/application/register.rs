//! Register Use Case
//!
//! Creates a new identity record for a customer id.

use std::sync::Arc;

use crate::application::config::CredentialConfig;
use crate::domain::entity::identity::NewIdentity;
use crate::domain::repository::{IdentityRepository, InsertOutcome};
use crate::domain::value_object::{
    customer_id::CustomerId,
    password::{PasswordHash, RawPassword},
};
use crate::error::{CredentialError, CredentialResult};

/// Register input
pub struct RegisterInput {
    pub customer_id: String,
    pub password: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: IdentityRepository,
{
    repo: Arc<R>,
    config: Arc<CredentialConfig>,
}

impl<R> RegisterUseCase<R>
where
    R: IdentityRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<CredentialConfig>) -> Self {
        Self { repo, config }
    }

    /// Validate, hash and insert.
    ///
    /// A customer id that is already taken yields
    /// [`CredentialError::DuplicateIdentity`], whatever the password.
    pub async fn execute(&self, input: RegisterInput) -> CredentialResult<()> {
        // Validate before touching the store
        let customer_id = CustomerId::new(input.customer_id)?;
        let raw_password = RawPassword::new(input.password, &self.config.password_policy)?;

        // Argon2 blocks for tens of milliseconds; run it off the async workers
        let config = Arc::clone(&self.config);
        let password_hash = tokio::task::spawn_blocking(move || {
            PasswordHash::from_raw(&raw_password, config.hash_params, config.pepper())
        })
        .await
        .map_err(|e| CredentialError::Internal(format!("Hashing task failed: {}", e)))??;

        let identity = NewIdentity::new(customer_id, password_hash);

        match self.repo.insert(&identity).await? {
            InsertOutcome::Inserted { created_at } => {
                tracing::info!(
                    identity_id = %identity.identity_id,
                    customer_id = %identity.customer_id,
                    %created_at,
                    "Customer registered"
                );
                Ok(())
            }
            InsertOutcome::AlreadyExists => Err(CredentialError::DuplicateIdentity),
        }
    }
}
