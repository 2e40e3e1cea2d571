//! Row Types for sqlx mapping
//!
//! Shared by every SQL backend; `FromRow` is derived generically over the
//! driver.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entity::identity::Identity;
use crate::domain::value_object::{
    customer_id::CustomerId, identity_id::IdentityId, password::PasswordHash,
};
use crate::error::CredentialResult;

#[derive(sqlx::FromRow)]
pub(crate) struct IdentityRow {
    identity_id: Uuid,
    customer_id: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl IdentityRow {
    pub(crate) fn into_identity(self) -> CredentialResult<Identity> {
        Ok(Identity {
            identity_id: IdentityId::from_uuid(self.identity_id),
            customer_id: CustomerId::from_db(self.customer_id),
            password_hash: PasswordHash::from_db(self.password_hash)?,
            created_at: self.created_at,
        })
    }
}
