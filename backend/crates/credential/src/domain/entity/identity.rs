//! Identity Entity
//!
//! Association between a customer id and its password hash.
//! Created once by registration; never updated or deleted.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{
    customer_id::CustomerId, identity_id::IdentityId, password::PasswordHash,
};

/// Identity record
#[derive(Debug, Clone)]
pub struct Identity {
    /// Surrogate primary key
    pub identity_id: IdentityId,
    /// Unique, caller-supplied identifier
    pub customer_id: CustomerId,
    /// Argon2id PHC string
    pub password_hash: PasswordHash,
    /// Assigned by the store at insert
    pub created_at: DateTime<Utc>,
}

/// Identity not yet persisted; the store stamps `created_at`
#[derive(Debug, Clone)]
pub struct NewIdentity {
    pub identity_id: IdentityId,
    pub customer_id: CustomerId,
    pub password_hash: PasswordHash,
}

impl NewIdentity {
    pub fn new(customer_id: CustomerId, password_hash: PasswordHash) -> Self {
        Self {
            identity_id: IdentityId::new(),
            customer_id,
            password_hash,
        }
    }
}
