//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use chrono::{DateTime, Utc};

use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::value_object::customer_id::CustomerId;
use crate::error::CredentialResult;

/// Result of an insert-if-absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Row written; carries the store-assigned creation time
    Inserted { created_at: DateTime<Utc> },
    /// Another record already holds the customer id; nothing was written
    AlreadyExists,
}

/// Identity repository trait
///
/// Uniqueness of `customer_id` must be enforced by the storage engine.
/// `insert` is a single atomic statement, never a lookup followed by a write.
#[trait_variant::make(IdentityRepository: Send)]
pub trait LocalIdentityRepository {
    /// Find identity by customer id
    async fn find_by_customer_id(&self, customer_id: &CustomerId)
    -> CredentialResult<Option<Identity>>;

    /// Insert identity unless its customer id is already taken
    async fn insert(&self, identity: &NewIdentity) -> CredentialResult<InsertOutcome>;

    /// Round trip to the store (readiness probe)
    async fn health_check(&self) -> CredentialResult<()>;
}
