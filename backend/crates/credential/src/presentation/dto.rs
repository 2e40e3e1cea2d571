//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Credentials (register and authenticate share the request body)
// ============================================================================

/// Customer id + password request
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    /// Also accepted as `customerid`
    #[serde(alias = "customerid")]
    pub customer_id: String,
    pub password: String,
}

impl fmt::Debug for CredentialsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsRequest")
            .field("customer_id", &self.customer_id)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Authenticate
// ============================================================================

/// Authenticate response
///
/// `userCreated` carries the same value for clients of the earlier login API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticateResponse {
    pub verified: bool,
    pub user_created: bool,
}

impl AuthenticateResponse {
    pub fn new(verified: bool) -> Self {
        Self {
            verified,
            user_created: verified,
        }
    }
}
