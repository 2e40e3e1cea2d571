//! Password Value Objects
//!
//! Domain wrappers around `platform::password`.
//!
//! ## Usage
//! ```rust
//! use credential::domain::value_object::password::{PasswordHash, RawPassword};
//! use platform::password::{HashParams, PasswordPolicy};
//!
//! let raw = RawPassword::new("hunter22".to_string(), &PasswordPolicy::default()).unwrap();
//! let hashed = PasswordHash::from_raw(&raw, HashParams::minimal(), None).unwrap();
//! assert!(hashed.verify(&raw, None));
//! ```

use platform::password::{ClearTextPassword, HashParams, HashedPassword, PasswordPolicy};
use std::fmt;

use crate::error::{CredentialError, CredentialResult};

// ============================================================================
// Raw Password (User Input)
// ============================================================================

/// Raw password from user input
///
/// Memory is automatically zeroized when dropped.
pub struct RawPassword(ClearTextPassword);

impl RawPassword {
    /// Create a new raw password, checking it against the length policy
    pub fn new(raw: String, policy: &PasswordPolicy) -> CredentialResult<Self> {
        Ok(Self(ClearTextPassword::new(raw, policy)?))
    }
}

impl fmt::Debug for RawPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPassword").field(&"[REDACTED]").finish()
    }
}

// ============================================================================
// Password Hash (for storage)
// ============================================================================

/// Stored password hash (Argon2id PHC string)
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(HashedPassword);

impl PasswordHash {
    /// Hash a raw password with a fresh salt
    ///
    /// CPU and memory heavy; call from a blocking context.
    pub fn from_raw(
        raw: &RawPassword,
        params: HashParams,
        pepper: Option<&[u8]>,
    ) -> CredentialResult<Self> {
        let hashed = raw
            .0
            .hash(params, pepper)
            .map_err(|e| CredentialError::Internal(e.to_string()))?;

        Ok(Self(hashed))
    }

    /// Restore from the PHC string stored in the database
    pub fn from_db(phc_string: String) -> CredentialResult<Self> {
        let hashed = HashedPassword::from_phc_string(phc_string)
            .map_err(|_| CredentialError::Internal("Invalid password hash in database".to_string()))?;

        Ok(Self(hashed))
    }

    /// Hash that never verifies, priced like a real one
    pub fn decoy(params: HashParams) -> Self {
        Self(HashedPassword::decoy(params))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_phc_string()
    }

    /// Verify a raw password against this hash (constant-time digest compare)
    pub fn verify(&self, raw: &RawPassword, pepper: Option<&[u8]>) -> bool {
        self.0.verify(&raw.0, pepper)
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasswordHash")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(s: &str) -> RawPassword {
        RawPassword::new(s.to_string(), &PasswordPolicy::default()).unwrap()
    }

    #[test]
    fn test_policy_violation_maps_to_invalid_password() {
        let err = RawPassword::new("abc".to_string(), &PasswordPolicy::default()).unwrap_err();
        assert!(matches!(err, CredentialError::InvalidPassword(_)));
    }

    #[test]
    fn test_hash_and_verify() {
        let hashed = PasswordHash::from_raw(&raw("hunter22"), HashParams::minimal(), None).unwrap();
        assert!(hashed.verify(&raw("hunter22"), None));
        assert!(!hashed.verify(&raw("wrong"), None));
    }

    #[test]
    fn test_from_db_roundtrip() {
        let hashed = PasswordHash::from_raw(&raw("hunter22"), HashParams::minimal(), None).unwrap();
        let restored = PasswordHash::from_db(hashed.as_str().to_string()).unwrap();
        assert!(restored.verify(&raw("hunter22"), None));
    }

    #[test]
    fn test_corrupt_db_value_is_internal_error() {
        let err = PasswordHash::from_db("plaintext-password".to_string()).unwrap_err();
        assert!(matches!(err, CredentialError::Internal(_)));
    }

    #[test]
    fn test_debug_redaction() {
        let password = raw("SecretPassword");
        assert!(!format!("{:?}", password).contains("Secret"));

        let hashed = PasswordHash::from_raw(&password, HashParams::minimal(), None).unwrap();
        assert!(format!("{:?}", hashed).contains("[HASH]"));
    }
}
