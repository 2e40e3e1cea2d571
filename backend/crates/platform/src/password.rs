//! Password Hashing and Verification
//!
//! Password handling for the credential store:
//! - Argon2id hashing (memory-hard, recommended by OWASP)
//! - Per-hash random salt embedded in the PHC output string
//! - Zeroization of clear text on drop
//! - Constant-time verification (delegated to `argon2`)
//!
//! ## Security Features
//! - Memory-hard hashing prevents GPU/ASIC attacks
//! - Zeroization prevents memory inspection attacks
//! - Optional pepper, passed to Argon2 as its secret input
//! - Decoy hash so lookups of unknown identities cost the same as real ones

use std::fmt;

use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version,
    password_hash::SaltString,
};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

// ============================================================================
// Constants
// ============================================================================

/// Default minimum password length (in characters)
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 4;

/// Default maximum password length (in characters)
pub const DEFAULT_MAX_PASSWORD_LENGTH: usize = 200;

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },

    /// Password is too long
    #[error("Password must be at most {max} characters (got {actual})")]
    TooLong { max: usize, actual: usize },

    /// Policy itself is unusable (min of zero, or min above max)
    #[error("Invalid password length bounds: {min}..={max}")]
    InvalidBounds { min: usize, max: usize },
}

/// Password hashing errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Argon2 cost parameters rejected
    #[error("Invalid Argon2 parameters: {0}")]
    InvalidParams(String),

    /// Invalid hash format
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Policy and cost parameters
// ============================================================================

/// Accepted password length range, counted in Unicode code points of the
/// password exactly as submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordPolicy {
    min_length: usize,
    max_length: usize,
}

impl PasswordPolicy {
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, PasswordPolicyError> {
        if min_length == 0 || min_length > max_length {
            return Err(PasswordPolicyError::InvalidBounds {
                min: min_length,
                max: max_length,
            });
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_PASSWORD_LENGTH,
            max_length: DEFAULT_MAX_PASSWORD_LENGTH,
        }
    }
}

/// Argon2id cost parameters used for new hashes
///
/// Verification always uses the parameters embedded in the stored hash,
/// so changing these only affects hashes produced afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashParams {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Number of passes
    pub iterations: u32,
    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for HashParams {
    /// OWASP recommended Argon2id parameters: m=19456 (19 MiB), t=2, p=1
    fn default() -> Self {
        Self {
            memory_kib: Params::DEFAULT_M_COST,
            iterations: Params::DEFAULT_T_COST,
            parallelism: Params::DEFAULT_P_COST,
        }
    }
}

impl HashParams {
    /// Smallest cost Argon2 accepts. Only suitable for tests.
    pub fn minimal() -> Self {
        Self {
            memory_kib: Params::MIN_M_COST,
            iterations: Params::MIN_T_COST,
            parallelism: Params::MIN_P_COST,
        }
    }

    fn to_params(self) -> Result<Params, PasswordHashError> {
        Params::new(self.memory_kib, self.iterations, self.parallelism, None)
            .map_err(|e| PasswordHashError::InvalidParams(e.to_string()))
    }

    fn hasher(self, pepper: Option<&[u8]>) -> Result<Argon2<'_>, PasswordHashError> {
        let params = self.to_params()?;
        match pepper {
            Some(secret) => Argon2::new_with_secret(secret, Algorithm::Argon2id, Version::V0x13, params)
                .map_err(|e| PasswordHashError::InvalidParams(e.to_string())),
            None => Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params)),
        }
    }
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
///
/// ## Examples
/// ```rust
/// use platform::password::{ClearTextPassword, HashParams, PasswordPolicy};
///
/// let password = ClearTextPassword::new("hunter22".to_string(), &PasswordPolicy::default()).unwrap();
/// let hashed = password.hash(HashParams::minimal(), None).unwrap();
/// assert!(hashed.verify(&password, None));
/// ```
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password, checking it against `policy`
    ///
    /// The submitted bytes are kept verbatim: no normalization, no trimming.
    /// Look-alike passwords are different passwords.
    pub fn new(raw: String, policy: &PasswordPolicy) -> Result<Self, PasswordPolicyError> {
        let mut raw = raw;
        let char_count = raw.chars().count();

        if char_count < policy.min_length {
            raw.zeroize();
            return Err(PasswordPolicyError::TooShort {
                min: policy.min_length,
                actual: char_count,
            });
        }

        if char_count > policy.max_length {
            raw.zeroize();
            return Err(PasswordPolicyError::TooLong {
                max: policy.max_length,
                actual: char_count,
            });
        }

        Ok(Self(raw))
    }

    fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Hash the password using Argon2id with a fresh random salt
    ///
    /// ## Arguments
    /// * `params` - Argon2 cost parameters
    /// * `pepper` - Optional application-wide secret
    ///
    /// ## Returns
    /// PHC-formatted hash string wrapped in `HashedPassword`
    pub fn hash(
        &self,
        params: HashParams,
        pepper: Option<&[u8]>,
    ) -> Result<HashedPassword, PasswordHashError> {
        // Random salt (128 bits = 16 bytes)
        let salt = SaltString::generate(OsRng);

        let hash = params
            .hasher(pepper)?
            .hash_password(self.as_bytes(), &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
        })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// Hashed password in PHC string format
///
/// The PHC string carries algorithm, version, cost parameters, salt and
/// digest, e.g. `$argon2id$v=19$m=19456,t=2,p=1$<salt>$<hash>`.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from PHC string (e.g., from database)
    pub fn from_phc_string(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;

        Ok(Self { hash })
    }

    /// Well-formed hash that no password verifies against
    ///
    /// Verifying against it costs the same as verifying against a real
    /// hash produced with `params`, which keeps unknown-identity lookups
    /// indistinguishable by timing.
    pub fn decoy(params: HashParams) -> Self {
        // all-zero 16 byte salt and 32 byte digest, canonical B64
        Self {
            hash: format!(
                "$argon2id$v=19$m={},t={},p={}${}${}",
                params.memory_kib,
                params.iterations,
                params.parallelism,
                "A".repeat(22),
                "A".repeat(43),
            ),
        }
    }

    pub fn as_phc_string(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash
    ///
    /// Cost parameters are read from the stored hash. The digest comparison
    /// inside `argon2` is constant-time.
    ///
    /// ## Arguments
    /// * `password` - The clear text password to verify
    /// * `pepper` - Must match the pepper used during hashing
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let parsed_hash = match PasswordHash::new(&self.hash) {
            Ok(h) => h,
            Err(_) => return false,
        };

        let argon2 = match HashParams::default().hasher(pepper) {
            Ok(a) => a,
            Err(_) => return false,
        };

        argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
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

    fn policy() -> PasswordPolicy {
        PasswordPolicy::default()
    }

    fn password(raw: &str) -> ClearTextPassword {
        ClearTextPassword::new(raw.to_string(), &policy()).unwrap()
    }

    #[test]
    fn test_password_too_short() {
        let result = ClearTextPassword::new("abc".to_string(), &policy());
        assert_eq!(
            result.unwrap_err(),
            PasswordPolicyError::TooShort { min: 4, actual: 3 }
        );
    }

    #[test]
    fn test_password_too_long() {
        let long_password = "a".repeat(DEFAULT_MAX_PASSWORD_LENGTH + 1);
        let result = ClearTextPassword::new(long_password, &policy());
        assert!(matches!(result, Err(PasswordPolicyError::TooLong { .. })));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(ClearTextPassword::new("a".repeat(4), &policy()).is_ok());
        assert!(ClearTextPassword::new("a".repeat(200), &policy()).is_ok());
    }

    #[test]
    fn test_length_counts_code_points() {
        // 4 characters, 12 bytes
        assert!(ClearTextPassword::new("パスワー".to_string(), &policy()).is_ok());
    }

    #[test]
    fn test_custom_policy() {
        let strict = PasswordPolicy::new(12, 64).unwrap();
        assert!(ClearTextPassword::new("hunter22".to_string(), &strict).is_err());
        assert!(ClearTextPassword::new("correct horse".to_string(), &strict).is_ok());
    }

    #[test]
    fn test_invalid_policy_bounds() {
        assert!(PasswordPolicy::new(0, 10).is_err());
        assert!(PasswordPolicy::new(10, 9).is_err());
        assert!(PasswordPolicy::new(9, 9).is_ok());
    }

    #[test]
    fn test_hash_and_verify() {
        let pw = password("hunter22");
        let hashed = pw.hash(HashParams::minimal(), None).unwrap();

        assert!(hashed.verify(&pw, None));
        assert!(!hashed.verify(&password("hunter23"), None));
    }

    #[test]
    fn test_hash_is_salted() {
        let pw = password("hunter22");
        let first = pw.hash(HashParams::minimal(), None).unwrap();
        let second = pw.hash(HashParams::minimal(), None).unwrap();

        assert_ne!(first.as_phc_string(), second.as_phc_string());
        assert!(first.verify(&pw, None));
        assert!(second.verify(&pw, None));
    }

    #[test]
    fn test_hash_uses_argon2id_phc_format() {
        let hashed = password("hunter22").hash(HashParams::minimal(), None).unwrap();
        assert!(hashed.as_phc_string().starts_with("$argon2id$v=19$"));
    }

    #[test]
    fn test_hash_with_pepper() {
        let pw = password("hunter22");
        let pepper = b"my_secret_pepper";
        let hashed = pw.hash(HashParams::minimal(), Some(pepper)).unwrap();

        assert!(hashed.verify(&pw, Some(pepper)));
        assert!(!hashed.verify(&pw, None));
        assert!(!hashed.verify(&pw, Some(b"wrong_pepper")));
    }

    #[test]
    fn test_lookalike_password_does_not_verify() {
        let fullwidth = "ｈｕｎｔｅｒ22";
        assert_ne!(fullwidth, "hunter22");

        let hashed = password("hunter22").hash(HashParams::minimal(), None).unwrap();
        assert!(!hashed.verify(&password(fullwidth), None));
        assert!(hashed.verify(&password("hunter22"), None));
    }

    #[test]
    fn test_compatibility_forms_are_not_folded() {
        // U+FB01 "ﬁ" would compose to "fi" under compatibility normalization
        let hashed = password("ﬁsh-food").hash(HashParams::minimal(), None).unwrap();
        assert!(!hashed.verify(&password("fish-food"), None));
        assert!(hashed.verify(&password("ﬁsh-food"), None));
    }

    #[test]
    fn test_length_counts_submitted_characters() {
        // U+2026 "…" is one character but expands to "..." under NFKC
        let ellipsis = |n: usize| "\u{2026}".repeat(n);

        assert_eq!(
            ClearTextPassword::new(ellipsis(2), &policy()).unwrap_err(),
            PasswordPolicyError::TooShort { min: 4, actual: 2 }
        );
        assert!(ClearTextPassword::new(ellipsis(4), &policy()).is_ok());
        assert!(ClearTextPassword::new(ellipsis(200), &policy()).is_ok());
        assert_eq!(
            ClearTextPassword::new(ellipsis(201), &policy()).unwrap_err(),
            PasswordPolicyError::TooLong { max: 200, actual: 201 }
        );
    }

    #[test]
    fn test_phc_string_roundtrip() {
        let pw = password("hunter22");
        let hashed = pw.hash(HashParams::minimal(), None).unwrap();

        let restored = HashedPassword::from_phc_string(hashed.as_phc_string()).unwrap();
        assert!(restored.verify(&pw, None));
    }

    #[test]
    fn test_invalid_phc_string() {
        assert!(HashedPassword::from_phc_string("not_a_valid_hash").is_err());
    }

    #[test]
    fn test_decoy_is_well_formed_and_never_verifies() {
        let decoy = HashedPassword::decoy(HashParams::minimal());
        assert!(HashedPassword::from_phc_string(decoy.as_phc_string()).is_ok());
        assert!(!decoy.verify(&password("hunter22"), None));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let params = HashParams {
            memory_kib: 0,
            iterations: 0,
            parallelism: 0,
        };
        let result = password("hunter22").hash(params, None);
        assert!(matches!(result, Err(PasswordHashError::InvalidParams(_))));
    }

    #[test]
    fn test_debug_redaction() {
        let pw = password("secret-value");
        let debug_output = format!("{:?}", pw);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));

        let hashed = pw.hash(HashParams::minimal(), None).unwrap();
        assert!(!format!("{:?}", hashed).contains("argon2"));
    }
}
