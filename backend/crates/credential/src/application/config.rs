//! Application Configuration
//!
//! Configuration for the Credential application layer.

pub use platform::password::{HashParams, PasswordPolicy};

/// Credential application configuration
#[derive(Debug, Clone, Default)]
pub struct CredentialConfig {
    /// Accepted password length range
    pub password_policy: PasswordPolicy,
    /// Argon2id cost for newly created hashes
    pub hash_params: HashParams,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl CredentialConfig {
    /// Minimal Argon2 cost so test suites stay fast
    pub fn testing() -> Self {
        Self {
            hash_params: HashParams::minimal(),
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_production_cost() {
        let config = CredentialConfig::default();
        assert_eq!(config.hash_params, HashParams::default());
        assert_eq!(config.password_policy.min_length(), 4);
        assert_eq!(config.password_policy.max_length(), 200);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_testing_only_lowers_cost() {
        let config = CredentialConfig::testing();
        assert_eq!(config.hash_params, HashParams::minimal());
        assert_eq!(config.password_policy, PasswordPolicy::default());
    }
}
