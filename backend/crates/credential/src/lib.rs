//! Credential Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Identity entity, value objects, repository trait
//! - `application/` - Register and authenticate use cases
//! - `infra/` - PostgreSQL and SQLite implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Register a customer id with a password (`POST /createuser`)
//! - Verify a password for a customer id (`POST /authuser`)
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, random salt per hash (PHC string)
//! - Customer id uniqueness enforced by a unique index, insert-if-absent
//! - Unknown customer ids and wrong passwords are indistinguishable in
//!   both response shape and timing

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::CredentialConfig;
pub use error::{CredentialError, CredentialResult};
pub use infra::{PgIdentityRepository, SqliteIdentityRepository};
pub use presentation::router::credential_router;
