//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::identity::{Identity, NewIdentity};
pub use repository::{IdentityRepository, InsertOutcome};
