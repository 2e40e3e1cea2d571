//! Infrastructure Layer
//!
//! Database implementations of the identity repository.
//! PostgreSQL for deployments, SQLite for local runs and tests.

pub mod postgres;
mod row;
pub mod sqlite;

pub use postgres::PgIdentityRepository;
pub use sqlite::SqliteIdentityRepository;
