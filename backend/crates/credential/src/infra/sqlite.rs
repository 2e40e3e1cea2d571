//! SQLite Repository Implementation

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use crate::domain::entity::identity::{Identity, NewIdentity};
use crate::domain::repository::{IdentityRepository, InsertOutcome};
use crate::domain::value_object::customer_id::CustomerId;
use crate::error::CredentialResult;
use crate::infra::row::IdentityRow;

/// SQLite-backed identity repository
#[derive(Clone)]
pub struct SqliteIdentityRepository {
    pool: SqlitePool,
}

impl SqliteIdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply pending schema migrations
    pub async fn migrate(&self) -> CredentialResult<()> {
        sqlx::migrate!("../../../database/migrations/sqlite")
            .run(&self.pool)
            .await
            .map_err(sqlx::Error::from)?;

        Ok(())
    }
}

impl IdentityRepository for SqliteIdentityRepository {
    async fn find_by_customer_id(
        &self,
        customer_id: &CustomerId,
    ) -> CredentialResult<Option<Identity>> {
        let row = sqlx::query_as::<_, IdentityRow>(
            r#"
            SELECT
                identity_id,
                customer_id,
                password_hash,
                created_at
            FROM identities
            WHERE customer_id = ?
            "#,
        )
        .bind(customer_id.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_identity()).transpose()
    }

    async fn insert(&self, identity: &NewIdentity) -> CredentialResult<InsertOutcome> {
        // RETURNING yields no row when the conflict clause skipped the insert
        let created_at = sqlx::query_scalar::<_, DateTime<Utc>>(
            r#"
            INSERT INTO identities (
                identity_id,
                customer_id,
                password_hash
            ) VALUES (?, ?, ?)
            ON CONFLICT (customer_id) DO NOTHING
            RETURNING created_at
            "#,
        )
        .bind(*identity.identity_id.as_uuid())
        .bind(identity.customer_id.as_str())
        .bind(identity.password_hash.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(match created_at {
            Some(created_at) => InsertOutcome::Inserted { created_at },
            None => InsertOutcome::AlreadyExists,
        })
    }

    async fn health_check(&self) -> CredentialResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
