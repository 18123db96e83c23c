//! The persistence seam used by the contact handler.
//!
//! Handlers hold an `Arc<dyn ContactStore>` from application state rather
//! than a pool, so the submission flow can be driven against an in-memory or
//! failing store in tests.

use async_trait::async_trait;
use hostup_core::contact::NewContactSubmission;

use crate::models::contact::ContactSubmission;
use crate::repositories::ContactRepo;
use crate::DbPool;

/// Failure to persist or reach the store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Append-only storage for contact submissions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist one submission atomically.
    ///
    /// Either the row is committed and returned, or nothing is written.
    async fn insert(&self, input: &NewContactSubmission)
        -> Result<ContactSubmission, StoreError>;

    /// Check that the store is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}

/// [`ContactStore`] backed by PostgreSQL.
#[derive(Clone)]
pub struct PgContactStore {
    pool: DbPool,
}

impl PgContactStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for PgContactStore {
    async fn insert(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        // An uncommitted transaction rolls back when dropped, so every early
        // return below leaves the table untouched.
        let mut tx = self.pool.begin().await?;
        let row = ContactRepo::create(&mut *tx, input).await?;
        tx.commit().await?;

        tracing::debug!(contact_id = row.id, "Contact submission committed");
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
