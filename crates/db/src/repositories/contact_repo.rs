//! Repository for the `contact_submissions` table.

use sqlx::{PgExecutor, PgPool};
use hostup_core::contact::NewContactSubmission;
use hostup_core::types::DbId;

use crate::models::contact::ContactSubmission;

/// Column list for `contact_submissions` queries.
const COLUMNS: &str = "id, name, email, phone, property_location, message, created_at";

/// Insert and lookup operations for contact submissions.
///
/// The table is append-only, so there is no update or delete.
pub struct ContactRepo;

impl ContactRepo {
    /// Insert a validated submission, returning the full row.
    ///
    /// Accepts any executor so callers can run it inside a transaction.
    pub async fn create<'e, E>(
        executor: E,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO contact_submissions \
                (name, email, phone, property_location, message) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.property_location)
            .bind(&input.message)
            .fetch_one(executor)
            .await
    }

    /// Find a submission by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Total number of stored submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM contact_submissions")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
