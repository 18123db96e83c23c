//! Contact submission entity model.

use serde::Serialize;
use sqlx::FromRow;
use hostup_core::types::{DbId, Timestamp};

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_location: Option<String>,
    pub message: String,
    pub created_at: Timestamp,
}
