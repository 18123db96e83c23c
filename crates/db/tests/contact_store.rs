//! Integration tests for contact submission persistence.
//!
//! Exercises the repository and the transactional store against a real
//! database:
//! - Insert returns the stored row with defaults filled in
//! - Empty optional fields are stored as NULL
//! - A rejected insert leaves no row behind
//! - Anything the form validator accepts fits the table
//! - Health check through the store seam

use sqlx::PgPool;
use hostup_core::contact::{
    self, ContactForm, NewContactSubmission, FIELD_MESSAGE, FIELD_PROPERTY_LOCATION,
    PROPERTY_LOCATION_MAX_LENGTH,
};
use hostup_db::repositories::ContactRepo;
use hostup_db::store::{ContactStore, PgContactStore, StoreError};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_submission(name: &str) -> NewContactSubmission {
    NewContactSubmission {
        name: name.to_string(),
        email: "guest@example.com".to_string(),
        phone: Some("9876543210".to_string()),
        property_location: Some("delhi".to_string()),
        message: "Please call me about listing my villa.".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Repository
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_returns_full_row(pool: PgPool) {
    let input = new_submission("Ravi Kumar");
    let row = ContactRepo::create(&pool, &input).await.unwrap();

    assert!(row.id > 0);
    assert_eq!(row.name, "Ravi Kumar");
    assert_eq!(row.email, "guest@example.com");
    assert_eq!(row.phone.as_deref(), Some("9876543210"));
    assert_eq!(row.property_location.as_deref(), Some("delhi"));

    let found = ContactRepo::find_by_id(&pool, row.id).await.unwrap();
    assert_eq!(found.map(|r| r.id), Some(row.id));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_optionals_are_stored_as_null(pool: PgPool) {
    let input = NewContactSubmission {
        phone: None,
        property_location: None,
        ..new_submission("Meera")
    };
    let row = ContactRepo::create(&pool, &input).await.unwrap();

    let (phone, location): (Option<String>, Option<String>) = sqlx::query_as(
        "SELECT phone, property_location FROM contact_submissions WHERE id = $1",
    )
    .bind(row.id)
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(phone, None);
    assert_eq!(location, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn find_by_id_returns_none_for_unknown(pool: PgPool) {
    let found = ContactRepo::find_by_id(&pool, 999_999).await.unwrap();
    assert!(found.is_none());
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_insert_commits_one_row(pool: PgPool) {
    let store = PgContactStore::new(pool.clone());
    store.insert(&new_submission("Anil")).await.unwrap();

    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_insert_failure_rolls_back(pool: PgPool) {
    let store = PgContactStore::new(pool.clone());

    // Violates the name length check constraint.
    let result = store.insert(&new_submission("A")).await;

    assert!(matches!(result, Err(StoreError::Database(_))));
    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Validator and schema agree
// ---------------------------------------------------------------------------

fn form_with_location(location: String) -> ContactForm {
    ContactForm {
        name: "Kavya Rao".into(),
        email: "kavya@example.com".into(),
        phone: "9876543210".into(),
        property_location: location,
        message: "Looking for help with my Goa cottage.".into(),
        csrf_token: String::new(),
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn longest_accepted_location_is_stored(pool: PgPool) {
    let location = "x".repeat(PROPERTY_LOCATION_MAX_LENGTH);
    let submission = contact::validate(&form_with_location(location.clone())).unwrap();

    let store = PgContactStore::new(pool.clone());
    let row = store.insert(&submission).await.unwrap();

    assert_eq!(row.property_location.as_deref(), Some(location.as_str()));
    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn over_long_location_never_reaches_the_store(pool: PgPool) {
    let location = "x".repeat(PROPERTY_LOCATION_MAX_LENGTH + 1);
    let errors = contact::validate(&form_with_location(location)).unwrap_err();
    assert!(errors.contains_key(FIELD_PROPERTY_LOCATION));

    let form = ContactForm {
        message: "hello\0world, a message".into(),
        ..form_with_location("jaipur".into())
    };
    let errors = contact::validate(&form).unwrap_err();
    assert!(errors.contains_key(FIELD_MESSAGE));

    assert_eq!(ContactRepo::count(&pool).await.unwrap(), 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn store_ping_succeeds(pool: PgPool) {
    let store = PgContactStore::new(pool);
    store.ping().await.unwrap();
}
