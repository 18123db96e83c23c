//! Contact form fields, choices, and validation.
//!
//! [`validate`] turns the raw strings submitted by the browser into a
//! [`NewContactSubmission`] or a [`FieldErrors`] map keyed by field name.
//! Every field is checked independently so the form can show all problems at
//! once. Within a single field a missing required value stops further checks.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};

// ---------------------------------------------------------------------------
// Field names
// ---------------------------------------------------------------------------

pub const FIELD_NAME: &str = "name";
pub const FIELD_EMAIL: &str = "email";
pub const FIELD_PHONE: &str = "phone";
pub const FIELD_PROPERTY_LOCATION: &str = "property_location";
pub const FIELD_MESSAGE: &str = "message";
pub const FIELD_CSRF_TOKEN: &str = "csrf_token";

// ---------------------------------------------------------------------------
// Length limits (characters, measured after trimming)
// ---------------------------------------------------------------------------

pub const NAME_MIN_LENGTH: usize = 2;
pub const NAME_MAX_LENGTH: usize = 100;
pub const PHONE_MIN_LENGTH: usize = 10;
pub const PHONE_MAX_LENGTH: usize = 20;
pub const PROPERTY_LOCATION_MAX_LENGTH: usize = 50;
pub const MESSAGE_MIN_LENGTH: usize = 10;
pub const MESSAGE_MAX_LENGTH: usize = 1000;

// ---------------------------------------------------------------------------
// Messages
// ---------------------------------------------------------------------------

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const MESSAGE_REQUIRED: &str = "Message is required";
pub const INVALID_CHARACTERS: &str = "Contains characters that are not allowed";

// ---------------------------------------------------------------------------
// Property location choices
// ---------------------------------------------------------------------------

/// Choices offered by the property location select, as `(value, label)`.
///
/// The empty value is the "nothing selected" placeholder.
pub const LOCATION_CHOICES: &[(&str, &str)] = &[
    ("", "Select a city"),
    ("jaipur", "Jaipur"),
    ("delhi", "Delhi"),
    ("mumbai", "Mumbai"),
    ("other", "Other"),
];

/// Human-readable label for a known location value.
///
/// Returns `None` for values outside [`LOCATION_CHOICES`]. Such values are
/// still accepted by [`validate`]; membership is not enforced.
pub fn location_label(value: &str) -> Option<&'static str> {
    LOCATION_CHOICES
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
}

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Field-keyed list of human-readable error messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Raw contact form as submitted by the browser.
///
/// Every field defaults to the empty string so a partially filled POST body
/// still deserializes and reaches validation.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub property_location: String,
    pub message: String,
    pub csrf_token: String,
}

/// A validated submission, ready to be persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewContactSubmission {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub property_location: Option<String>,
    pub message: String,
}

/// Length and format rules, applied once requiredness has been checked.
#[derive(Debug, Validate)]
struct ContactRules {
    #[validate(length(min = 2, max = 100, message = "Name must be between 2 and 100 characters"))]
    name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    email: String,
    #[validate(length(min = 10, max = 20, message = "Please enter a valid phone number"))]
    phone: Option<String>,
    #[validate(length(max = 50, message = "Please select a valid property location"))]
    property_location: Option<String>,
    #[validate(length(
        min = 10,
        max = 1000,
        message = "Message must be between 10 and 1000 characters"
    ))]
    message: String,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a raw contact form.
///
/// Surrounding whitespace is trimmed before any rule runs. Empty optional
/// fields become `None` in the returned record.
pub fn validate(form: &ContactForm) -> Result<NewContactSubmission, FieldErrors> {
    let name = form.name.trim();
    let email = form.email.trim();
    let phone = non_empty(&form.phone);
    let property_location = non_empty(&form.property_location);
    let message = form.message.trim();

    let mut errors = FieldErrors::new();
    require(&mut errors, FIELD_NAME, name, NAME_REQUIRED);
    require(&mut errors, FIELD_EMAIL, email, EMAIL_REQUIRED);
    require(&mut errors, FIELD_MESSAGE, message, MESSAGE_REQUIRED);

    reject_control(&mut errors, FIELD_NAME, name, false);
    reject_control(&mut errors, FIELD_EMAIL, email, false);
    reject_control(&mut errors, FIELD_PHONE, phone.as_deref().unwrap_or(""), false);
    reject_control(
        &mut errors,
        FIELD_PROPERTY_LOCATION,
        property_location.as_deref().unwrap_or(""),
        false,
    );
    reject_control(&mut errors, FIELD_MESSAGE, message, true);

    let rules = ContactRules {
        name: name.to_string(),
        email: email.to_string(),
        phone,
        property_location,
        message: message.to_string(),
    };
    if let Err(rule_errors) = rules.validate() {
        merge_rule_errors(&mut errors, &rule_errors);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewContactSubmission {
        name: rules.name,
        email: rules.email,
        phone: rules.phone,
        property_location: rules.property_location,
        message: rules.message,
    })
}

/// Record a "required" error when `value` is empty.
fn require(errors: &mut FieldErrors, field: &str, value: &str, message: &str) {
    if value.is_empty() {
        errors
            .entry(field.to_string())
            .or_default()
            .push(message.to_string());
    }
}

/// Record an error when `value` holds control characters.
///
/// Multi-line fields may keep line breaks and tabs. NUL in particular can
/// never be stored in a Postgres text column.
fn reject_control(errors: &mut FieldErrors, field: &str, value: &str, multiline: bool) {
    if errors.contains_key(field) {
        return;
    }
    let allowed = |c: char| multiline && matches!(c, '\n' | '\r' | '\t');
    if value.chars().any(|c| c.is_control() && !allowed(c)) {
        errors.insert(field.to_string(), vec![INVALID_CHARACTERS.to_string()]);
    }
}

/// Fold rule violations into `errors`, skipping fields that already failed
/// their required check.
fn merge_rule_errors(errors: &mut FieldErrors, rule_errors: &ValidationErrors) {
    for (field, violations) in rule_errors.field_errors() {
        let field = field.to_string();
        if errors.contains_key(&field) {
            continue;
        }
        let messages = violations
            .iter()
            .map(|v| match &v.message {
                Some(message) => message.to_string(),
                None => v.code.to_string(),
            })
            .collect();
        errors.insert(field, messages);
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
