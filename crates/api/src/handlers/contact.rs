//! Handlers for the contact form.
//!
//! GET renders a blank form. POST checks the CSRF token, validates the
//! fields, and on success persists the submission and redirects back to the
//! form (303) with a one-shot success notice, so a refresh cannot resubmit.
//! Any failure re-renders the form in place with the submitted values.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;

use hostup_core::contact::{self, ContactForm, FieldErrors, FIELD_CSRF_TOKEN};

use crate::cookies;
use crate::error::{AppError, AppResult};
use crate::flash::{self, Flash, Notice, CONTACT_ERROR_MESSAGE};
use crate::state::AppState;
use crate::views::{self, Page};

/// Cookie holding the copy of the CSRF token that POSTs are checked against.
pub const CSRF_COOKIE: &str = "csrf_token";

// ---------------------------------------------------------------------------
// GET /contact
// ---------------------------------------------------------------------------

/// Show an empty contact form, plus any notice carried over a redirect.
pub async fn show_contact_form(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let notices: Vec<Notice> = flash::pending(&headers)
        .map(Flash::notice)
        .into_iter()
        .collect();

    let mut response = render_form(
        &state,
        &ContactForm::default(),
        &FieldErrors::new(),
        &notices,
    )?;

    if flash::has_cookie(&headers) {
        cookies::append(
            response.headers_mut(),
            &flash::clear_cookie(state.config.secure_cookies),
        )?;
    }

    Ok(response)
}

// ---------------------------------------------------------------------------
// POST /contact
// ---------------------------------------------------------------------------

/// Validate and store a contact submission.
pub async fn submit_contact(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: Result<Form<ContactForm>, FormRejection>,
) -> AppResult<Response> {
    let Form(form) = form.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    let mut errors = FieldErrors::new();

    if let Err(err) = state
        .csrf
        .verify(&form.csrf_token, cookies::get(&headers, CSRF_COOKIE))
    {
        tracing::debug!(reason = %err, "Contact form CSRF check failed");
        errors.insert(FIELD_CSRF_TOKEN.to_string(), vec![err.to_string()]);
    }

    let submission = match contact::validate(&form) {
        Ok(submission) => Some(submission),
        Err(field_errors) => {
            errors.extend(field_errors);
            None
        }
    };

    let mut notices = Vec::new();

    if let (Some(submission), true) = (submission, errors.is_empty()) {
        match state.store.insert(&submission).await {
            Ok(saved) => {
                tracing::info!(contact_id = saved.id, "Contact submission saved");

                let mut response = Redirect::to(Page::Contact.path()).into_response();
                cookies::append(
                    response.headers_mut(),
                    &Flash::ContactReceived.set_cookie(state.config.secure_cookies),
                )?;
                return Ok(response);
            }
            Err(err) => {
                tracing::error!(error = %err, "Error saving contact form");
                notices.push(Notice::error(CONTACT_ERROR_MESSAGE));
            }
        }
    }

    render_form(&state, &form, &errors, &notices)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Render the form with a freshly issued CSRF token and set its cookie.
fn render_form(
    state: &AppState,
    form: &ContactForm,
    errors: &FieldErrors,
    notices: &[Notice],
) -> AppResult<Response> {
    let token = state.csrf.issue();
    let mut response = views::contact::render(form, errors, notices, &token).into_response();
    cookies::append(
        response.headers_mut(),
        &cookies::build(CSRF_COOKIE, &token, None, state.config.secure_cookies),
    )?;
    Ok(response)
}
