#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use hostup_api::config::ServerConfig;
use hostup_api::router::build_app_router;
use hostup_api::state::AppState;
use hostup_core::contact::NewContactSubmission;
use hostup_core::csrf::CsrfSigner;
use hostup_db::models::contact::ContactSubmission;
use hostup_db::store::{ContactStore, StoreError};

pub const TEST_SECRET: &str = "integration-test-secret";

// ---------------------------------------------------------------------------
// Stores
// ---------------------------------------------------------------------------

/// In-memory store that records every committed submission.
#[derive(Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<ContactSubmission>>,
}

impl MemoryStore {
    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn rows(&self) -> Vec<ContactSubmission> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert(
        &self,
        input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let row = ContactSubmission {
            id: rows.len() as i64 + 1,
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            property_location: input.property_location.clone(),
            message: input.message.clone(),
            created_at: chrono::Utc::now(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

/// Store whose every operation fails, as if the database were down.
pub struct FailingStore;

#[async_trait]
impl ContactStore for FailingStore {
    async fn insert(
        &self,
        _input: &NewContactSubmission,
    ) -> Result<ContactSubmission, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_max_connections: 1,
        request_timeout_secs: 30,
        secret_key: TEST_SECRET.to_string(),
        csrf_time_limit_secs: 3600,
        static_dir: "static".to_string(),
        secure_cookies: false,
    }
}

/// Build the full application router around `store`.
///
/// Uses the same builder as `main.rs` so tests exercise the production
/// middleware stack.
pub fn build_test_app(store: Arc<dyn ContactStore>) -> Router {
    let config = test_config();
    let state = AppState::new(store, config.clone());
    build_app_router(state, &config)
}

/// A signer sharing the test app's secret, for minting valid tokens.
pub fn csrf_signer() -> CsrfSigner {
    CsrfSigner::new(TEST_SECRET, 3600)
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(cookie), None).await
}

pub async fn post_form(
    app: Router,
    uri: &str,
    cookie: Option<&str>,
    fields: &[(&str, &str)],
) -> Response<Body> {
    send(app, Method::POST, uri, cookie, Some(form_body(fields))).await
}

/// POST the contact form with a freshly minted, matching CSRF token.
pub async fn post_contact(app: Router, fields: &[(&str, &str)]) -> Response<Body> {
    let token = csrf_signer().issue();
    let cookie = format!("csrf_token={token}");
    let mut all: Vec<(&str, &str)> = fields.to_vec();
    all.push(("csrf_token", &token));
    post_form(app, "/contact", Some(&cookie), &all).await
}

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    cookie: Option<&str>,
    form: Option<String>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header(COOKIE, c);
    }
    let body = match form {
        Some(f) => {
            builder = builder.header(CONTENT_TYPE, "application/x-www-form-urlencoded");
            Body::from(f)
        }
        None => Body::empty(),
    };
    app.oneshot(builder.body(body).unwrap()).await.unwrap()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// All `Set-Cookie` values on a response.
pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(|v| v.to_str().unwrap().to_string())
        .collect()
}

/// The `name=value` pair of the `Set-Cookie` for `name`, if present.
pub fn cookie_pair(response: &Response<Body>, name: &str) -> Option<String> {
    set_cookies(response)
        .into_iter()
        .find(|c| c.starts_with(&format!("{name}=")))
        .map(|c| c.split(';').next().unwrap().to_string())
}

// ---------------------------------------------------------------------------
// Form encoding
// ---------------------------------------------------------------------------

pub fn form_body(fields: &[(&str, &str)]) -> String {
    fields
        .iter()
        .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

fn encode(s: &str) -> String {
    let mut out = String::new();
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(b as char)
            }
            b' ' => out.push('+'),
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
