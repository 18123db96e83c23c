//! Minimal cookie reading and `Set-Cookie` building.
//!
//! The site only ever stores short opaque tokens (CSRF token, flash kind), so
//! values are written verbatim and never percent-encoded.

use axum::http::header::{InvalidHeaderValue, COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};

/// Return the value of cookie `name` from the request's `Cookie` headers.
pub fn get<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}

/// Build a `Set-Cookie` value scoped to the whole site.
///
/// `max_age` of `Some(0)` expires the cookie immediately; `None` makes it a
/// session cookie.
pub fn build(name: &str, value: &str, max_age: Option<i64>, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path=/; HttpOnly; SameSite=Lax");
    if let Some(age) = max_age {
        cookie.push_str(&format!("; Max-Age={age}"));
    }
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Append a `Set-Cookie` header to a response header map.
pub fn append(headers: &mut HeaderMap, cookie: &str) -> Result<(), InvalidHeaderValue> {
    headers.append(SET_COOKIE, HeaderValue::from_str(cookie)?);
    Ok(())
}
