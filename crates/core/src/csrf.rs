//! Signed CSRF tokens for the contact form.
//!
//! A token has the shape `"<issued_unix>.<nonce>.<signature>"` where the
//! signature is the hex HMAC-SHA256 of `"<issued_unix>.<nonce>"` under the
//! site secret. The same token is embedded in the form and set as a cookie;
//! a POST is accepted only when both copies agree and the token is fresh.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

/// Default lifetime of an issued token, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: i64 = 3600;

/// Length of the random nonce (alphanumeric characters).
pub const NONCE_LENGTH: usize = 32;

type HmacSha256 = Hmac<Sha256>;

/// Why a submitted CSRF token was rejected.
///
/// The `Display` text is shown to the visitor beside the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CsrfError {
    #[error("The CSRF token is missing.")]
    Missing,

    #[error("The CSRF token is invalid.")]
    Invalid,

    #[error("The CSRF token has expired.")]
    Expired,

    #[error("The CSRF tokens do not match.")]
    Mismatch,
}

/// Issues and verifies CSRF tokens with a fixed secret.
#[derive(Clone)]
pub struct CsrfSigner {
    secret: Vec<u8>,
    time_limit_secs: i64,
}

impl std::fmt::Debug for CsrfSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfSigner")
            .field("time_limit_secs", &self.time_limit_secs)
            .finish_non_exhaustive()
    }
}

impl CsrfSigner {
    pub fn new(secret: &str, time_limit_secs: i64) -> Self {
        Self {
            secret: secret.as_bytes().to_vec(),
            time_limit_secs,
        }
    }

    /// Issue a fresh token stamped with the current time.
    pub fn issue(&self) -> String {
        self.issue_at(chrono::Utc::now().timestamp())
    }

    /// Issue a token stamped with `issued_at` (Unix seconds).
    pub fn issue_at(&self, issued_at: i64) -> String {
        let nonce: String = rand::rng()
            .sample_iter(&rand::distr::Alphanumeric)
            .take(NONCE_LENGTH)
            .map(char::from)
            .collect();
        let payload = format!("{issued_at}.{nonce}");
        let signature = hex::encode(self.mac(&payload).finalize().into_bytes());
        format!("{payload}.{signature}")
    }

    /// Verify a submitted token against the cookie copy, using the current time.
    pub fn verify(&self, submitted: &str, cookie: Option<&str>) -> Result<(), CsrfError> {
        self.verify_at(submitted, cookie, chrono::Utc::now().timestamp())
    }

    /// Verify a submitted token against the cookie copy at time `now`.
    pub fn verify_at(
        &self,
        submitted: &str,
        cookie: Option<&str>,
        now: i64,
    ) -> Result<(), CsrfError> {
        if submitted.is_empty() {
            return Err(CsrfError::Missing);
        }

        let (payload, signature) = submitted.rsplit_once('.').ok_or(CsrfError::Invalid)?;
        let (issued_at, nonce) = payload.split_once('.').ok_or(CsrfError::Invalid)?;
        let issued_at: i64 = issued_at.parse().map_err(|_| CsrfError::Invalid)?;
        if nonce.is_empty() {
            return Err(CsrfError::Invalid);
        }

        let signature = hex::decode(signature).ok_or(CsrfError::Invalid)?;
        self.mac(payload)
            .verify_slice(&signature)
            .map_err(|_| CsrfError::Invalid)?;

        if now - issued_at > self.time_limit_secs {
            return Err(CsrfError::Expired);
        }

        match cookie {
            Some(c) if c == submitted => Ok(()),
            _ => Err(CsrfError::Mismatch),
        }
    }

    fn mac(&self, payload: &str) -> HmacSha256 {
        let mut mac =
            HmacSha256::new_from_slice(&self.secret).expect("HMAC accepts any key length");
        mac.update(payload.as_bytes());
        mac
    }
}

// ---------------------------------------------------------------------------
// hex helpers (no extra dep)
// ---------------------------------------------------------------------------

mod hex {
    /// Encode bytes as a lowercase hex string.
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Decode a hex string, returning `None` on odd length or bad digits.
    pub fn decode(s: &str) -> Option<Vec<u8>> {
        if s.len() % 2 != 0 || !s.is_ascii() {
            return None;
        }
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).ok())
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
