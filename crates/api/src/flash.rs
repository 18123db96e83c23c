//! One-shot notices shown above page content.
//!
//! A [`Notice`] rendered in the same response needs no storage. A [`Flash`]
//! survives one redirect in the `flash` cookie and is cleared by the page
//! that displays it.

use axum::http::HeaderMap;

use crate::cookies;

pub const FLASH_COOKIE: &str = "flash";

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Thank you for your message! We will get back to you within 24 hours.";
pub const CONTACT_ERROR_MESSAGE: &str =
    "There was an error submitting your message. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

impl NoticeLevel {
    /// CSS class suffix used by the layout.
    pub fn as_str(self) -> &'static str {
        match self {
            NoticeLevel::Success => "success",
            NoticeLevel::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: &'static str,
}

impl Notice {
    pub const fn success(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Success,
            message,
        }
    }

    pub const fn error(message: &'static str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message,
        }
    }
}

/// Notices that can be carried across a redirect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flash {
    /// A contact submission was stored.
    ContactReceived,
}

impl Flash {
    fn cookie_value(self) -> &'static str {
        match self {
            Flash::ContactReceived => "contact_received",
        }
    }

    fn from_cookie_value(value: &str) -> Option<Self> {
        match value {
            "contact_received" => Some(Flash::ContactReceived),
            _ => None,
        }
    }

    pub fn notice(self) -> Notice {
        match self {
            Flash::ContactReceived => Notice::success(CONTACT_SUCCESS_MESSAGE),
        }
    }

    /// `Set-Cookie` value that stores this flash for the next page view.
    pub fn set_cookie(self, secure: bool) -> String {
        cookies::build(FLASH_COOKIE, self.cookie_value(), None, secure)
    }
}

/// Read the pending flash, if any. Unknown values are ignored.
pub fn pending(headers: &HeaderMap) -> Option<Flash> {
    cookies::get(headers, FLASH_COOKIE).and_then(Flash::from_cookie_value)
}

/// Whether the request carries a flash cookie at all, recognised or not.
pub fn has_cookie(headers: &HeaderMap) -> bool {
    cookies::get(headers, FLASH_COOKIE).is_some()
}

/// `Set-Cookie` value that removes the flash cookie.
pub fn clear_cookie(secure: bool) -> String {
    cookies::build(FLASH_COOKIE, "", Some(0), secure)
}
