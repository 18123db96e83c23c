//! Domain logic for the HostUp website: contact form rules and CSRF tokens.
//!
//! This crate has no database or HTTP dependencies so the rules can be
//! exercised directly from unit tests.

pub mod contact;
pub mod csrf;
pub mod types;
