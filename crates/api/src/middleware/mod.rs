//! Authentication middleware extractors.
//!
//! - [`auth::AuthUser`] -- Resolves the caller from an `Authorization: Token <key>` header.

pub mod auth;
