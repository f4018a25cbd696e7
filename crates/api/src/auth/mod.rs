//! Authentication primitives and the login/logout flow.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- opaque token key generation and `Authorization` header parsing.
//! - [`service`] -- credential checks and token issuance/revocation.

pub mod password;
pub mod service;
pub mod token;
