//! Opaque token keys and `Authorization` header parsing.
//!
//! A key is 32 random bytes rendered as 64 lowercase hex characters. Keys are
//! stored as-is so repeated logins can hand back the same key.

use rand::Rng;

/// Length of a token key in characters.
pub const TOKEN_KEY_LEN: usize = 64;

/// Header schemes accepted in front of the key, compared case-insensitively.
const SCHEMES: [&str; 2] = ["token", "bearer"];

/// Generate a fresh random token key.
pub fn generate_token_key() -> String {
    let bytes: [u8; TOKEN_KEY_LEN / 2] = rand::rng().random();
    hex::encode(bytes)
}

/// Why an `Authorization` header could not yield a key.
#[derive(Debug, PartialEq, Eq)]
pub enum HeaderError {
    /// Scheme is neither `Token` nor `Bearer`.
    UnknownScheme,
    /// Scheme present but no key follows it.
    MissingKey,
    /// More than one word after the scheme.
    ContainsSpaces,
}

impl HeaderError {
    pub fn detail(&self) -> &'static str {
        match self {
            HeaderError::UnknownScheme => {
                "Invalid Authorization format. Expected: Token <key>"
            }
            HeaderError::MissingKey => "Invalid token header. No credentials provided.",
            HeaderError::ContainsSpaces => {
                "Invalid token header. Token string should not contain spaces."
            }
        }
    }
}

/// Extract the key from an `Authorization` header value such as
/// `Token 3f2a...` or `Bearer 3f2a...`.
pub fn parse_authorization(value: &str) -> Result<&str, HeaderError> {
    let mut parts = value.split_whitespace();
    let scheme = parts.next().ok_or(HeaderError::UnknownScheme)?;
    if !SCHEMES.iter().any(|s| s.eq_ignore_ascii_case(scheme)) {
        return Err(HeaderError::UnknownScheme);
    }
    let key = parts.next().ok_or(HeaderError::MissingKey)?;
    if parts.next().is_some() {
        return Err(HeaderError::ContainsSpaces);
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_64_lowercase_hex() {
        let key = generate_token_key();
        assert_eq!(key.len(), TOKEN_KEY_LEN);
        assert!(key
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn generated_keys_differ() {
        assert_ne!(generate_token_key(), generate_token_key());
    }

    #[test]
    fn parses_token_and_bearer_schemes() {
        assert_eq!(parse_authorization("Token abc123"), Ok("abc123"));
        assert_eq!(parse_authorization("token abc123"), Ok("abc123"));
        assert_eq!(parse_authorization("Bearer abc123"), Ok("abc123"));
    }

    #[test]
    fn rejects_malformed_headers() {
        assert_eq!(
            parse_authorization("Basic dXNlcjpwdw=="),
            Err(HeaderError::UnknownScheme)
        );
        assert_eq!(parse_authorization("Token"), Err(HeaderError::MissingKey));
        assert_eq!(
            parse_authorization("Token abc def"),
            Err(HeaderError::ContainsSpaces)
        );
        assert_eq!(parse_authorization(""), Err(HeaderError::UnknownScheme));
    }
}
