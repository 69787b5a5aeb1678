use thiserror::Error;

use crate::token::MIN_SIGNING_KEY_BYTES;

/// Fatal signing-key configuration failures.
///
/// The process must not serve traffic without a usable signing key, so these
/// abort initialization instead of being handled per request.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("token signing key is missing or empty")]
    MissingKey,

    #[error("token signing key must be at least {min} bytes, got {length}", min = MIN_SIGNING_KEY_BYTES)]
    KeyTooShort { length: usize },
}

/// Failures while encoding or validating a signed token.
///
/// Password verification mismatches are never represented here: they are an
/// ordinary `false` result, not an error.
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),

    #[error("token validation failed: {0}")]
    Validation(#[source] jsonwebtoken::errors::Error),
}
