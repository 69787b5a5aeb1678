use auth_core::{ConfigError, TokenError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, IdentityError>;

#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already exists")]
    EmailAlreadyExists,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(ConfigError),

    #[error("Token error: {0}")]
    Token(TokenError),

    #[error("Internal error: {0}")]
    Internal(String),
}

// Conversions from external error types
impl From<ConfigError> for IdentityError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Signing key configuration error: {}", err);
        IdentityError::Config(err)
    }
}

impl From<TokenError> for IdentityError {
    fn from(err: TokenError) -> Self {
        tracing::error!("Token error: {}", err);
        IdentityError::Token(err)
    }
}

impl From<validator::ValidationErrors> for IdentityError {
    fn from(err: validator::ValidationErrors) -> Self {
        IdentityError::Validation(err.to_string())
    }
}
