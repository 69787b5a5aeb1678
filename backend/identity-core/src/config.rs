//! Configuration management for the identity core.
//!
//! Loads settings from:
//! 1. Environment variables
//! 2. .env file (local development)
//!
//! The signing key is transported here as an opaque string; length
//! enforcement happens in [`TokenIssuer::from_key`] so that a process with
//! an unusable key refuses to start.

use anyhow::{Context, Result};
use auth_core::{ConfigError, TokenIssuer};
use std::env;
use tracing::info;

/// Application settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub auth: AuthSettings,
}

impl Settings {
    /// Load settings from the environment.
    pub fn load() -> Result<Self> {
        // Load .env file in development
        if cfg!(debug_assertions) {
            dotenvy::dotenv().ok();
            info!("Loaded .env file for development");
        }

        Ok(Settings {
            auth: AuthSettings::from_env()?,
        })
    }
}

/// Token signing settings
#[derive(Clone)]
pub struct AuthSettings {
    pub token_key: String,
}

impl AuthSettings {
    fn from_env() -> Result<Self> {
        Ok(Self {
            token_key: env::var("TOKEN_KEY").context("TOKEN_KEY must be set")?,
        })
    }

    /// Build the token issuer from the configured key material.
    ///
    /// The key length is measured in UTF-8 bytes.
    pub fn build_issuer(&self) -> std::result::Result<TokenIssuer, ConfigError> {
        TokenIssuer::from_key(self.token_key.as_bytes())
    }
}

// The key must never appear in logs or debug dumps.
impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("token_key", &"<redacted>")
            .finish()
    }
}
