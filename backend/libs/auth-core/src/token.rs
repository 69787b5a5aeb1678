/// Signed bearer token issuance for the Signet backend.
///
/// Issues compact JWTs signed with HMAC-SHA-512 (HS512) under a single
/// symmetric key. The issuer is an explicitly constructed, immutable value:
/// build one with [`TokenIssuer::from_key`] during startup and clone it
/// freely across request-handling threads. There is no ambient key state,
/// so parallel tests can each run with their own key.
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{ConfigError, TokenError};

pub use jsonwebtoken::TokenData;

/// Minimum signing key length in bytes. The signing scheme is HS512, whose
/// security degrades below a 512-bit key, and the key material is used
/// directly with no stretching.
pub const MIN_SIGNING_KEY_BYTES: usize = 64;

/// Token lifetime: 7 days.
const TOKEN_TTL_DAYS: i64 = 7;

/// JWT algorithm - HS512 only, no fallback to weaker algorithms
const JWT_ALGORITHM: Algorithm = Algorithm::HS512;

/// JWT claims asserted for an authenticated identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID as UUID string)
    pub sub: String,
    /// Email address, verbatim as registered (not lowercased)
    pub email: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Token issuer bound to one symmetric signing key.
///
/// Construction enforces the key-length gate; afterwards the issuer is
/// read-only and safe for unrestricted concurrent use.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenIssuer {
    /// Build an issuer from raw key material.
    ///
    /// ## Errors
    ///
    /// - [`ConfigError::MissingKey`] if the material is empty
    /// - [`ConfigError::KeyTooShort`] if it is shorter than 64 bytes
    pub fn from_key(key_material: &[u8]) -> Result<Self, ConfigError> {
        if key_material.is_empty() {
            return Err(ConfigError::MissingKey);
        }

        if key_material.len() < MIN_SIGNING_KEY_BYTES {
            return Err(ConfigError::KeyTooShort {
                length: key_material.len(),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(key_material),
            decoding_key: DecodingKey::from_secret(key_material),
        })
    }

    /// Issue a token for a verified identity, expiring 7 days from now.
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Issue a token with an explicit issue instant.
    ///
    /// Output is byte-identical for identical identity, key, and instant.
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expiry = issued_at + Duration::days(TOKEN_TTL_DAYS);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            iat: issued_at.timestamp(),
            exp: expiry.timestamp(),
        };

        encode(&Header::new(JWT_ALGORITHM), &claims, &self.encoding_key)
            .map_err(TokenError::Encoding)
    }

    /// Validate a token and return its claims.
    ///
    /// Verifies the HS512 signature and the expiration claim; tokens signed
    /// with any other algorithm are rejected.
    pub fn decode(&self, token: &str) -> Result<TokenData<Claims>, TokenError> {
        let mut validation = Validation::new(JWT_ALGORITHM);
        validation.validate_exp = true;

        decode::<Claims>(token, &self.decoding_key, &validation).map_err(TokenError::Validation)
    }
}
