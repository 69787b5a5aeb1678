use auth_core::Credential;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// User model - core identity entity
///
/// The credential is stored as two byte columns, hash and salt, and is only
/// ever replaced wholesale. Email uniqueness is case-insensitive and
/// enforced by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub password_hash: Vec<u8>,
    pub password_salt: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Assemble a new user from registration data and a derived credential.
    pub fn new(display_name: &str, email: &str, credential: Credential) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.to_string(),
            email: email.to_string(),
            password_hash: credential.hash,
            password_salt: credential.salt,
            created_at: Utc::now(),
        }
    }

    /// Stored credential view, for verification at login.
    pub fn credential(&self) -> Credential {
        Credential {
            hash: self.password_hash.clone(),
            salt: self.password_salt.clone(),
        }
    }
}

/// Account registration request
///
/// Password strength is deliberately not checked here; the only bound is a
/// length cap on the input. Empty passwords are accepted by the hasher.
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 64))]
    pub display_name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 256))]
    pub password: String,
}

/// Login request
#[derive(Debug, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 256))]
    pub password: String,
}

/// Authenticated user response: identity fields plus a freshly issued
/// bearer token. Returned by both registration and login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: Uuid,
    pub display_name: String,
    pub email: String,
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use auth_core::derive_credential;

    #[test]
    fn test_user_credential_round_trip() {
        let credential = derive_credential("Secret1");
        let user = User::new("Test User", "test@example.com", credential.clone());

        assert_eq!(user.credential(), credential);
        assert_eq!(user.email, "test@example.com");
    }

    #[test]
    fn test_register_request_rejects_bad_email() {
        let request = RegisterRequest {
            display_name: "Test User".to_string(),
            email: "not-an-email".to_string(),
            password: "Secret1".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_register_request_allows_empty_password() {
        let request = RegisterRequest {
            display_name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_ok());
    }
}
