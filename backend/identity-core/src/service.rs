/// Account service: registration and login orchestration.
///
/// Composes the credential hasher, the user store, and the token issuer.
/// Registration derives a credential and persists the user before issuing
/// its first token; login verifies the presented password against the
/// stored credential and issues a token on success. Both flows return the
/// same [`AuthenticatedUser`] shape.
use auth_core::{derive_credential, verify_credential, TokenIssuer};
use tracing::{info, warn};
use validator::Validate;

use crate::error::{IdentityError, Result};
use crate::models::{AuthenticatedUser, LoginRequest, RegisterRequest, User};
use crate::store::UserStore;

pub struct AccountService<S: UserStore> {
    store: S,
    issuer: TokenIssuer,
}

impl<S: UserStore> AccountService<S> {
    pub fn new(store: S, issuer: TokenIssuer) -> Self {
        Self { store, issuer }
    }

    /// Register a new account and issue its first token.
    ///
    /// The duplicate-email check runs before any credential is derived; the
    /// store enforces uniqueness again at insert time.
    pub async fn register(&self, request: RegisterRequest) -> Result<AuthenticatedUser> {
        request.validate()?;

        if self.store.find_by_email(&request.email).await?.is_some() {
            warn!(
                email = %mask_email(&request.email),
                "Registration rejected: email already registered"
            );
            return Err(IdentityError::EmailAlreadyExists);
        }

        let credential = derive_credential(&request.password);
        let user = self
            .store
            .insert(User::new(&request.display_name, &request.email, credential))
            .await?;

        let token = self.issuer.issue(user.id, &user.email)?;

        info!(
            user_id = %user.id,
            email = %mask_email(&user.email),
            "User registered"
        );

        Ok(authenticated(user, token))
    }

    /// Authenticate an account and issue a token.
    ///
    /// Unknown email and wrong password both surface as
    /// [`IdentityError::InvalidCredentials`]; this layer does not reveal
    /// which one failed.
    pub async fn login(&self, request: LoginRequest) -> Result<AuthenticatedUser> {
        request.validate()?;

        let Some(user) = self.store.find_by_email(&request.email).await? else {
            warn!(email = %mask_email(&request.email), "Login failed: unknown email");
            return Err(IdentityError::InvalidCredentials);
        };

        if !verify_credential(&request.password, &user.credential()) {
            warn!(user_id = %user.id, "Login failed: password mismatch");
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self.issuer.issue(user.id, &user.email)?;

        info!(user_id = %user.id, "User logged in");

        Ok(authenticated(user, token))
    }
}

fn authenticated(user: User, token: String) -> AuthenticatedUser {
    AuthenticatedUser {
        id: user.id,
        display_name: user.display_name,
        email: user.email,
        token,
    }
}

/// Mask an email for log output, keeping the first character of the local
/// part and the full domain.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let local = &email[..at_pos];
        let domain = &email[at_pos..];
        match local.chars().next() {
            Some(first) if local.chars().count() > 2 => format!("{first}***{domain}"),
            _ => format!("**{domain}"),
        }
    } else {
        "***@***".to_string()
    }
}
