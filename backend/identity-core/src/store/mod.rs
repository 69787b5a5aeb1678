//! User persistence seam.
//!
//! The production store lives outside this crate; the trait here is the
//! surface it must provide to the account flows. [`InMemoryUserStore`] is
//! the reference implementation used by tests and local tooling.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{IdentityError, Result};
use crate::models::User;

/// User lookup and insertion as required by registration and login.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email. The match is case-insensitive.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a new user.
    ///
    /// Fails with [`IdentityError::EmailAlreadyExists`] if the email is
    /// already registered under any casing.
    async fn insert(&self, user: User) -> Result<User>;
}

/// In-memory user store
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn insert(&self, user: User) -> Result<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&user.email))
        {
            return Err(IdentityError::EmailAlreadyExists);
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}
