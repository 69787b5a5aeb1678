/// Integration tests for the account flows
///
/// This test module covers the full registration and login scenario:
/// register -> derive credential -> store -> login -> verify -> issue, with
/// the in-memory reference store standing in for the persistence layer.
use std::sync::Once;

use auth_core::TokenIssuer;
use identity_core::models::{LoginRequest, RegisterRequest};
use identity_core::{AccountService, IdentityError, InMemoryUserStore};
use tracing_subscriber::EnvFilter;

const TEST_KEY: &[u8] = b"an-integration-test-signing-key-that-is-64-bytes-long-exactly!!!";

fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

fn service() -> AccountService<InMemoryUserStore> {
    init_tracing();
    let issuer = TokenIssuer::from_key(TEST_KEY).expect("test key is valid");
    AccountService::new(InMemoryUserStore::new(), issuer)
}

#[tokio::test]
async fn test_register_then_login_end_to_end() {
    let service = service();

    // Register
    let registered = service
        .register(RegisterRequest {
            display_name: "Xavier".to_string(),
            email: "x@y.com".to_string(),
            password: "Secret1".to_string(),
        })
        .await
        .expect("registration succeeds");

    assert_eq!(registered.email, "x@y.com");
    assert_eq!(registered.token.matches('.').count(), 2);

    // Login with the correct password
    let logged_in = service
        .login(LoginRequest {
            email: "x@y.com".to_string(),
            password: "Secret1".to_string(),
        })
        .await
        .expect("login with correct password succeeds");

    assert_eq!(logged_in.id, registered.id);
    assert_eq!(logged_in.token.matches('.').count(), 2);

    // Login with the wrong password
    let rejected = service
        .login(LoginRequest {
            email: "x@y.com".to_string(),
            password: "wrong".to_string(),
        })
        .await;
    assert!(matches!(rejected, Err(IdentityError::InvalidCredentials)));
}

#[tokio::test]
async fn test_issued_token_asserts_registered_identity() {
    let service = service();
    let issuer = TokenIssuer::from_key(TEST_KEY).unwrap();

    let registered = service
        .register(RegisterRequest {
            display_name: "Casey".to_string(),
            email: "Casey@Example.COM".to_string(),
            password: "Secret1".to_string(),
        })
        .await
        .unwrap();

    let claims = issuer
        .decode(&registered.token)
        .expect("issued token validates under the same key")
        .claims;

    assert_eq!(claims.sub, registered.id.to_string());
    // Email claim is the registered value, casing intact.
    assert_eq!(claims.email, "Casey@Example.COM");
    assert_eq!(claims.exp - claims.iat, 604_800);
}

#[tokio::test]
async fn test_second_registration_with_same_email_fails() {
    let service = service();

    let request = || RegisterRequest {
        display_name: "Xavier".to_string(),
        email: "x@y.com".to_string(),
        password: "Secret1".to_string(),
    };

    service.register(request()).await.unwrap();
    let duplicate = service.register(request()).await;
    assert!(matches!(duplicate, Err(IdentityError::EmailAlreadyExists)));
}

#[tokio::test]
async fn test_login_before_registration_fails() {
    let service = service();

    let result = service
        .login(LoginRequest {
            email: "x@y.com".to_string(),
            password: "Secret1".to_string(),
        })
        .await;
    assert!(matches!(result, Err(IdentityError::InvalidCredentials)));
}
