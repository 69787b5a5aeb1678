/// Identity Core Library
///
/// Provides account registration, login, and token issuance orchestration
/// for the Signet backend. Transport (HTTP routing, CORS) and persistence
/// engines live outside this crate: request handlers call into
/// [`service::AccountService`], and the storage layer implements
/// [`store::UserStore`].
///
/// ## Modules
///
/// - `config`: Service configuration
/// - `error`: Error types
/// - `models`: Data models
/// - `service`: Business logic (registration, login)
/// - `store`: User persistence seam
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{IdentityError, Result};
pub use service::AccountService;
pub use store::{InMemoryUserStore, UserStore};
