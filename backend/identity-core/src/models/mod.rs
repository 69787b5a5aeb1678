pub mod user;

pub use user::{AuthenticatedUser, LoginRequest, RegisterRequest, User};
