//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Credential store, token service, login use case
//! - `infra/` - PostgreSQL and in-memory repositories
//! - `presentation/` - HTTP handlers, DTOs, router, token middleware
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional pepper
//! - Stateless HMAC-SHA256 bearer tokens, 1 hour lifetime, no revocation
//! - Login failures never reveal whether the username exists
//! - Protected routes take the caller's identity from the verified token only

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use domain::repository::UserRepository;
pub use error::{AuthError, AuthResult};
pub use infra::{memory::InMemoryUserRepository, postgres::PgUserRepository};
pub use presentation::middleware::{Principal, require_token};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
