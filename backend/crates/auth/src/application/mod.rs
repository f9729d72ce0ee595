//! Application Layer
//!
//! Use cases and application services.

pub mod config;
pub mod credentials;
pub mod login;
pub mod token;

// Re-exports
pub use config::AuthConfig;
pub use credentials::{CredentialStore, RegisterInput};
pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use token::{IssuedToken, TokenClaims, TokenService};
