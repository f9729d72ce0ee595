//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - Secure random bytes
//! - Password hashing (Argon2id)

pub mod crypto;
pub mod password;
