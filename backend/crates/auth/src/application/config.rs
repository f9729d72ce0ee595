//! Application Configuration
//!
//! Configuration for the Auth application layer. Values are resolved once
//! at startup by the `api` crate and shared behind an `Arc`.

use platform::crypto::random_bytes;
use std::time::Duration;

/// Length of the token signing secret in bytes
pub const TOKEN_SECRET_LEN: usize = 32;

/// Token lifetime (1 hour)
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(3600);

#[derive(Clone)]
pub struct AuthConfig {
    /// HS256 key for signing bearer tokens
    pub token_secret: [u8; TOKEN_SECRET_LEN],
    /// Token lifetime (1 hour)
    pub token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    /// Config signing with `token_secret`, default TTL and no pepper
    pub fn new(token_secret: [u8; TOKEN_SECRET_LEN]) -> Self {
        Self {
            token_secret,
            token_ttl: DEFAULT_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Create config with a random token secret (for development)
    pub fn with_random_secret() -> Self {
        let mut secret = [0u8; TOKEN_SECRET_LEN];
        secret.copy_from_slice(&random_bytes(TOKEN_SECRET_LEN));
        Self::new(secret)
    }

    /// Get token TTL in whole seconds
    pub fn token_ttl_secs(&self) -> i64 {
        self.token_ttl.as_secs() as i64
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("token_ttl", &self.token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_given_secret_and_defaults() {
        let config = AuthConfig::new([9u8; TOKEN_SECRET_LEN]);
        assert_eq!(config.token_secret, [9u8; TOKEN_SECRET_LEN]);
        assert_eq!(config.token_ttl_secs(), 3600);
        assert!(config.pepper().is_none());
    }

    #[test]
    fn test_random_secret() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_ne!(a.token_secret, b.token_secret);
        assert_ne!(a.token_secret, [0u8; TOKEN_SECRET_LEN]);
        assert_eq!(a.token_ttl_secs(), 3600);
        assert!(a.pepper().is_none());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = AuthConfig {
            password_pepper: Some(b"pepper".to_vec()),
            ..AuthConfig::with_random_secret()
        };
        let debug = format!("{:?}", config);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains("112, 101, 112"));
    }
}
