//! Server Configuration
//!
//! Resolved once at startup from the environment (optionally seeded from
//! `.env`) and passed down explicitly. Nothing reads the environment after
//! this point.

use auth::AuthConfig;
use auth::application::config::TOKEN_SECRET_LEN;
use base64::Engine;
use base64::engine::general_purpose;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// `None` selects the in-memory store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub auth: AuthConfig,
    /// The token secret was generated for this process only
    pub ephemeral_secret: bool,
    pub frontend_origins: Vec<String>,
}

impl AppConfig {
    /// Read from the process environment.
    ///
    /// Debug builds fall back to a random token secret; release builds
    /// require `TOKEN_SECRET`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), cfg!(debug_assertions))
    }

    pub fn from_lookup<F>(lookup: F, allow_random_secret: bool) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let bind_addr = var("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "BIND_ADDR",
                reason: e.to_string(),
            })?;

        let database_max_connections = match var("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => parse_positive("DATABASE_MAX_CONNECTIONS", &raw)?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let token_secret = match var("TOKEN_SECRET") {
            Some(raw) => Some(decode_secret(&raw)?),
            None if allow_random_secret => None,
            None => return Err(ConfigError::Missing("TOKEN_SECRET")),
        };

        let ephemeral_secret = token_secret.is_none();
        let mut auth = match token_secret {
            Some(secret) => AuthConfig::new(secret),
            None => AuthConfig::with_random_secret(),
        };

        if let Some(raw) = var("TOKEN_TTL_SECS") {
            let secs: u32 = parse_positive("TOKEN_TTL_SECS", &raw)?;
            auth.token_ttl = Duration::from_secs(u64::from(secs));
        }

        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        let frontend_origins = var("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            bind_addr,
            database_url: var("DATABASE_URL"),
            database_max_connections,
            auth,
            ephemeral_secret,
            frontend_origins,
        })
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(ConfigError::Invalid {
            var,
            reason: "must be greater than zero".to_string(),
        }),
        Ok(value) => Ok(value),
        Err(e) => Err(ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
    }
}

fn decode_secret(raw: &str) -> Result<[u8; TOKEN_SECRET_LEN], ConfigError> {
    let bytes = general_purpose::STANDARD
        .decode(raw.trim())
        .map_err(|e| ConfigError::Invalid {
            var: "TOKEN_SECRET",
            reason: e.to_string(),
        })?;

    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ConfigError::Invalid {
            var: "TOKEN_SECRET",
            reason: format!("expected {} bytes, got {}", TOKEN_SECRET_LEN, bytes.len()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)], allow_random_secret: bool) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned(), allow_random_secret)
    }

    fn secret_b64(byte: u8, len: usize) -> String {
        general_purpose::STANDARD.encode(vec![byte; len])
    }

    #[test]
    fn test_defaults() {
        let config = config(&[], true).unwrap();
        assert_eq!(config.bind_addr.port(), 5000);
        assert!(config.database_url.is_none());
        assert_eq!(config.database_max_connections, 5);
        assert_eq!(config.auth.token_ttl_secs(), 3600);
        assert!(config.auth.password_pepper.is_none());
        assert!(config.ephemeral_secret);
        assert_ne!(config.auth.token_secret, [0u8; TOKEN_SECRET_LEN]);
        assert_eq!(
            config.frontend_origins,
            vec!["http://localhost:3000", "http://127.0.0.1:3000"]
        );
    }

    #[test]
    fn test_secret_required_without_fallback() {
        assert!(matches!(
            config(&[], false),
            Err(ConfigError::Missing("TOKEN_SECRET"))
        ));

        let secret = secret_b64(7, TOKEN_SECRET_LEN);
        let config = config(&[("TOKEN_SECRET", &secret)], false).unwrap();
        assert_eq!(config.auth.token_secret, [7u8; TOKEN_SECRET_LEN]);
        assert_eq!(config.auth.token_ttl_secs(), 3600);
        assert!(!config.ephemeral_secret);
    }

    #[test]
    fn test_bad_secret_is_rejected() {
        let short = secret_b64(1, 16);
        assert!(matches!(
            config(&[("TOKEN_SECRET", &short)], true),
            Err(ConfigError::Invalid { var: "TOKEN_SECRET", .. })
        ));
        assert!(matches!(
            config(&[("TOKEN_SECRET", "not base64!")], true),
            Err(ConfigError::Invalid { var: "TOKEN_SECRET", .. })
        ));
    }

    #[test]
    fn test_overrides() {
        let config = config(
            &[
                ("BIND_ADDR", "127.0.0.1:8080"),
                ("DATABASE_URL", "postgres://localhost/todos"),
                ("DATABASE_MAX_CONNECTIONS", "20"),
                ("TOKEN_TTL_SECS", "60"),
                ("PASSWORD_PEPPER", "pepper"),
                ("FRONTEND_ORIGINS", "https://a.example, ,https://b.example"),
            ],
            true,
        )
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.database_url.as_deref(), Some("postgres://localhost/todos"));
        assert_eq!(config.database_max_connections, 20);
        assert_eq!(config.auth.token_ttl_secs(), 60);
        assert_eq!(config.auth.pepper(), Some(&b"pepper"[..]));
        assert_eq!(
            config.frontend_origins,
            vec!["https://a.example", "https://b.example"]
        );
    }

    #[test]
    fn test_invalid_numbers() {
        assert!(matches!(
            config(&[("TOKEN_TTL_SECS", "0")], true),
            Err(ConfigError::Invalid { var: "TOKEN_TTL_SECS", .. })
        ));
        assert!(matches!(
            config(&[("DATABASE_MAX_CONNECTIONS", "many")], true),
            Err(ConfigError::Invalid { var: "DATABASE_MAX_CONNECTIONS", .. })
        ));
        assert!(matches!(
            config(&[("BIND_ADDR", "localhost")], true),
            Err(ConfigError::Invalid { var: "BIND_ADDR", .. })
        ));
    }
}
