//! Token Service
//!
//! Issues and verifies stateless HS256 JWTs carrying `{sub, iat, exp}`.
//!
//! Validity depends only on the signature and the `exp` claim; there is no
//! server-side session table and no revocation list.

use chrono::{DateTime, Utc};
use jsonwebtoken::errors::ErrorKind as JwtErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Claims carried by every token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User id (UUID string)
    pub sub: String,
    /// Issued at, unix seconds
    pub iat: i64,
    /// Expiry, unix seconds
    pub exp: i64,
}

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
}

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(&config.token_secret),
            decoding_key: DecodingKey::from_secret(&config.token_secret),
            validation,
            ttl_secs: config.token_ttl_secs(),
        }
    }

    pub fn issue(&self, subject: UserId) -> AuthResult<IssuedToken> {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: UserId, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let iat = now.timestamp();
        let claims = TokenClaims {
            sub: subject.to_string(),
            iat,
            exp: iat.saturating_add(self.ttl_secs),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::Internal(format!("Failed to sign token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: claims.exp,
        })
    }

    /// Verify a token and return its subject
    pub fn verify(&self, token: &str) -> AuthResult<UserId> {
        self.verify_at(token, Utc::now())
    }

    /// Signature is checked before expiry, so a forged token never
    /// reports `TokenExpired`.
    ///
    /// `exp` is checked against the system clock by the decoder and then
    /// against `now`; a token is expired once `now >= exp`.
    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<UserId> {
        let claims = decode::<TokenClaims>(token, &self.decoding_key, &self.validation)
            .map_err(|e| match e.kind() {
                JwtErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => AuthError::TokenInvalid,
            })?
            .claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired);
        }

        claims.sub.parse().map_err(|_| AuthError::TokenInvalid)
    }
}
