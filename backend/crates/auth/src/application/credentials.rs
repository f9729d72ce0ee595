//! Credential Store
//!
//! Registration, lookup and password verification over a
//! [`UserRepository`]. Argon2 work runs on tokio's blocking pool so a
//! slow hash never stalls other requests.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    user_name::UserName,
    user_password::{RawPassword, UserPassword},
};
use crate::error::{AuthError, AuthResult};

pub struct RegisterInput {
    pub user_name: String,
    pub password: String,
}

pub struct CredentialStore<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
}

impl<U> CredentialStore<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        Self { user_repo, config }
    }

    /// Create a new user; `UserNameTaken` if the name is already registered
    pub async fn register(&self, input: RegisterInput) -> AuthResult<User> {
        let user_name =
            UserName::new(&input.user_name).map_err(|e| AuthError::Validation(e.to_string()))?;

        if self.user_repo.exists_by_user_name(&user_name).await? {
            return Err(AuthError::UserNameTaken);
        }

        let raw_password = RawPassword::new(input.password)?;
        let pepper = self.config.pepper().map(<[u8]>::to_vec);
        let password_hash = tokio::task::spawn_blocking(move || {
            UserPassword::from_raw(&raw_password, pepper.as_deref())
        })
        .await
        .map_err(|e| AuthError::Internal(format!("Hashing task failed: {e}")))??;

        let user = User::new(user_name, password_hash);

        // A concurrent registration can still win between the check and
        // here; the repository reports that as `UserNameTaken`.
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            user_name = %user.user_name,
            "User registered"
        );

        Ok(user)
    }

    /// `None` for unknown and for syntactically impossible names alike
    pub async fn find_by_user_name(&self, user_name: &str) -> AuthResult<Option<User>> {
        let Ok(user_name) = UserName::new(user_name) else {
            return Ok(None);
        };
        self.user_repo.find_by_user_name(&user_name).await
    }

    /// Check a candidate password against the stored hash.
    ///
    /// With no user the candidate is checked against a decoy hash of the
    /// same cost, so both misses take as long as a wrong password.
    pub async fn verify_password(
        &self,
        user: Option<&User>,
        candidate: String,
    ) -> AuthResult<bool> {
        let Ok(raw_password) = RawPassword::new(candidate) else {
            return Ok(false);
        };
        let stored = user.map_or_else(UserPassword::decoy, |u| u.password_hash.clone());
        let pepper = self.config.pepper().map(<[u8]>::to_vec);

        let matched =
            tokio::task::spawn_blocking(move || stored.verify(&raw_password, pepper.as_deref()))
                .await
                .map_err(|e| AuthError::Internal(format!("Verification task failed: {e}")))?;

        Ok(matched && user.is_some())
    }
}
