//! Login Use Case
//!
//! Checks credentials and issues a bearer token. Unknown user and wrong
//! password both yield `InvalidCredentials` after the same Argon2 work, so
//! neither the response nor its latency tells which usernames exist.

use std::sync::Arc;

use crate::application::credentials::CredentialStore;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

pub struct LoginInput {
    pub user_name: String,
    pub password: String,
}

#[cfg_attr(test, derive(Debug))]
pub struct LoginOutput {
    pub token: String,
    /// Unix seconds
    pub expires_at: i64,
}

pub struct LoginUseCase<U>
where
    U: UserRepository,
{
    credentials: CredentialStore<U>,
    tokens: Arc<TokenService>,
}

impl<U> LoginUseCase<U>
where
    U: UserRepository,
{
    pub fn new(credentials: CredentialStore<U>, tokens: Arc<TokenService>) -> Self {
        Self {
            credentials,
            tokens,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> AuthResult<LoginOutput> {
        let user = self
            .credentials
            .find_by_user_name(&input.user_name)
            .await?;

        let verified = self
            .credentials
            .verify_password(user.as_ref(), input.password)
            .await?;

        let user = match user {
            Some(user) if verified => user,
            _ => return Err(AuthError::InvalidCredentials),
        };

        let issued = self.tokens.issue(user.user_id)?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            token: issued.token,
            expires_at: issued.expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::config::AuthConfig;
    use crate::application::credentials::RegisterInput;
    use crate::infra::memory::InMemoryUserRepository;

    struct Fixture {
        repo: Arc<InMemoryUserRepository>,
        config: Arc<AuthConfig>,
        tokens: Arc<TokenService>,
    }

    impl Fixture {
        fn new() -> Self {
            let config = Arc::new(AuthConfig::with_random_secret());
            Self {
                repo: Arc::new(InMemoryUserRepository::new()),
                tokens: Arc::new(TokenService::new(&config)),
                config,
            }
        }

        fn credentials(&self) -> CredentialStore<InMemoryUserRepository> {
            CredentialStore::new(self.repo.clone(), self.config.clone())
        }

        fn login(&self) -> LoginUseCase<InMemoryUserRepository> {
            LoginUseCase::new(self.credentials(), self.tokens.clone())
        }

        async fn register(&self, user_name: &str, password: &str) -> kernel::id::UserId {
            self.credentials()
                .register(RegisterInput {
                    user_name: user_name.to_string(),
                    password: password.to_string(),
                })
                .await
                .unwrap()
                .user_id
        }
    }

    fn input(user_name: &str, password: &str) -> LoginInput {
        LoginInput {
            user_name: user_name.to_string(),
            password: password.to_string(),
        }
    }

    #[tokio::test]
    async fn test_login_token_verifies_to_user() {
        let fixture = Fixture::new();
        let user_id = fixture.register("alice", "pw1").await;

        let output = fixture.login().execute(input("alice", "pw1")).await.unwrap();
        assert_eq!(fixture.tokens.verify(&output.token).unwrap(), user_id);
    }

    #[tokio::test]
    async fn test_wrong_password_and_unknown_user_are_indistinguishable() {
        let fixture = Fixture::new();
        fixture.register("alice", "pw1").await;

        let wrong_password = fixture
            .login()
            .execute(input("alice", "pw2"))
            .await
            .unwrap_err();
        let unknown_user = fixture
            .login()
            .execute(input("mallory", "pw1"))
            .await
            .unwrap_err();

        assert!(matches!(wrong_password, AuthError::InvalidCredentials));
        assert!(matches!(unknown_user, AuthError::InvalidCredentials));
        assert_eq!(wrong_password.to_string(), unknown_user.to_string());
    }

    #[tokio::test]
    async fn test_empty_password_is_invalid_credentials() {
        let fixture = Fixture::new();
        fixture.register("alice", "pw1").await;

        let err = fixture.login().execute(input("alice", "")).await.unwrap_err();
        assert!(matches!(err, AuthError::InvalidCredentials));
    }
}
