//! In-Memory Repository Implementation
//!
//! Users keyed by canonical name behind a `tokio::sync::RwLock`. The
//! existence check and insert in `create` happen under one write lock, so
//! uniqueness holds under concurrent registration.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_name::UserName;
use crate::error::{AuthError, AuthResult};

#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<String, User>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> AuthResult<()> {
        let mut users = self.users.write().await;
        let key = user.user_name.canonical().to_string();
        if users.contains_key(&key) {
            return Err(AuthError::UserNameTaken);
        }
        users.insert(key, user.clone());
        Ok(())
    }

    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>> {
        Ok(self.users.read().await.get(user_name.canonical()).cloned())
    }

    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool> {
        Ok(self.users.read().await.contains_key(user_name.canonical()))
    }
}
