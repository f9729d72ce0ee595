//! User Entity
//!
//! A registered account. Created once at registration and never mutated.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{UserId, user_name::UserName, user_password::UserPassword};

#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    /// Unique on its canonical form
    pub user_name: UserName,
    /// Argon2id PHC string
    pub password_hash: UserPassword,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(user_name: UserName, password_hash: UserPassword) -> Self {
        Self {
            user_id: UserId::new(),
            user_name,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
