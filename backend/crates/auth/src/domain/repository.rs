//! Repository Traits
//!
//! Interfaces for data persistence. Implementations live in `infra`.

use crate::domain::entity::user::User;
use crate::domain::value_object::user_name::UserName;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user.
    ///
    /// Must fail with `AuthError::UserNameTaken` when the canonical name is
    /// already present, even if two registrations race.
    async fn create(&self, user: &User) -> AuthResult<()>;

    /// Find user by canonical user name
    async fn find_by_user_name(&self, user_name: &UserName) -> AuthResult<Option<User>>;

    /// Check if user name exists
    async fn exists_by_user_name(&self, user_name: &UserName) -> AuthResult<bool>;
}
