//! Repository Traits
//!
//! Every read and write is scoped by owner. A record owned by someone else
//! is indistinguishable from one that does not exist.

use crate::domain::entity::todo::Todo;
use crate::domain::value_object::{TodoId, UserId, todo_patch::TodoPatch};
use crate::error::TodoResult;

#[trait_variant::make(TodoRepository: Send)]
pub trait LocalTodoRepository {
    /// Persist a new todo
    async fn create(&self, todo: &Todo) -> TodoResult<()>;

    /// All todos of one owner, oldest first
    async fn list_by_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>>;

    /// Apply `patch` if `todo_id` exists and belongs to `owner_id`.
    ///
    /// `None` when absent or owned by another user.
    async fn update_for_owner(
        &self,
        owner_id: UserId,
        todo_id: TodoId,
        patch: &TodoPatch,
    ) -> TodoResult<Option<Todo>>;

    /// `true` if a matching record was removed
    async fn delete_for_owner(&self, owner_id: UserId, todo_id: TodoId) -> TodoResult<bool>;
}
