//! Delete Todo Use Case

use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::domain::value_object::{TodoId, UserId};
use crate::error::{TodoError, TodoResult};

pub struct DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `NotFound` for missing, foreign, and already-deleted todos alike
    pub async fn execute(&self, owner_id: UserId, todo_id: TodoId) -> TodoResult<()> {
        if !self.repo.delete_for_owner(owner_id, todo_id).await? {
            return Err(TodoError::NotFound);
        }

        tracing::info!(user_id = %owner_id, todo_id = %todo_id, "Todo deleted");
        Ok(())
    }
}
