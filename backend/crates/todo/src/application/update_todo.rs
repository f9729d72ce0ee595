//! Update Todo Use Case
//!
//! Only `text` and `completed` can change. Missing and foreign todos both
//! report `NotFound`.

use std::sync::Arc;

use crate::application::parse_text;
use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::{TodoId, UserId, todo_patch::TodoPatch};
use crate::error::{TodoError, TodoResult};

#[derive(Default)]
pub struct UpdateTodoInput {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

pub struct UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> UpdateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        owner_id: UserId,
        todo_id: TodoId,
        input: UpdateTodoInput,
    ) -> TodoResult<Todo> {
        let patch = TodoPatch {
            text: input.text.as_deref().map(parse_text).transpose()?,
            completed: input.completed,
        };

        let todo = self
            .repo
            .update_for_owner(owner_id, todo_id, &patch)
            .await?
            .ok_or(TodoError::NotFound)?;

        tracing::info!(user_id = %owner_id, todo_id = %todo_id, "Todo updated");

        Ok(todo)
    }
}
