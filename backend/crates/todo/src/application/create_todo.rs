//! Create Todo Use Case

use std::sync::Arc;

use crate::application::parse_text;
use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::UserId;
use crate::error::TodoResult;

pub struct CreateTodoInput {
    pub text: String,
    pub completed: Option<bool>,
}

pub struct CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    repo: Arc<R>,
}

impl<R> CreateTodoUseCase<R>
where
    R: TodoRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// `owner_id` comes from the verified token, never from the body
    pub async fn execute(&self, owner_id: UserId, input: CreateTodoInput) -> TodoResult<Todo> {
        let text = parse_text(&input.text)?;
        let todo = Todo::new(owner_id, text, input.completed.unwrap_or(false));

        self.repo.create(&todo).await?;

        tracing::info!(user_id = %owner_id, todo_id = %todo.todo_id, "Todo created");

        Ok(todo)
    }
}
