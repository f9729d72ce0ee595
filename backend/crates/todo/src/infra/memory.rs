//! In-Memory Repository Implementation
//!
//! A `Vec` behind a `tokio::sync::RwLock`, so listing keeps insertion
//! order. Each update or delete finds and mutates its record under a
//! single write lock.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::{TodoId, UserId, todo_patch::TodoPatch};
use crate::error::TodoResult;

#[derive(Clone, Default)]
pub struct InMemoryTodoRepository {
    todos: Arc<RwLock<Vec<Todo>>>,
}

impl InMemoryTodoRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TodoRepository for InMemoryTodoRepository {
    async fn create(&self, todo: &Todo) -> TodoResult<()> {
        self.todos.write().await.push(todo.clone());
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        Ok(self
            .todos
            .read()
            .await
            .iter()
            .filter(|todo| todo.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn update_for_owner(
        &self,
        owner_id: UserId,
        todo_id: TodoId,
        patch: &TodoPatch,
    ) -> TodoResult<Option<Todo>> {
        let mut todos = self.todos.write().await;
        let Some(todo) = todos
            .iter_mut()
            .find(|todo| todo.todo_id == todo_id && todo.owner_id == owner_id)
        else {
            return Ok(None);
        };

        todo.apply(patch);
        Ok(Some(todo.clone()))
    }

    async fn delete_for_owner(&self, owner_id: UserId, todo_id: TodoId) -> TodoResult<bool> {
        let mut todos = self.todos.write().await;
        let before = todos.len();
        todos.retain(|todo| !(todo.todo_id == todo_id && todo.owner_id == owner_id));
        Ok(todos.len() < before)
    }
}
