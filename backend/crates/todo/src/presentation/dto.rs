//! API DTOs (Data Transfer Objects)
//!
//! Request bodies carry no owner field; any `userId` a client sends is
//! dropped during deserialization.

use serde::{Deserialize, Serialize};

use crate::domain::entity::todo::Todo;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTodoRequest {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoResponse {
    pub id: String,
    pub user_id: String,
    pub text: String,
    pub completed: bool,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.todo_id.to_string(),
            user_id: todo.owner_id.to_string(),
            text: todo.text.into_inner(),
            completed: todo.completed,
        }
    }
}
