pub mod create_todo;
pub mod delete_todo;
pub mod list_todos;
pub mod update_todo;

pub use create_todo::{CreateTodoInput, CreateTodoUseCase};
pub use delete_todo::DeleteTodoUseCase;
pub use list_todos::ListTodosUseCase;
pub use update_todo::{UpdateTodoInput, UpdateTodoUseCase};

use crate::domain::value_object::todo_text::TodoText;
use crate::error::{TodoError, TodoResult};

fn parse_text(raw: &str) -> TodoResult<TodoText> {
    TodoText::new(raw).map_err(|e| TodoError::Validation(e.to_string()))
}
