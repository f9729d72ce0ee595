//! HTTP Handlers
//!
//! The owner is always the authenticated [`Principal`]. Ids that fail to
//! parse are reported as `404`, the same as an id that matches nothing.

use auth::Principal;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::{
    CreateTodoInput, CreateTodoUseCase, DeleteTodoUseCase, ListTodosUseCase, UpdateTodoInput,
    UpdateTodoUseCase,
};
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::TodoId;
use crate::error::{TodoError, TodoResult};
use crate::presentation::dto::{CreateTodoRequest, TodoResponse, UpdateTodoRequest};

#[derive(Clone)]
pub struct TodoAppState<R>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

fn parse_todo_id(raw: &str) -> TodoResult<TodoId> {
    raw.parse().map_err(|_| TodoError::NotFound)
}

/// GET /todos
pub async fn list_todos<R>(
    State(state): State<TodoAppState<R>>,
    principal: Principal,
) -> TodoResult<Json<Vec<TodoResponse>>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todos = ListTodosUseCase::new(state.repo.clone())
        .execute(principal.user_id)
        .await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todos
pub async fn create_todo<R>(
    State(state): State<TodoAppState<R>>,
    principal: Principal,
    WithRejection(Json(req), _): WithRejection<Json<CreateTodoRequest>, AppError>,
) -> TodoResult<impl IntoResponse>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let input = CreateTodoInput {
        text: req.text.unwrap_or_default(),
        completed: req.completed,
    };

    let todo = CreateTodoUseCase::new(state.repo.clone())
        .execute(principal.user_id, input)
        .await?;

    Ok((StatusCode::CREATED, Json(TodoResponse::from(todo))))
}

/// PUT /todos/{id}
pub async fn update_todo<R>(
    State(state): State<TodoAppState<R>>,
    principal: Principal,
    Path(id): Path<String>,
    WithRejection(Json(req), _): WithRejection<Json<UpdateTodoRequest>, AppError>,
) -> TodoResult<Json<TodoResponse>>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todo_id = parse_todo_id(&id)?;
    let input = UpdateTodoInput {
        text: req.text,
        completed: req.completed,
    };

    let todo = UpdateTodoUseCase::new(state.repo.clone())
        .execute(principal.user_id, todo_id, input)
        .await?;

    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todos/{id}
pub async fn delete_todo<R>(
    State(state): State<TodoAppState<R>>,
    principal: Principal,
    Path(id): Path<String>,
) -> TodoResult<StatusCode>
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let todo_id = parse_todo_id(&id)?;

    DeleteTodoUseCase::new(state.repo.clone())
        .execute(principal.user_id, todo_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
