//! PostgreSQL Repository Implementation
//!
//! One statement per operation, always filtered by `(todo_id, owner_id)`.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::todo::Todo;
use crate::domain::repository::TodoRepository;
use crate::domain::value_object::{TodoId, UserId, todo_patch::TodoPatch, todo_text::TodoText};
use crate::error::TodoResult;

#[derive(Clone)]
pub struct PgTodoRepository {
    pool: PgPool,
}

impl PgTodoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl TodoRepository for PgTodoRepository {
    async fn create(&self, todo: &Todo) -> TodoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO todos (
                todo_id,
                owner_id,
                text,
                completed,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(todo.todo_id.as_uuid())
        .bind(todo.owner_id.as_uuid())
        .bind(todo.text.as_str())
        .bind(todo.completed)
        .bind(todo.created_at)
        .bind(todo.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_owner(&self, owner_id: UserId) -> TodoResult<Vec<Todo>> {
        let rows = sqlx::query_as::<_, TodoRow>(
            r#"
            SELECT todo_id, owner_id, text, completed, created_at, updated_at
            FROM todos
            WHERE owner_id = $1
            ORDER BY created_at, todo_id
            "#,
        )
        .bind(owner_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TodoRow::into_todo).collect())
    }

    async fn update_for_owner(
        &self,
        owner_id: UserId,
        todo_id: TodoId,
        patch: &TodoPatch,
    ) -> TodoResult<Option<Todo>> {
        let row = sqlx::query_as::<_, TodoRow>(
            r#"
            UPDATE todos
            SET
                text = COALESCE($3, text),
                completed = COALESCE($4, completed),
                updated_at = NOW()
            WHERE todo_id = $1 AND owner_id = $2
            RETURNING todo_id, owner_id, text, completed, created_at, updated_at
            "#,
        )
        .bind(todo_id.as_uuid())
        .bind(owner_id.as_uuid())
        .bind(patch.text.as_ref().map(TodoText::as_str))
        .bind(patch.completed)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(TodoRow::into_todo))
    }

    async fn delete_for_owner(&self, owner_id: UserId, todo_id: TodoId) -> TodoResult<bool> {
        let result = sqlx::query("DELETE FROM todos WHERE todo_id = $1 AND owner_id = $2")
            .bind(todo_id.as_uuid())
            .bind(owner_id.as_uuid())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct TodoRow {
    todo_id: Uuid,
    owner_id: Uuid,
    text: String,
    completed: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TodoRow {
    fn into_todo(self) -> Todo {
        Todo {
            todo_id: TodoId::from_uuid(self.todo_id),
            owner_id: UserId::from_uuid(self.owner_id),
            text: TodoText::from_db(self.text),
            completed: self.completed,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
