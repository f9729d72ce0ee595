//! Todo Router

use auth::{TokenService, require_token};
use axum::{
    Router, middleware,
    routing::{get, put},
};
use std::sync::Arc;

use crate::domain::repository::TodoRepository;
use crate::presentation::handlers::{self, TodoAppState};

/// `/todos` and `/todos/{id}`, every route behind [`require_token`]
pub fn todo_router<R>(repo: R, tokens: Arc<TokenService>) -> Router
where
    R: TodoRepository + Clone + Send + Sync + 'static,
{
    let state = TodoAppState {
        repo: Arc::new(repo),
    };

    Router::new()
        .route(
            "/todos",
            get(handlers::list_todos::<R>).post(handlers::create_todo::<R>),
        )
        .route(
            "/todos/{id}",
            put(handlers::update_todo::<R>).delete(handlers::delete_todo::<R>),
        )
        .route_layer(middleware::from_fn_with_state(tokens, require_token))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::todo::Todo;
    use crate::domain::value_object::{TodoId, todo_patch::TodoPatch};
    use crate::error::{TodoError, TodoResult};
    use crate::infra::memory::InMemoryTodoRepository;
    use crate::presentation::dto::TodoResponse;
    use auth::AuthConfig;
    use kernel::id::UserId;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use tower::ServiceExt;

    struct Harness {
        app: Router,
        tokens: Arc<TokenService>,
    }

    /// Store whose backend is gone: reads fail on a closed pool, writes with
    /// an internal error naming the host
    #[derive(Clone)]
    struct BrokenTodoRepository;

    const BROKEN_DETAIL: &str = "connection to 10.0.0.3:5432 refused";

    impl TodoRepository for BrokenTodoRepository {
        async fn create(&self, _todo: &Todo) -> TodoResult<()> {
            Err(TodoError::Internal(BROKEN_DETAIL.to_string()))
        }

        async fn list_by_owner(&self, _owner_id: UserId) -> TodoResult<Vec<Todo>> {
            Err(TodoError::Database(sqlx::Error::PoolClosed))
        }

        async fn update_for_owner(
            &self,
            _owner_id: UserId,
            _todo_id: TodoId,
            _patch: &TodoPatch,
        ) -> TodoResult<Option<Todo>> {
            Err(TodoError::Database(sqlx::Error::PoolClosed))
        }

        async fn delete_for_owner(&self, _owner_id: UserId, _todo_id: TodoId) -> TodoResult<bool> {
            Err(TodoError::Internal(BROKEN_DETAIL.to_string()))
        }
    }

    impl Harness {
        fn new() -> Self {
            Self::with_repo(InMemoryTodoRepository::new())
        }

        fn with_repo<R>(repo: R) -> Self
        where
            R: TodoRepository + Clone + Send + Sync + 'static,
        {
            let tokens = Arc::new(TokenService::new(&AuthConfig::with_random_secret()));
            Self {
                app: todo_router(repo, tokens.clone()),
                tokens,
            }
        }

        fn token_for(&self, user_id: UserId) -> String {
            self.tokens.issue(user_id).unwrap().token
        }

        async fn send(
            &self,
            method: &str,
            uri: &str,
            token: Option<&str>,
            body: Option<serde_json::Value>,
        ) -> Response {
            let mut request = Request::builder().method(method).uri(uri);
            if let Some(token) = token {
                request = request.header(header::AUTHORIZATION, token);
            }
            let body = match body {
                Some(json) => {
                    request = request.header(header::CONTENT_TYPE, "application/json");
                    Body::from(json.to_string())
                }
                None => Body::empty(),
            };
            self.app
                .clone()
                .oneshot(request.body(body).unwrap())
                .await
                .unwrap()
        }
    }

    async fn json<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_every_route_requires_token() {
        let harness = Harness::new();
        let id = "/todos/00000000-0000-4000-8000-000000000000";

        for (method, uri) in [("GET", "/todos"), ("POST", "/todos"), ("PUT", id), ("DELETE", id)] {
            let response = harness.send(method, uri, None, None).await;
            assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{method} {uri}");

            let response = harness.send(method, uri, Some("not-a-token"), None).await;
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{method} {uri}");
        }
    }

    #[tokio::test]
    async fn test_create_list_update_delete() {
        let harness = Harness::new();
        let user_id = UserId::new();
        let token = harness.token_for(user_id);

        let response = harness
            .send(
                "POST",
                "/todos",
                Some(token.as_str()),
                Some(serde_json::json!({ "text": "buy milk", "userId": UserId::new().to_string() })),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created: TodoResponse = json(response).await;
        assert_eq!(created.user_id, user_id.to_string());
        assert!(!created.completed);

        let listed: Vec<TodoResponse> =
            json(harness.send("GET", "/todos", Some(token.as_str()), None).await).await;
        assert_eq!(listed, vec![created.clone()]);

        let uri = format!("/todos/{}", created.id);
        let response = harness
            .send("PUT", &uri, Some(token.as_str()), Some(serde_json::json!({ "completed": true })))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let updated: TodoResponse = json(response).await;
        assert!(updated.completed);
        assert_eq!(updated.text, "buy milk");

        let response = harness.send("DELETE", &uri, Some(token.as_str()), None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = harness.send("DELETE", &uri, Some(token.as_str()), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unparseable_id_is_not_found() {
        let harness = Harness::new();
        let token = harness.token_for(UserId::new());

        let response = harness
            .send("PUT", "/todos/123", Some(token.as_str()), Some(serde_json::json!({})))
            .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = harness.send("DELETE", "/todos/abc", Some(token.as_str()), None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_bad_bodies_are_bad_request() {
        let harness = Harness::new();
        let token = harness.token_for(UserId::new());

        let response = harness
            .send("POST", "/todos", Some(token.as_str()), Some(serde_json::json!({ "text": "  " })))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = harness
            .send("POST", "/todos", Some(token.as_str()), Some(serde_json::json!({})))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = harness
            .send("POST", "/todos", Some(token.as_str()), Some(serde_json::json!({ "text": 5 })))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_store_failure_is_generic_500() {
        let harness = Harness::with_repo(BrokenTodoRepository);
        let token = harness.token_for(UserId::new());
        let id = "/todos/00000000-0000-4000-8000-000000000000";

        let requests = [
            ("GET", "/todos", None),
            ("POST", "/todos", Some(serde_json::json!({ "text": "buy milk" }))),
            ("PUT", id, Some(serde_json::json!({ "completed": true }))),
            ("DELETE", id, None),
        ];

        for (method, uri, body) in requests {
            let response = harness.send(method, uri, Some(token.as_str()), body).await;
            assert_eq!(
                response.status(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "{method} {uri}"
            );

            let body: serde_json::Value = json(response).await;
            assert_eq!(body["message"], "Internal server error", "{method} {uri}");
            assert_eq!(body["status"], 500);

            let text = body.to_string();
            for leaked in ["10.0.0.3", "5432", "refused", "pool", "Database error", "Internal error:"] {
                assert!(!text.contains(leaked), "{method} {uri} leaked {leaked:?}: {text}");
            }
        }
    }
}
