//! Router Assembly
//!
//! Public auth routes plus the token-gated todo routes, over any pair of
//! repositories. HTTP-level layers are applied separately so tests can
//! drive the bare router.

use auth::{AuthConfig, TokenService, UserRepository, auth_router};
use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use std::sync::Arc;
use todo::{TodoRepository, todo_router};
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn build_router<U, T>(users: U, todos: T, auth_config: AuthConfig) -> Router
where
    U: UserRepository + Clone + Send + Sync + 'static,
    T: TodoRepository + Clone + Send + Sync + 'static,
{
    let tokens = Arc::new(TokenService::new(&auth_config));
    let auth_config = Arc::new(auth_config);

    Router::new()
        .merge(auth_router(users, auth_config, tokens.clone()))
        .merge(todo_router(todos, tokens))
}

/// Request tracing and CORS for the browser frontend
pub fn with_http_layers(router: Router, frontend_origins: &[String]) -> Router {
    let allowed_origins: Vec<HeaderValue> = frontend_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]));

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
