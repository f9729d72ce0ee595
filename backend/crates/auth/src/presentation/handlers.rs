//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use kernel::error::app_error::AppError;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::{
    CredentialStore, LoginInput, LoginUseCase, RegisterInput, TokenService,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    fn credentials(&self) -> CredentialStore<R> {
        CredentialStore::new(self.repo.clone(), self.config.clone())
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /register
///
/// Does not log the user in; the client calls `/login` afterwards.
pub async fn register<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> AuthResult<impl IntoResponse>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let input = RegisterInput {
        user_name: req.username,
        password: req.password,
    };

    let user = state.credentials().register(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered".to_string(),
            user_id: user.user_id.to_string(),
        }),
    ))
}

// ============================================================================
// Login
// ============================================================================

/// POST /login
pub async fn login<R>(
    State(state): State<AuthAppState<R>>,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, AppError>,
) -> AuthResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(state.credentials(), state.tokens.clone());

    let output = use_case
        .execute(LoginInput {
            user_name: req.username,
            password: req.password,
        })
        .await?;

    Ok(Json(LoginResponse {
        token: output.token,
        expires_at: output.expires_at,
    }))
}
