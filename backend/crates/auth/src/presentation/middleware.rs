//! Auth Middleware
//!
//! Bearer-token gate for protected routes. The verified subject is placed
//! in request extensions as a [`Principal`]; handlers take the caller's
//! identity from there and nowhere else.

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{HeaderMap, header, request::Parts};
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

use crate::application::TokenService;
use crate::domain::value_object::UserId;
use crate::error::{AuthError, AuthResult};

/// Authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
}

/// Require a valid token.
///
/// Missing header → 401, anything present but unverifiable → 403.
///
/// ```ignore
/// router.route_layer(axum::middleware::from_fn_with_state(tokens, require_token))
/// ```
pub async fn require_token(
    State(tokens): State<Arc<TokenService>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user_id = {
        let token = bearer_token(req.headers())?;
        tokens.verify(token)?
    };

    tracing::debug!(user_id = %user_id, "Request authenticated");
    req.extensions_mut().insert(Principal { user_id });

    Ok(next.run(req).await)
}

/// Read the token from `Authorization`.
///
/// The raw token is the primary form; a `Bearer ` prefix is tolerated.
pub fn bearer_token(headers: &HeaderMap) -> AuthResult<&str> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::TokenInvalid)?
        .trim();

    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => value,
    };

    if token.is_empty() || token.eq_ignore_ascii_case("bearer") {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}

/// Extract the caller set by [`require_token`].
///
/// Fails closed: without the middleware there is no principal and the
/// request is rejected.
impl<S> FromRequestParts<S> for Principal
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .copied()
            .ok_or(AuthError::MissingToken)
    }
}
