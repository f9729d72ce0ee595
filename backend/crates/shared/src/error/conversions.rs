//! Error conversions - HTTP integration for [`AppError`]

use super::app_error::AppError;

// ============================================================================
// Axum conversions
// ============================================================================

/// Rejections from `Json<T>` become `400 {message}`.
///
/// Used with `axum_extra::extract::WithRejection<Json<T>, AppError>`.
#[cfg(feature = "axum")]
impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(rejection: axum::extract::rejection::JsonRejection) -> Self {
        AppError::bad_request(rejection.body_text())
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Problem-details shape; `message` is what clients read
        let body = serde_json::json!({
            "type": format!("https://httpstatuses.io/{}", self.status_code()),
            "title": self.kind().as_str(),
            "status": self.status_code(),
            "message": self.public_message(),
            "action": self.action(),
        });

        (status, Json(body)).into_response()
    }
}

#[cfg(all(test, feature = "axum"))]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::response::{IntoResponse, Response};

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_into_response_hides_server_detail() {
        let response = AppError::internal("pool exploded at 10.0.0.3").into_response();
        assert_eq!(response.status().as_u16(), 500);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["status"], 500);
        assert_eq!(body["title"], "Internal Server Error");

        let text = body.to_string();
        assert!(!text.contains("pool exploded"), "{text}");
        assert!(!text.contains("10.0.0.3"), "{text}");
    }

    #[tokio::test]
    async fn test_into_response_keeps_client_message() {
        let response = AppError::bad_request("Username already exists")
            .with_action("Pick another username")
            .into_response();
        assert_eq!(response.status().as_u16(), 400);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Username already exists");
        assert_eq!(body["action"], "Pick another username");
        assert_eq!(body["type"], "https://httpstatuses.io/400");
    }
}
