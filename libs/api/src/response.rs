use axum::{http::StatusCode, response::IntoResponse, Json};
use entity::error::ValidationError;
use repository::RepositoryError;
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::ApiError;

/// Body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorResp {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status_code, message) = match self {
            ApiError::ValidationError(message) => {
                (StatusCode::BAD_REQUEST, message)
            }
            ApiError::NotFoundError(message) => {
                (StatusCode::NOT_FOUND, message)
            }
            ApiError::ConflictError(message) => (StatusCode::CONFLICT, message),
            ApiError::EditWindowExpired => (
                StatusCode::FORBIDDEN,
                "Edit time limit exceeded (15 minutes)".to_string(),
            ),
            ApiError::ServerError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        (status_code, Json(ErrorResp { error: message })).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(value: ValidationError) -> Self {
        ApiError::ValidationError(value.to_string())
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, task: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for Result<T, RepositoryError> {
    fn into_response(self, task: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!(task = task, error = %e);
            ApiError::ServerError
        })
    }
}

#[cfg(test)]
mod test {
    use axum::{http::StatusCode, response::IntoResponse};
    use entity::error::ValidationError;
    use http_body_util::BodyExt;
    use rstest::rstest;
    use serde_json::{json, Value};

    use crate::ApiError;

    #[rstest]
    #[case(
        ApiError::from(ValidationError::InvalidUsername),
        StatusCode::BAD_REQUEST,
        "Invalid username format"
    )]
    #[case(
        ApiError::NotFoundError("Comment not found".to_string()),
        StatusCode::NOT_FOUND,
        "Comment not found"
    )]
    #[case(
        ApiError::ConflictError("Username already exists".to_string()),
        StatusCode::CONFLICT,
        "Username already exists"
    )]
    #[case(
        ApiError::EditWindowExpired,
        StatusCode::FORBIDDEN,
        "Edit time limit exceeded (15 minutes)"
    )]
    #[case(
        ApiError::ServerError,
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error"
    )]
    #[tokio::test]
    async fn maps_errors_to_status_and_json_body(
        #[case] error: ApiError,
        #[case] status: StatusCode,
        #[case] message: &str,
    ) {
        let response = error.into_response();

        assert_eq!(response.status(), status);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": message }));
    }
}
