use crate::ApiError;

pub(super) async fn get_404() -> ApiError {
    ApiError::NotFoundError("Not found".to_string())
}
