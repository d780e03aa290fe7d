use axum::{extract::State, http::StatusCode, Json};
use entity::{prelude::*, user::Username};
use repository::{Repository, RepositoryError};
use tracing::info;

use crate::{
    response::{ApiResponse, IntoApiResponse},
    util::request::JsonBody,
    ApiError, ErrorResp,
};

use self::{request::PostUserReq, response::UserResp};

pub mod request;
pub mod response;

fn username_taken() -> ApiError {
    ApiError::ConflictError("Username already exists".to_string())
}

/// Register a username
#[utoipa::path(
    post,
    path = "/user",
    request_body = PostUserReq,
    responses(
        (status = 201, description = "User created", body = UserResp),
        (status = 400, description = "Missing or malformed username", body = ErrorResp),
        (status = 409, description = "Username already exists", body = ErrorResp),
    )
)]
pub async fn post_user(
    State(repo): State<Repository>,
    JsonBody(body): JsonBody<PostUserReq>,
) -> ApiResponse<(StatusCode, Json<UserResp>)> {
    let username = Username::parse(body.username.as_deref())?;

    let existing = repo
        .user
        .find_by_username(username.as_str())
        .await
        .into_response("find user by username")?;
    if existing.is_some() {
        return Err(username_taken());
    }

    let user = match repo
        .user
        .create(UserEntity {
            username: username.into_inner(),
            ..Default::default()
        })
        .await
    {
        Ok(user) => user,
        Err(RepositoryError::UniqueViolation { .. }) => {
            return Err(username_taken())
        }
        Err(e) => return Err(e).into_response("create user"),
    };

    info!(
        task = "register user",
        id = %user.id,
        username = %user.username
    );

    Ok((StatusCode::CREATED, Json(UserResp::from(user))))
}
