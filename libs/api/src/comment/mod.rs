use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use entity::{
    comment::{CommentWithAuthor, Content},
    pagination::PageRequest,
    prelude::*,
};
use repository::Repository;
use tracing::info;

pub mod request;
pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::util::request::{JsonBody, QueryParams};
use crate::{ApiError, ErrorResp};
use entity::error::ValidationError;

use self::{
    request::{GetCommentsParam, PostCommentReq, PutCommentReq},
    response::{CommentResp, DeleteCommentResp, GetCommentsResp},
};

fn comment_not_found() -> ApiError {
    ApiError::NotFoundError("Comment not found".to_string())
}

/// List a page of a prompt's comments
#[utoipa::path(
    get,
    path = "/prompts/{id}/comments",
    responses(
        (status = 200, description = "List comments successfully", body = GetCommentsResp),
        (status = 400, description = "Malformed paging parameters", body = ErrorResp),
    ),
    params(
        ("id" = String, Path, description = "prompt id"),
        GetCommentsParam
    )
)]
pub async fn get_comments(
    State(repo): State<Repository>,
    Path(prompt_id): Path<String>,
    QueryParams(params): QueryParams<GetCommentsParam>,
) -> ApiResponse<Json<GetCommentsResp>> {
    let request =
        PageRequest::new(params.page, params.limit, params.sort.as_deref())?;

    let (comments, total_count) = tokio::try_join!(
        repo.comment.find_paginate(&prompt_id, &request),
        repo.comment.count_by_prompt_id(&prompt_id),
    )
    .into_response("find paginated comments")?;

    Ok(Json(GetCommentsResp {
        comments: comments.into_iter().map(CommentResp::from).collect(),
        total_pages: request.total_pages(total_count),
        current_page: request.page,
        total_count,
    }))
}

/// Comment on a prompt
#[utoipa::path(
    post,
    path = "/prompts/{id}/comments",
    request_body = PostCommentReq,
    responses(
        (status = 201, description = "Comment created", body = CommentResp),
        (status = 400, description = "Invalid content or missing username", body = ErrorResp),
        (status = 404, description = "User or prompt not found", body = ErrorResp),
    ),
    params(
        ("id" = String, Path, description = "prompt id"),
    )
)]
pub async fn post_comment(
    State(repo): State<Repository>,
    Path(prompt_id): Path<String>,
    JsonBody(body): JsonBody<PostCommentReq>,
) -> ApiResponse<(StatusCode, Json<CommentResp>)> {
    let content = Content::parse(body.content.as_deref())?;

    // only presence is checked; an unregistered name is a 404 below
    let Some(username) = body.username.filter(|username| !username.is_empty())
    else {
        return Err(ValidationError::UsernameRequired.into());
    };

    let user = repo
        .user
        .find_by_username(&username)
        .await
        .into_response("find user by username")?
        .ok_or_else(|| ApiError::NotFoundError("User not found".to_string()))?;

    let prompt = repo
        .prompt
        .find_by_id(&prompt_id)
        .await
        .into_response("find prompt by id")?
        .ok_or_else(|| {
            ApiError::NotFoundError("Prompt not found".to_string())
        })?;

    let comment = repo
        .comment
        .create(CommentEntity {
            content: content.into_inner(),
            user_id: user.id,
            prompt_id: prompt.id,
            ..Default::default()
        })
        .await
        .into_response("create comment")?;

    info!(
        task = "create comment",
        id = %comment.id,
        prompt_id = %comment.prompt_id
    );

    Ok((
        StatusCode::CREATED,
        Json(CommentResp::from(CommentWithAuthor {
            comment,
            username: user.username,
        })),
    ))
}

/// Edit a comment within 15 minutes of its creation
#[utoipa::path(
    put,
    path = "/comments/{id}",
    request_body = PutCommentReq,
    responses(
        (status = 200, description = "Comment updated", body = CommentResp),
        (status = 400, description = "Invalid content", body = ErrorResp),
        (status = 403, description = "Edit window has passed", body = ErrorResp),
        (status = 404, description = "Comment not found", body = ErrorResp),
    ),
    params(
        ("id" = String, Path, description = "comment id"),
    )
)]
pub async fn put_comment(
    State(repo): State<Repository>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<PutCommentReq>,
) -> ApiResponse<Json<CommentResp>> {
    let content = Content::parse(body.content.as_deref())?;

    let existing = repo
        .comment
        .find_with_author(&id)
        .await
        .into_response("find comment by id")?
        .ok_or_else(comment_not_found)?;

    if !existing.comment.is_editable_at(Utc::now()) {
        info!(task = "reject comment edit", id = %id);
        return Err(ApiError::EditWindowExpired);
    }

    let comment = repo
        .comment
        .update_content(&id, content.into_inner())
        .await
        .into_response("update comment")?;

    info!(task = "edit comment", id = %comment.id);

    Ok(Json(CommentResp::from(CommentWithAuthor {
        comment,
        username: existing.username,
    })))
}

/// Delete a comment
#[utoipa::path(
    delete,
    path = "/comments/{id}",
    responses(
        (status = 200, description = "Comment deleted", body = DeleteCommentResp),
        (status = 404, description = "Comment not found", body = ErrorResp),
    ),
    params(
        ("id" = String, Path, description = "comment id"),
    )
)]
pub async fn delete_comment(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> ApiResponse<Json<DeleteCommentResp>> {
    repo.comment
        .find_by_id(&id)
        .await
        .into_response("find comment by id")?
        .ok_or_else(comment_not_found)?;

    repo.comment
        .delete(&id)
        .await
        .into_response("delete comment")?;

    info!(task = "delete comment", id = %id);

    Ok(Json(DeleteCommentResp {
        message: "Comment deleted successfully".to_string(),
    }))
}
