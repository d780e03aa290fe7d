use axum::{
    extract::{Path, State},
    Json,
};
use repository::Repository;

pub mod response;

use crate::response::{ApiResponse, IntoApiResponse};
use crate::{ApiError, ErrorResp};

use self::response::PromptResp;

/// List all prompts, newest first
#[utoipa::path(
    get,
    path = "/prompts",
    responses(
        (status = 200, description = "List all prompts successfully", body = [PromptResp])
    )
)]
pub async fn get_prompts(
    State(repo): State<Repository>,
) -> ApiResponse<Json<Vec<PromptResp>>> {
    let prompts = repo
        .prompt
        .find_all_with_count()
        .await
        .into_response("find all prompts")?;

    Ok(Json(prompts.into_iter().map(PromptResp::from).collect()))
}

/// Get a prompt
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    responses(
        (status = 200, description = "Get a prompt successfully", body = PromptResp),
        (status = 404, description = "Prompt not found", body = ErrorResp),
    ),
    params(
        ("id" = String, Path, description = "prompt id"),
    )
)]
pub async fn get_prompt(
    State(repo): State<Repository>,
    Path(id): Path<String>,
) -> ApiResponse<Json<PromptResp>> {
    let prompt = repo
        .prompt
        .find_by_id_with_count(&id)
        .await
        .into_response("find prompt by id")?;

    let Some(prompt) = prompt else {
        return Err(ApiError::NotFoundError("Prompt not found".to_string()));
    };

    Ok(Json(PromptResp::from(prompt)))
}
