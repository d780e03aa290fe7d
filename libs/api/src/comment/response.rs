use chrono::{DateTime, Utc};
use entity::comment::CommentWithAuthor;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommentResp {
    pub id: String,
    pub content: String,
    pub user_id: String,
    pub prompt_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_edited: bool,
    pub user: AuthorResp,
}

#[derive(Serialize, ToSchema)]
pub struct AuthorResp {
    pub username: String,
}

impl From<CommentWithAuthor> for CommentResp {
    fn from(value: CommentWithAuthor) -> Self {
        let comment = value.comment;
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            prompt_id: comment.prompt_id,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            is_edited: comment.is_edited,
            user: AuthorResp {
                username: value.username,
            },
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetCommentsResp {
    pub comments: Vec<CommentResp>,
    pub total_pages: u64,
    pub current_page: u64,
    pub total_count: u64,
}

#[derive(Serialize, ToSchema)]
pub struct DeleteCommentResp {
    pub message: String,
}
