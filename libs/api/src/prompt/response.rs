use chrono::{DateTime, Utc};
use entity::prompt::PromptWithCount;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromptResp {
    pub id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "_count")]
    pub count: CountResp,
}

#[derive(Serialize, ToSchema)]
pub struct CountResp {
    pub comments: u64,
}

impl From<PromptWithCount> for PromptResp {
    fn from(value: PromptWithCount) -> Self {
        Self {
            id: value.prompt.id,
            title: value.prompt.title,
            created_at: value.prompt.created_at,
            count: CountResp {
                comments: value.comment_count,
            },
        }
    }
}
