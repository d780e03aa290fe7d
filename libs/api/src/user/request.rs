use serde::Deserialize;
use utoipa::ToSchema;

use crate::util::request::string_or_none;

#[derive(Deserialize, ToSchema)]
pub struct PostUserReq {
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,
}
