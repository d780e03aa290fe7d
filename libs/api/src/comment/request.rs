use serde::Deserialize;
use serde_with::serde_as;
use serde_with::DisplayFromStr;
use utoipa::{IntoParams, ToSchema};

use crate::util::request::string_or_none;

#[serde_as]
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetCommentsParam {
    /// 1-based page number, defaults to 1
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub page: Option<u64>,
    /// Comments per page, defaults to 20
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub limit: Option<u64>,
    /// `newest` (default) or `oldest`
    pub sort: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PostCommentReq {
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub username: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct PutCommentReq {
    #[serde(default, deserialize_with = "string_or_none")]
    pub content: Option<String>,
}
