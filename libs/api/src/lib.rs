use anyhow::Context;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post, put},
    Router,
};
use repository::Repository;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

pub mod comment;
pub mod healthz;
pub mod not_found;
pub mod prompt;
mod response;
pub mod user;
mod util;

pub use response::{ApiResponse, ErrorResp};

#[derive(Debug)]
pub enum ApiError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    EditWindowExpired,
    ServerError,
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: Server,
    #[serde(default)]
    pub cors: Cors,
    #[serde(default)]
    pub seed: Seed,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Server {
    pub port: u16,
}

impl Default for Server {
    fn default() -> Self {
        Self { port: 8000 }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Cors {
    pub allow_origins: Vec<String>,
}

/// Prompts created at start-up unless one with the same title exists.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct Seed {
    pub prompts: Vec<String>,
}

impl Config {
    pub fn from_toml_str(config: &str) -> anyhow::Result<Self> {
        toml::from_str(config).context("failed to parse config")
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        user::post_user,
        prompt::get_prompts,
        prompt::get_prompt,
        comment::get_comments,
        comment::post_comment,
        comment::put_comment,
        comment::delete_comment,
        healthz::get_health,
    ),
    components(schemas(
        user::request::PostUserReq,
        user::response::UserResp,
        prompt::response::PromptResp,
        prompt::response::CountResp,
        comment::request::PostCommentReq,
        comment::request::PutCommentReq,
        comment::response::CommentResp,
        comment::response::AuthorResp,
        comment::response::GetCommentsResp,
        comment::response::DeleteCommentResp,
        ErrorResp,
    )),
    tags(
        (name = "prompt-board", description = "Comments on a fixed set of prompts")
    )
)]
pub struct ApiDoc;

pub async fn serve(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<Router> {
    info!(task = "start api serving");

    repository
        .prompt
        .seed(&config.seed.prompts)
        .await
        .context("failed to seed prompts")?;

    router(repository, config)
}

pub fn router(
    repository: Repository,
    config: &Config,
) -> anyhow::Result<Router> {
    let origins = config
        .cors
        .allow_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<Result<Vec<_>, _>>()
        .context("failed to parse cors origins")?;

    // users
    let user_router = Router::new()
        .route("/", post(user::post_user))
        .with_state(repository.clone());

    // prompts
    let prompt_router = Router::new()
        .route("/", get(prompt::get_prompts))
        .route("/:id", get(prompt::get_prompt))
        .route(
            "/:id/comments",
            get(comment::get_comments).post(comment::post_comment),
        )
        .with_state(repository.clone());

    // comments
    let comment_router = Router::new()
        .route(
            "/:id",
            put(comment::put_comment).delete(comment::delete_comment),
        )
        .with_state(repository);

    let router = Router::new()
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", ApiDoc::openapi()),
        )
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .route("/healthz", get(healthz::get_health))
        .nest("/user", user_router)
        .nest("/prompts", prompt_router)
        .nest("/comments", comment_router)
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .fallback(not_found::get_404);

    Ok(router)
}
