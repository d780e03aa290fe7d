use comment::CommentRepository;
use migration::Migrator;
use migration::MigratorTrait;
use prompt::PromptRepository;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;
use user::UserRepository;

use crate::response::{IntoResponse, Response};

mod active_models;
pub mod comment;
pub mod prompt;
mod response;
pub mod user;

#[derive(Clone, Debug)]
pub struct Repository {
    pub user: UserRepository,
    pub prompt: PromptRepository,
    pub comment: CommentRepository,
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(
        "in sea-orm crate from unsuccessful database operations: {}: {}",
        message,
        source
    )]
    InSeaOrmDbErr {
        message: String,
        source: sea_orm::DbErr,
    },

    #[error("unique constraint violated: {}: {}", message, source)]
    UniqueViolation {
        message: String,
        source: sea_orm::DbErr,
    },
}

impl Repository {
    pub async fn new(db_url: &str) -> Result<Self, RepositoryError> {
        let mut opt = ConnectOptions::new(db_url);
        opt.max_connections(5)
            .min_connections(1)
            .sqlx_logging(true)
            .sqlx_logging_level(log::LevelFilter::Debug);

        Self::connect(opt).await
    }

    /// Connects with caller-supplied options and brings the schema up to
    /// date.
    pub async fn connect(opt: ConnectOptions) -> Result<Self, RepositoryError> {
        let db = init_db(opt).await?;

        Ok(Self::from_connection(db))
    }

    pub fn from_connection(db: DatabaseConnection) -> Self {
        Self {
            user: UserRepository::new(db.clone()),
            prompt: PromptRepository::new(db.clone()),
            comment: CommentRepository::new(db),
        }
    }
}

async fn init_db(opt: ConnectOptions) -> Response<DatabaseConnection> {
    info!(task = "connect database");

    let db = Database::connect(opt)
        .await
        .into_response("in database connect")?;

    Migrator::up(&db, None)
        .await
        .into_response("in migrator up")?;

    Ok(db)
}

/// Fresh identifier for a new row.
pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
