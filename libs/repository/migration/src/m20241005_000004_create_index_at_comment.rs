use sea_orm_migration::prelude::*;

use crate::m20241005_000003_create_comment_table::Comment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Comment::Table)
                    .name("idx_comment_prompt_id_created_at")
                    .col(Comment::PromptId)
                    .col(Comment::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .table(Comment::Table)
                    .name("idx_comment_prompt_id_created_at")
                    .to_owned(),
            )
            .await
    }
}
