pub use sea_orm_migration::prelude::*;

mod m20241005_000001_create_user_table;
mod m20241005_000002_create_prompt_table;
mod m20241005_000003_create_comment_table;
mod m20241005_000004_create_index_at_comment;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241005_000001_create_user_table::Migration),
            Box::new(m20241005_000002_create_prompt_table::Migration),
            Box::new(m20241005_000003_create_comment_table::Migration),
            Box::new(m20241005_000004_create_index_at_comment::Migration),
        ]
    }
}
