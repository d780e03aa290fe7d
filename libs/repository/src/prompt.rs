use std::collections::HashMap;

use chrono::{DateTime, Utc};
use entity::prompt::PromptWithCount;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait,
    DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use tracing::info;

use crate::active_models::{prelude::*, *};
use crate::new_id;
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct PromptRepository {
    db: DatabaseConnection,
}

impl PromptRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<prompt::Model> for PromptEntity {
    fn from(value: prompt::Model) -> Self {
        PromptEntity {
            id: value.id,
            title: value.title,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<PromptEntity> for prompt::ActiveModel {
    fn from(value: PromptEntity) -> Self {
        Self {
            id: if value.id.is_empty() {
                ActiveValue::Set(new_id())
            } else {
                ActiveValue::Set(value.id)
            },
            title: ActiveValue::Set(value.title),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl PromptRepository {
    /// All prompts, newest first, each with its comment count.
    pub async fn find_all_with_count(&self) -> Response<Vec<PromptWithCount>> {
        let prompts = Prompt::find()
            .order_by_desc(prompt::Column::CreatedAt)
            .all(&self.db)
            .await
            .into_response("in find all prompts")?;

        let counts: HashMap<String, i64> = Comment::find()
            .select_only()
            .column(comment::Column::PromptId)
            .column_as(
                Expr::col(comment::Column::Id).count(),
                "comment_count",
            )
            .group_by(comment::Column::PromptId)
            .into_tuple::<(String, i64)>()
            .all(&self.db)
            .await
            .into_response("in count comments per prompt")?
            .into_iter()
            .collect();

        Ok(prompts
            .into_iter()
            .map(|prompt| {
                let comment_count =
                    counts.get(&prompt.id).copied().unwrap_or_default();
                PromptWithCount {
                    prompt: PromptEntity::from(prompt),
                    comment_count: u64::try_from(comment_count)
                        .unwrap_or_default(),
                }
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: &str) -> Response<Option<PromptEntity>> {
        let prompt = Prompt::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find prompt by id")?;

        Ok(prompt.map(PromptEntity::from))
    }

    pub async fn find_by_id_with_count(
        &self,
        id: &str,
    ) -> Response<Option<PromptWithCount>> {
        let Some(prompt) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        let comment_count = Comment::find()
            .filter(comment::Column::PromptId.eq(id))
            .count(&self.db)
            .await
            .into_response("in count comments of prompt")?;

        Ok(Some(PromptWithCount {
            prompt,
            comment_count,
        }))
    }

    pub async fn create(&self, prompt: PromptEntity) -> Response<PromptEntity> {
        let prompt = prompt::ActiveModel::from(prompt)
            .insert(&self.db)
            .await
            .into_response("in insert prompt")?;

        Ok(PromptEntity::from(prompt))
    }

    /// Inserts a prompt for every title that does not exist yet and returns
    /// the prompts that were created.
    pub async fn seed(&self, titles: &[String]) -> Response<Vec<PromptEntity>> {
        let mut created = vec![];
        for title in titles {
            let existing = Prompt::find()
                .filter(prompt::Column::Title.eq(title.as_str()))
                .one(&self.db)
                .await
                .into_response("in find prompt by title")?;
            if existing.is_some() {
                continue;
            }

            let prompt = self
                .create(PromptEntity {
                    title: title.clone(),
                    ..Default::default()
                })
                .await?;
            info!(task = "seed prompt", id = %prompt.id, title = %prompt.title);
            created.push(prompt);
        }

        Ok(created)
    }
}

#[cfg(test)]
mod test {
    use chrono::{TimeDelta, Utc};
    use entity::prelude::*;

    use crate::test_util::{repository, user_and_prompt};

    #[tokio::test]
    async fn lists_prompts_newest_first_with_counts() {
        // Arrange
        let repo = repository().await;
        let (user, older) = user_and_prompt(&repo).await;
        let newer = repo
            .prompt
            .create(PromptEntity {
                title: "What would you build next?".to_string(),
                created_at: older.created_at + TimeDelta::minutes(5),
                ..Default::default()
            })
            .await
            .unwrap();
        for _ in 0..2 {
            repo.comment
                .create(CommentEntity {
                    content: "a thoughtful reply".to_string(),
                    user_id: user.id.clone(),
                    prompt_id: older.id.clone(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        // Act
        let prompts = repo.prompt.find_all_with_count().await.unwrap();

        // Assert
        let summary: Vec<_> = prompts
            .iter()
            .map(|p| (p.prompt.id.clone(), p.comment_count))
            .collect();
        assert_eq!(summary, vec![(newer.id, 0), (older.id, 2)]);
    }

    #[tokio::test]
    async fn finds_single_prompt_with_count() {
        let repo = repository().await;
        let (_, prompt) = user_and_prompt(&repo).await;

        let found =
            repo.prompt.find_by_id_with_count(&prompt.id).await.unwrap();
        let missing =
            repo.prompt.find_by_id_with_count("missing").await.unwrap();

        assert_eq!(
            found.map(|p| (p.prompt, p.comment_count)),
            Some((prompt, 0))
        );
        assert_eq!(missing, None);
    }

    #[tokio::test]
    async fn seeding_skips_existing_titles() {
        let repo = repository().await;
        let titles = vec![
            "Describe your favourite tool".to_string(),
            "What did you learn today?".to_string(),
        ];

        let first = repo.prompt.seed(&titles).await.unwrap();
        let second = repo.prompt.seed(&titles).await.unwrap();

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
        assert!(first.iter().all(|p| p.created_at <= Utc::now()));
        assert_eq!(repo.prompt.find_all_with_count().await.unwrap().len(), 2);
    }
}
