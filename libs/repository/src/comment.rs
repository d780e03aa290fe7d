use chrono::{DateTime, Utc};
use entity::comment::CommentWithAuthor;
use entity::pagination::{PageRequest, SortOrder};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::active_models::{prelude::*, *};
use crate::new_id;
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct CommentRepository {
    db: DatabaseConnection,
}

impl CommentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<comment::Model> for CommentEntity {
    fn from(value: comment::Model) -> Self {
        CommentEntity {
            id: value.id,
            content: value.content,
            user_id: value.user_id,
            prompt_id: value.prompt_id,
            is_edited: value.is_edited,
            created_at: value.created_at.and_utc(),
            updated_at: value.updated_at.and_utc(),
        }
    }
}

impl From<CommentEntity> for comment::ActiveModel {
    fn from(value: CommentEntity) -> Self {
        let now = Utc::now().naive_utc();
        let created_at = if value.created_at == DateTime::<Utc>::default() {
            now
        } else {
            value.created_at.naive_utc()
        };

        Self {
            id: if value.id.is_empty() {
                ActiveValue::Set(new_id())
            } else {
                ActiveValue::Set(value.id)
            },
            content: ActiveValue::Set(value.content),
            user_id: ActiveValue::Set(value.user_id),
            prompt_id: ActiveValue::Set(value.prompt_id),
            is_edited: ActiveValue::Set(value.is_edited),
            created_at: ActiveValue::Set(created_at),
            updated_at: if value.updated_at == DateTime::<Utc>::default() {
                ActiveValue::Set(created_at)
            } else {
                ActiveValue::Set(value.updated_at.naive_utc())
            },
        }
    }
}

fn with_author(
    (comment, user): (comment::Model, Option<user::Model>),
) -> CommentWithAuthor {
    CommentWithAuthor {
        comment: CommentEntity::from(comment),
        username: user.map(|user| user.username).unwrap_or_default(),
    }
}

impl CommentRepository {
    /// One page of a prompt's comments, each joined with its author.
    pub async fn find_paginate(
        &self,
        prompt_id: &str,
        request: &PageRequest,
    ) -> Response<Vec<CommentWithAuthor>> {
        let order = match request.sort {
            SortOrder::Newest => Order::Desc,
            SortOrder::Oldest => Order::Asc,
        };

        let comments = Comment::find()
            .find_also_related(User)
            .filter(comment::Column::PromptId.eq(prompt_id))
            .order_by(comment::Column::CreatedAt, order)
            .offset(request.offset())
            .limit(request.limit)
            .all(&self.db)
            .await
            .into_response("in find paginated comments")?;

        Ok(comments.into_iter().map(with_author).collect())
    }

    pub async fn count_by_prompt_id(&self, prompt_id: &str) -> Response<u64> {
        Comment::find()
            .filter(comment::Column::PromptId.eq(prompt_id))
            .count(&self.db)
            .await
            .into_response("in count comments of prompt")
    }

    pub async fn find_by_id(
        &self,
        id: &str,
    ) -> Response<Option<CommentEntity>> {
        let comment = Comment::find_by_id(id)
            .one(&self.db)
            .await
            .into_response("in find comment by id")?;

        Ok(comment.map(CommentEntity::from))
    }

    pub async fn find_with_author(
        &self,
        id: &str,
    ) -> Response<Option<CommentWithAuthor>> {
        let comment = Comment::find_by_id(id)
            .find_also_related(User)
            .one(&self.db)
            .await
            .into_response("in find comment with author")?;

        Ok(comment.map(with_author))
    }

    pub async fn create(
        &self,
        comment: CommentEntity,
    ) -> Response<CommentEntity> {
        let comment = comment::ActiveModel::from(comment)
            .insert(&self.db)
            .await
            .into_response("in insert comment")?;

        Ok(CommentEntity::from(comment))
    }

    /// Replaces the content and marks the comment as edited. `created_at` is
    /// left untouched.
    pub async fn update_content(
        &self,
        id: &str,
        content: String,
    ) -> Response<CommentEntity> {
        let comment = comment::ActiveModel {
            id: ActiveValue::Unchanged(id.to_string()),
            content: ActiveValue::Set(content),
            is_edited: ActiveValue::Set(true),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .update(&self.db)
        .await
        .into_response("in update comment")?;

        Ok(CommentEntity::from(comment))
    }

    pub async fn delete(&self, id: &str) -> Response<()> {
        comment::Entity::delete(comment::ActiveModel {
            id: ActiveValue::Set(id.to_string()),
            ..Default::default()
        })
        .exec(&self.db)
        .await
        .into_response("in delete comment")?;

        Ok(())
    }
}
