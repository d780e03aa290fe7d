use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, QueryFilter,
};

use crate::active_models::{prelude::*, *};
use crate::new_id;
use crate::response::{IntoResponse, Response};
use entity::prelude::*;

#[derive(Clone, Debug)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl From<user::Model> for UserEntity {
    fn from(value: user::Model) -> Self {
        UserEntity {
            id: value.id,
            username: value.username,
            created_at: value.created_at.and_utc(),
        }
    }
}

impl From<UserEntity> for user::ActiveModel {
    fn from(value: UserEntity) -> Self {
        Self {
            id: if value.id.is_empty() {
                ActiveValue::Set(new_id())
            } else {
                ActiveValue::Set(value.id)
            },
            username: ActiveValue::Set(value.username),
            created_at: if value.created_at == DateTime::<Utc>::default() {
                ActiveValue::Set(Utc::now().naive_utc())
            } else {
                ActiveValue::Set(value.created_at.naive_utc())
            },
        }
    }
}

impl UserRepository {
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Response<Option<UserEntity>> {
        let user = User::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await
            .into_response("in find user by username")?;

        Ok(user.map(UserEntity::from))
    }

    /// Inserts a new user. A taken username surfaces as
    /// `RepositoryError::UniqueViolation`.
    pub async fn create(&self, user: UserEntity) -> Response<UserEntity> {
        let user = user::ActiveModel::from(user)
            .insert(&self.db)
            .await
            .into_response("in insert user")?;

        Ok(UserEntity::from(user))
    }
}

#[cfg(test)]
mod test {
    use entity::prelude::UserEntity;

    use crate::{test_util::repository, RepositoryError};

    #[tokio::test]
    async fn creates_and_finds_user_by_username() {
        // Arrange
        let repo = repository().await;

        // Act
        let created = repo
            .user
            .create(UserEntity {
                username: "alice123".to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
        let found = repo.user.find_by_username("alice123").await.unwrap();

        // Assert
        assert!(!created.id.is_empty());
        assert_eq!(found, Some(created));
        assert_eq!(repo.user.find_by_username("bob").await.unwrap(), None);
    }

    #[tokio::test]
    async fn duplicate_username_is_a_unique_violation() {
        let repo = repository().await;
        let user = UserEntity {
            username: "alice123".to_string(),
            ..Default::default()
        };

        repo.user.create(user.clone()).await.unwrap();
        let duplicate = repo.user.create(user).await;

        assert!(matches!(
            duplicate,
            Err(RepositoryError::UniqueViolation { .. })
        ));
    }
}
