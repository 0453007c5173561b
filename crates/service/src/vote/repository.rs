use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use crate::vote::domain::{CreateVote, UpdateVote};
use models::vote::{self, Entity as VoteEntity};

#[async_trait]
pub trait VoteRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<vote::Model>, ServiceError>;
    async fn create(&self, input: CreateVote) -> Result<vote::Model, ServiceError>;
    async fn update(&self, id: i32, input: UpdateVote) -> Result<Option<vote::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<vote::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmVoteRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl VoteRepository for SeaOrmVoteRepository {
    async fn get(&self, id: i32) -> Result<Option<vote::Model>, ServiceError> {
        let found = VoteEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn create(&self, input: CreateVote) -> Result<vote::Model, ServiceError> {
        let created =
            vote::create(&self.db, input.user_id, input.food_id, input.vote_value).await?;
        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateVote) -> Result<Option<vote::Model>, ServiceError> {
        let current = VoteEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: vote::ActiveModel = existing.into();
        if let Some(user_id) = input.user_id {
            am.user_id = Set(user_id);
        }
        if let Some(food_id) = input.food_id {
            am.food_id = Set(food_id);
        }
        if let Some(vote_value) = input.vote_value {
            am.vote_value = Set(vote_value);
        }
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<vote::Model>, ServiceError> {
        let current = VoteEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        VoteEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
