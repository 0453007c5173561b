use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use crate::user::domain::{CreateUser, UpdateUser};
use models::user::{self, Entity as UserEntity};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
    async fn create(&self, input: CreateUser) -> Result<user::Model, ServiceError>;
    async fn update(&self, id: i32, input: UpdateUser) -> Result<Option<user::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<user::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn get(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        let found = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn create(&self, input: CreateUser) -> Result<user::Model, ServiceError> {
        let created =
            user::create(&self.db, &input.username, &input.email, &input.password).await?;
        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateUser) -> Result<Option<user::Model>, ServiceError> {
        let current = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: user::ActiveModel = existing.into();
        if let Some(username) = input.username {
            user::validate_username(&username)?;
            am.username = Set(username);
        }
        if let Some(email) = input.email {
            user::validate_email(&email)?;
            am.email = Set(email);
        }
        if let Some(password) = input.password {
            am.hashed_password = Set(password);
        }
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<user::Model>, ServiceError> {
        let current = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
