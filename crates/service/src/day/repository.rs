use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::day::domain::{CreateDay, UpdateDay};
use crate::errors::ServiceError;
use models::day::{self, Entity as DayEntity};

#[async_trait]
pub trait DayRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<day::Model>, ServiceError>;
    async fn create(&self, input: CreateDay) -> Result<day::Model, ServiceError>;
    async fn update(&self, id: i32, input: UpdateDay) -> Result<Option<day::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<day::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmDayRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl DayRepository for SeaOrmDayRepository {
    async fn get(&self, id: i32) -> Result<Option<day::Model>, ServiceError> {
        let found = DayEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn create(&self, input: CreateDay) -> Result<day::Model, ServiceError> {
        let created = day::create(&self.db, &input.name).await?;
        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateDay) -> Result<Option<day::Model>, ServiceError> {
        let current = DayEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: day::ActiveModel = existing.into();
        if let Some(name) = input.name {
            day::validate_name(&name)?;
            am.name = Set(name);
        }
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<day::Model>, ServiceError> {
        let current = DayEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        DayEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
