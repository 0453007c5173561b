use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use crate::food_availability::domain::{CreateFoodAvailability, UpdateFoodAvailability};
use models::food_availability::{self, Entity as FoodAvailabilityEntity};

#[async_trait]
pub trait FoodAvailabilityRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<food_availability::Model>, ServiceError>;
    async fn create(
        &self,
        input: CreateFoodAvailability,
    ) -> Result<food_availability::Model, ServiceError>;
    async fn update(
        &self,
        id: i32,
        input: UpdateFoodAvailability,
    ) -> Result<Option<food_availability::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<food_availability::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmFoodAvailabilityRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FoodAvailabilityRepository for SeaOrmFoodAvailabilityRepository {
    async fn get(&self, id: i32) -> Result<Option<food_availability::Model>, ServiceError> {
        let found = FoodAvailabilityEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn create(
        &self,
        input: CreateFoodAvailability,
    ) -> Result<food_availability::Model, ServiceError> {
        let created = food_availability::create(&self.db, input.food_id, input.day_id).await?;
        Ok(created)
    }

    async fn update(
        &self,
        id: i32,
        input: UpdateFoodAvailability,
    ) -> Result<Option<food_availability::Model>, ServiceError> {
        let current = FoodAvailabilityEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: food_availability::ActiveModel = existing.into();
        if let Some(food_id) = input.food_id {
            am.food_id = Set(food_id);
        }
        if let Some(day_id) = input.day_id {
            am.day_id = Set(day_id);
        }
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<food_availability::Model>, ServiceError> {
        let current = FoodAvailabilityEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        FoodAvailabilityEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
