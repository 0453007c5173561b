use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use crate::errors::ServiceError;
use crate::food::domain::{CreateFood, UpdateFood};
use models::food::{self, Entity as FoodEntity};

#[async_trait]
pub trait FoodRepository: Send + Sync {
    async fn get(&self, id: i32) -> Result<Option<food::Model>, ServiceError>;
    async fn create(&self, input: CreateFood) -> Result<food::Model, ServiceError>;
    async fn update(&self, id: i32, input: UpdateFood) -> Result<Option<food::Model>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Option<food::Model>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmFoodRepository {
    pub db: DatabaseConnection,
}

#[async_trait]
impl FoodRepository for SeaOrmFoodRepository {
    async fn get(&self, id: i32) -> Result<Option<food::Model>, ServiceError> {
        let found = FoodEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(found)
    }

    async fn create(&self, input: CreateFood) -> Result<food::Model, ServiceError> {
        let created = food::create(
            &self.db,
            &input.name,
            input.price,
            input.description,
            input.creator_id,
            input.day_id,
            input.category_id,
        )
        .await?;
        Ok(created)
    }

    async fn update(&self, id: i32, input: UpdateFood) -> Result<Option<food::Model>, ServiceError> {
        let current = FoodEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        if input.is_empty() {
            return Ok(Some(existing));
        }
        let mut am: food::ActiveModel = existing.into();
        if let Some(name) = input.name {
            food::validate_name(&name)?;
            am.name = Set(name);
        }
        if let Some(price) = input.price {
            food::validate_price(price)?;
            am.price = Set(price);
        }
        if let Some(description) = input.description {
            am.description = Set(description);
        }
        if let Some(creator_id) = input.creator_id {
            am.creator_id = Set(creator_id);
        }
        if let Some(day_id) = input.day_id {
            am.day_id = Set(day_id);
        }
        if let Some(category_id) = input.category_id {
            am.category_id = Set(category_id);
        }
        let updated = am
            .update(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: i32) -> Result<Option<food::Model>, ServiceError> {
        let current = FoodEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        let Some(existing) = current else { return Ok(None) };
        FoodEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))?;
        Ok(Some(existing))
    }
}
