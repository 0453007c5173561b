use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::food::domain::{CreateFood, UpdateFood};
use crate::food::repository::FoodRepository;

const ENTITY: &str = "Food";

pub struct FoodService<R: FoodRepository> {
    repo: Arc<R>,
}

impl<R: FoodRepository> FoodService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> Result<models::food::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: CreateFood) -> Result<models::food::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "created food");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateFood,
    ) -> Result<models::food::Model, ServiceError> {
        self.get(id).await?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "updated food");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<models::food::Model, ServiceError> {
        self.get(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "deleted food");
        Ok(deleted)
    }
}
