use std::sync::Arc;

use tracing::info;

use crate::day::domain::{CreateDay, UpdateDay};
use crate::day::repository::DayRepository;
use crate::errors::ServiceError;

const ENTITY: &str = "Day";

pub struct DayService<R: DayRepository> {
    repo: Arc<R>,
}

impl<R: DayRepository> DayService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> Result<models::day::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: CreateDay) -> Result<models::day::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "created day");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateDay,
    ) -> Result<models::day::Model, ServiceError> {
        self.get(id).await?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "updated day");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<models::day::Model, ServiceError> {
        self.get(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "deleted day");
        Ok(deleted)
    }
}
