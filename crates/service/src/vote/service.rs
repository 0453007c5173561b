use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::vote::domain::{CreateVote, UpdateVote};
use crate::vote::repository::VoteRepository;

const ENTITY: &str = "Vote";

pub struct VoteService<R: VoteRepository> {
    repo: Arc<R>,
}

impl<R: VoteRepository> VoteService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> Result<models::vote::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: CreateVote) -> Result<models::vote::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "created vote");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateVote,
    ) -> Result<models::vote::Model, ServiceError> {
        self.get(id).await?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "updated vote");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<models::vote::Model, ServiceError> {
        self.get(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "deleted vote");
        Ok(deleted)
    }
}
