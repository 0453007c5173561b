use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::user::domain::{CreateUser, UpdateUser};
use crate::user::repository::UserRepository;

const ENTITY: &str = "User";

/// Application service enforcing the existence precondition on update/delete.
pub struct UserService<R: UserRepository> {
    repo: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> Result<models::user::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(&self, input: CreateUser) -> Result<models::user::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "created user");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateUser,
    ) -> Result<models::user::Model, ServiceError> {
        self.get(id).await?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "updated user");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<models::user::Model, ServiceError> {
        self.get(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "deleted user");
        Ok(deleted)
    }
}
