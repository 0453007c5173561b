use std::sync::Arc;

use tracing::info;

use crate::errors::ServiceError;
use crate::food_availability::domain::{CreateFoodAvailability, UpdateFoodAvailability};
use crate::food_availability::repository::FoodAvailabilityRepository;

const ENTITY: &str = "FoodAvailability";

pub struct FoodAvailabilityService<R: FoodAvailabilityRepository> {
    repo: Arc<R>,
}

impl<R: FoodAvailabilityRepository> FoodAvailabilityService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn get(&self, id: i32) -> Result<models::food_availability::Model, ServiceError> {
        self.repo
            .get(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))
    }

    pub async fn create(
        &self,
        input: CreateFoodAvailability,
    ) -> Result<models::food_availability::Model, ServiceError> {
        let created = self.repo.create(input).await?;
        info!(id = created.id, "created food availability");
        Ok(created)
    }

    pub async fn update(
        &self,
        id: i32,
        input: UpdateFoodAvailability,
    ) -> Result<models::food_availability::Model, ServiceError> {
        self.get(id).await?;
        let updated = self
            .repo
            .update(id, input)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "updated food availability");
        Ok(updated)
    }

    pub async fn delete(&self, id: i32) -> Result<models::food_availability::Model, ServiceError> {
        self.get(id).await?;
        let deleted = self
            .repo
            .delete(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(ENTITY, id))?;
        info!(id, "deleted food availability");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::food_availability::repository::SeaOrmFoodAvailabilityRepository;
    use crate::test_support::get_db;
    use sea_orm::EntityTrait;
    use uuid::Uuid;

    #[tokio::test]
    async fn availability_chain_against_database() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };

        let creator = models::user::create(
            &db,
            &format!("fa_user_{}", Uuid::new_v4()),
            &format!("fa_{}@example.com", Uuid::new_v4()),
            "pw",
        )
        .await?;
        let monday = models::day::create(&db, &format!("fa_day_{}", Uuid::new_v4())).await?;
        let soup = models::food::create(&db, "Soup", 5.0, None, creator.id, Some(monday.id), None)
            .await?;

        let svc = FoodAvailabilityService::new(Arc::new(SeaOrmFoodAvailabilityRepository {
            db: db.clone(),
        }));

        let slot = svc
            .create(CreateFoodAvailability { food_id: soup.id, day_id: monday.id })
            .await?;
        let fetched = svc.get(slot.id).await?;
        assert_eq!(fetched.food_id, soup.id);
        assert_eq!(fetched.day_id, monday.id);

        // Duplicate (food_id, day_id) hits the unique index and surfaces as
        // a storage error, not a NotFound
        let dup = svc
            .create(CreateFoodAvailability { food_id: soup.id, day_id: monday.id })
            .await;
        assert!(matches!(dup, Err(ServiceError::Model(_) | ServiceError::Db(_))));

        let snapshot = svc.delete(slot.id).await?;
        assert_eq!(snapshot, fetched);
        assert!(matches!(
            svc.get(slot.id).await.unwrap_err(),
            ServiceError::NotFound(_)
        ));

        // cleanup
        models::food::Entity::delete_by_id(soup.id).exec(&db).await?;
        models::user::Entity::delete_by_id(creator.id).exec(&db).await?;
        models::day::Entity::delete_by_id(monday.id).exec(&db).await?;
        Ok(())
    }
}
