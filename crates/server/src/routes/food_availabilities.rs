use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::food_availability::domain::{CreateFoodAvailability, UpdateFoodAvailability};
use service::food_availability::repository::SeaOrmFoodAvailabilityRepository;
use service::food_availability::service::FoodAvailabilityService;

// Wire-level entity name used in 404 bodies.
const ENTITY: &str = "Food availability";

fn availability_service(
    state: &ServerState,
) -> FoodAvailabilityService<SeaOrmFoodAvailabilityRepository> {
    FoodAvailabilityService::new(Arc::new(SeaOrmFoodAvailabilityRepository {
        db: state.db.clone(),
    }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::food_availability::Model>, ApiError> {
    info!(id, "fetch food availability");
    let slot = availability_service(&state)
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(slot))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateFoodAvailability>,
) -> Result<(StatusCode, Json<models::food_availability::Model>), ApiError> {
    info!(food_id = input.food_id, day_id = input.day_id, "create food availability");
    let created = availability_service(&state)
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateFoodAvailability>,
) -> Result<Json<models::food_availability::Model>, ApiError> {
    info!(id, "update food availability");
    let updated = availability_service(&state)
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::food_availability::Model>, ApiError> {
    info!(id, "delete food availability");
    let deleted = availability_service(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(deleted))
}
