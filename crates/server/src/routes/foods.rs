use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::food::domain::{CreateFood, UpdateFood};
use service::food::repository::SeaOrmFoodRepository;
use service::food::service::FoodService;

const ENTITY: &str = "Food";

fn food_service(state: &ServerState) -> FoodService<SeaOrmFoodRepository> {
    FoodService::new(Arc::new(SeaOrmFoodRepository { db: state.db.clone() }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::food::Model>, ApiError> {
    info!(id, "fetch food");
    let food = food_service(&state)
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(food))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateFood>,
) -> Result<(StatusCode, Json<models::food::Model>), ApiError> {
    info!(name = %input.name, creator_id = input.creator_id, "create food");
    let created = food_service(&state)
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateFood>,
) -> Result<Json<models::food::Model>, ApiError> {
    info!(id, "update food");
    let updated = food_service(&state)
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::food::Model>, ApiError> {
    info!(id, "delete food");
    let deleted = food_service(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(deleted))
}
