use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::day::domain::{CreateDay, UpdateDay};
use service::day::repository::SeaOrmDayRepository;
use service::day::service::DayService;

const ENTITY: &str = "Day";

fn day_service(state: &ServerState) -> DayService<SeaOrmDayRepository> {
    DayService::new(Arc::new(SeaOrmDayRepository { db: state.db.clone() }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::day::Model>, ApiError> {
    info!(id, "fetch day");
    let day = day_service(&state)
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(day))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateDay>,
) -> Result<(StatusCode, Json<models::day::Model>), ApiError> {
    info!(name = %input.name, "create day");
    let created = day_service(&state)
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateDay>,
) -> Result<Json<models::day::Model>, ApiError> {
    info!(id, "update day");
    let updated = day_service(&state)
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::day::Model>, ApiError> {
    info!(id, "delete day");
    let deleted = day_service(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(deleted))
}
