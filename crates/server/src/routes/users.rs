use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::user::domain::{CreateUser, UpdateUser};
use service::user::repository::SeaOrmUserRepository;
use service::user::service::UserService;

const ENTITY: &str = "User";

fn user_service(state: &ServerState) -> UserService<SeaOrmUserRepository> {
    UserService::new(Arc::new(SeaOrmUserRepository { db: state.db.clone() }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::user::Model>, ApiError> {
    info!(id, "fetch user");
    let user = user_service(&state)
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(user))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateUser>,
) -> Result<(StatusCode, Json<models::user::Model>), ApiError> {
    info!(email = %input.email, "create user");
    let created = user_service(&state)
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateUser>,
) -> Result<Json<models::user::Model>, ApiError> {
    info!(id, "update user");
    let updated = user_service(&state)
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::user::Model>, ApiError> {
    info!(id, "delete user");
    let deleted = user_service(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(deleted))
}
