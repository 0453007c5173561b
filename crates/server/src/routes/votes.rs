use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::errors::ApiError;
use crate::routes::ServerState;
use service::vote::domain::{CreateVote, UpdateVote};
use service::vote::repository::SeaOrmVoteRepository;
use service::vote::service::VoteService;

const ENTITY: &str = "Vote";

fn vote_service(state: &ServerState) -> VoteService<SeaOrmVoteRepository> {
    VoteService::new(Arc::new(SeaOrmVoteRepository { db: state.db.clone() }))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::vote::Model>, ApiError> {
    info!(id, "fetch vote");
    let vote = vote_service(&state)
        .get(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(vote))
}

pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateVote>,
) -> Result<(StatusCode, Json<models::vote::Model>), ApiError> {
    info!(user_id = input.user_id, food_id = input.food_id, "create vote");
    let created = vote_service(&state)
        .create(input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<UpdateVote>,
) -> Result<Json<models::vote::Model>, ApiError> {
    info!(id, "update vote");
    let updated = vote_service(&state)
        .update(id, input)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(updated))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<models::vote::Model>, ApiError> {
    info!(id, "delete vote");
    let deleted = vote_service(&state)
        .delete(id)
        .await
        .map_err(|e| ApiError::from_service(ENTITY, e))?;
    Ok(Json(deleted))
}
