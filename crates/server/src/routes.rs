use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use common::types::Health;

pub mod days;
pub mod food_availabilities;
pub mod foods;
pub mod users;
pub mod votes;

/// Shared router state: the connection pool. Repositories and services are
/// constructed per request from it.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: one CRUD group per entity.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let api = Router::new()
        .route("/days", axum::routing::post(days::create))
        .route(
            "/days/:id",
            get(days::get).put(days::update).delete(days::delete),
        )
        .route("/foods", axum::routing::post(foods::create))
        .route(
            "/foods/:id",
            get(foods::get).put(foods::update).delete(foods::delete),
        )
        .route(
            "/food_availabilities",
            axum::routing::post(food_availabilities::create),
        )
        .route(
            "/food_availabilities/:id",
            get(food_availabilities::get)
                .put(food_availabilities::update)
                .delete(food_availabilities::delete),
        )
        .route("/users", axum::routing::post(users::create))
        .route(
            "/users/:id",
            get(users::get).put(users::update).delete(users::delete),
        )
        .route("/votes", axum::routing::post(votes::create))
        .route(
            "/votes/:id",
            get(votes::get).put(votes::update).delete(votes::delete),
        );

    Router::new()
        .route("/health", get(health))
        .merge(api)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
