use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

use models::errors::ModelError;
use service::errors::ServiceError;

/// Wire-level error: a status code plus a `{"detail": ...}` body.
/// This is the only place service failures become HTTP statuses.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl ApiError {
    pub fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self { status, detail: detail.into() }
    }

    /// Map a service failure for the given entity name ("User", "Food", ...).
    /// Storage errors are logged here and surfaced as a generic 500; driver
    /// internals never reach the client.
    pub fn from_service(entity: &str, err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(_) => {
                Self::new(StatusCode::NOT_FOUND, format!("{} not found", entity))
            }
            ServiceError::Model(ModelError::Validation(msg)) => {
                Self::new(StatusCode::BAD_REQUEST, msg)
            }
            ServiceError::Db(e) | ServiceError::Model(ModelError::Db(e)) => {
                error!(entity, err = %e, "storage error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "detail": self.detail }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404_with_entity_detail() {
        let api = ApiError::from_service("User", ServiceError::not_found("User", 999));
        assert_eq!(api.status, StatusCode::NOT_FOUND);
        assert_eq!(api.detail, "User not found");
    }

    #[test]
    fn storage_errors_map_to_generic_500() {
        let api = ApiError::from_service("Vote", ServiceError::Db("duplicate key".into()));
        assert_eq!(api.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api.detail, "Internal Server Error");
    }

    #[test]
    fn validation_maps_to_400() {
        let api = ApiError::from_service(
            "Food",
            ServiceError::Model(ModelError::Validation("price must be >= 0".into())),
        );
        assert_eq!(api.status, StatusCode::BAD_REQUEST);
        assert_eq!(api.detail, "price must be >= 0");
    }
}
