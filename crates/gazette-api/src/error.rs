//! API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use gazette_core::error::AgencyError;
use serde::Serialize;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer wrapper around `AgencyError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError(pub AgencyError);

impl From<AgencyError> for ApiError {
    fn from(err: AgencyError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = match &self.0 {
            AgencyError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            AgencyError::IdTaken { .. } | AgencyError::Duplicate { .. } => {
                (StatusCode::CONFLICT, "duplicate")
            }
            AgencyError::IdExhausted(_) => (StatusCode::CONFLICT, "id_exhausted"),
            AgencyError::NoChange { .. } => (StatusCode::BAD_REQUEST, "no_change"),
            AgencyError::AlreadyReleased(_) => (StatusCode::CONFLICT, "already_released"),
            AgencyError::MissingEditor(_) => (StatusCode::BAD_REQUEST, "missing_editor"),
            AgencyError::AlreadyAssigned { .. } => (StatusCode::CONFLICT, "already_assigned"),
            AgencyError::AlreadySubscribed { .. } => {
                (StatusCode::CONFLICT, "already_subscribed")
            }
            AgencyError::AlreadyDelivered(_) => (StatusCode::CONFLICT, "already_delivered"),
            AgencyError::NotReleased(_) => (StatusCode::BAD_REQUEST, "not_released"),
        };

        let body = ErrorBody {
            error: error_code,
            message: self.0.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use gazette_core::error::Entity;

    fn status_of(err: AgencyError) -> StatusCode {
        let response = ApiError(err).into_response();
        response.status()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(AgencyError::NotFound {
                entity: Entity::Newspaper,
                id: 100_001
            }),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_duplicate_and_id_taken_map_to_409() {
        assert_eq!(
            status_of(AgencyError::Duplicate {
                entity: Entity::Editor
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AgencyError::IdTaken {
                entity: Entity::Subscriber,
                id: 10
            }),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_id_exhaustion_maps_to_409() {
        assert_eq!(
            status_of(AgencyError::IdExhausted(Entity::Newspaper)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_no_change_maps_to_400() {
        assert_eq!(
            status_of(AgencyError::NoChange {
                entity: Entity::Newspaper,
                id: 100
            }),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_release_and_delivery_preconditions() {
        assert_eq!(
            status_of(AgencyError::AlreadyReleased(94)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AgencyError::MissingEditor(97)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AgencyError::NotReleased(91)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(AgencyError::AlreadyDelivered(92)),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn test_relationship_conflicts_map_to_409() {
        assert_eq!(
            status_of(AgencyError::AlreadyAssigned {
                issue_id: 97,
                editor_id: 1
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(AgencyError::AlreadySubscribed {
                subscriber_id: 160,
                paper_id: 100
            }),
            StatusCode::CONFLICT
        );
    }
}
