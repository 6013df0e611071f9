//! HTTP error mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use patient_registry_core::RegistryError;
use serde::Serialize;

/// Wire shape of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// A registry failure carried to the response layer.
#[derive(Debug)]
pub struct ApiError(pub RegistryError);

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match &self.0 {
            RegistryError::NotFound(_) => (StatusCode::NOT_FOUND, "patient not found"),
            RegistryError::IdExists(_) => (StatusCode::BAD_REQUEST, "patient id already exists"),
            RegistryError::Sort(_) => (StatusCode::BAD_REQUEST, "invalid sort parameters"),
            RegistryError::Validation(_) | RegistryError::MalformedRecord { .. } => {
                (StatusCode::UNPROCESSABLE_ENTITY, "validation failed")
            }
            RegistryError::Store(_) | RegistryError::LockPoisoned(_) => {
                // Storage detail stays in the log, not on the wire.
                tracing::error!(error = %self.0, "storage failure");
                let body = ErrorBody {
                    error: "internal storage error".to_string(),
                    details: None,
                };
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };
        let body = ErrorBody {
            error: error.to_string(),
            details: Some(self.0.to_string()),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_registry_core::ValidationError;

    #[test]
    fn test_not_found_maps_to_404() {
        let response = ApiError(RegistryError::NotFound("P001".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_validation_maps_to_422() {
        let response =
            ApiError(RegistryError::Validation(ValidationError::AgeOutOfRange(0))).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn test_duplicate_id_maps_to_400() {
        let response = ApiError(RegistryError::IdExists("P001".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
