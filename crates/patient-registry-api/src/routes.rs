//! Route table and request handlers.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use patient_registry_core::{
    Patient, PatientUpdate, RecordMap, Registry, RegistryError, SortField, SortOrder,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;

/// Build the application router.
pub fn app(registry: Registry) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/about", get(about))
        .route("/view", get(view_all))
        .route("/view/:id", get(view_one))
        .route("/sort", get(sort))
        .route("/create", post(create))
        .route("/update/:id", put(update))
        .with_state(registry)
}

async fn root() -> Json<Value> {
    Json(json!({ "message": "Patient Management System" }))
}

async fn about() -> Json<Value> {
    Json(json!({ "message": "Fully functional patient management system." }))
}

/// Full store as stored: raw fields, no derived metrics.
async fn view_all(State(registry): State<Registry>) -> Result<Json<RecordMap>, ApiError> {
    Ok(Json(registry.list()?))
}

async fn view_one(
    State(registry): State<Registry>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    Ok(Json(registry.get(&id)?))
}

#[derive(Debug, Deserialize)]
struct SortQuery {
    sort_by: String,
    #[serde(default = "default_order")]
    order: String,
}

fn default_order() -> String {
    "asc".to_string()
}

async fn sort(
    State(registry): State<Registry>,
    Query(params): Query<SortQuery>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let field: SortField = params.sort_by.parse().map_err(RegistryError::from)?;
    let order: SortOrder = params.order.parse().map_err(RegistryError::from)?;
    Ok(Json(registry.sorted(field, order)?))
}

async fn create(
    State(registry): State<Registry>,
    Json(patient): Json<Patient>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    registry.create(&patient)?;
    tracing::info!(id = %patient.id, "patient created");
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Patient created successfully." })),
    ))
}

async fn update(
    State(registry): State<Registry>,
    Path(id): Path<String>,
    Json(patch): Json<PatientUpdate>,
) -> Result<Json<Value>, ApiError> {
    registry.update(&id, &patch)?;
    tracing::info!(id = %id, "patient updated");
    Ok(Json(json!({ "message": "Patient updated successfully." })))
}
