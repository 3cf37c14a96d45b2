use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::services::catalog_service;

#[derive(Deserialize)]
pub struct AmenityRequest {
    pub name: String,
}

pub async fn list_amenities(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let amenities = state.location_repo.find_amenities().await?;
    Ok(Json(json!({ "amenities": amenities })))
}

pub async fn create_amenity(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<AmenityRequest>,
) -> Result<(StatusCode, Json<Value>), DomainError> {
    let amenity = catalog_service::create_amenity(state.db(), &payload.name, &user).await?;
    Ok((StatusCode::CREATED, Json(json!(amenity))))
}
