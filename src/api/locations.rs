use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::models::location::LocationDto;
use crate::services::catalog_service::{self, LocationInput};

#[utoipa::path(
    get,
    path = "/api/locations",
    responses(
        (status = 200, description = "Locations with their room count")
    )
)]
pub async fn list_locations(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let locations = state.location_repo.find_all().await?;
    Ok(Json(json!({ "locations": locations })))
}

pub async fn create_location(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<LocationInput>,
) -> Result<(StatusCode, Json<LocationDto>), DomainError> {
    let created = catalog_service::create_location(state.db(), payload, &user).await?;
    Ok((StatusCode::CREATED, Json(LocationDto::from_model(created, 0))))
}
