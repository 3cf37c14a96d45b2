use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::models::RoomDto;
use crate::services::catalog_service::{self, RoomInput};

#[utoipa::path(
    get,
    path = "/api/places/",
    responses(
        (status = 200, description = "Active rooms ordered by name")
    )
)]
pub async fn list_places(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let rooms = state.room_repo.find_active().await?;
    Ok(Json(json!({ "rooms": rooms })))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    params(("id" = i32, Path, description = "Room id")),
    responses(
        (status = 200, description = "Room with amenities, images and reviews"),
        (status = 404, description = "Room not found")
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Value>, DomainError> {
    let detail = state
        .room_repo
        .find_detail(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("room {}", id)))?;

    Ok(Json(json!(detail)))
}

pub async fn create_room(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<RoomInput>,
) -> Result<(StatusCode, Json<RoomDto>), DomainError> {
    let room = catalog_service::create_room(state.db(), payload, &user).await?;
    Ok((StatusCode::CREATED, Json(RoomDto::from(room))))
}

#[derive(Deserialize)]
pub struct ImageRequest {
    pub url: String,
}

pub async fn add_image(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<i32>,
    ApiJson(payload): ApiJson<ImageRequest>,
) -> Result<(StatusCode, Json<Value>), DomainError> {
    let image = catalog_service::add_image(state.db(), room_id, &payload.url, &user).await?;
    Ok((StatusCode::CREATED, Json(json!(image))))
}
