use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::services::favorite_service;

pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, DomainError> {
    let favorites = favorite_service::list_favorites(state.db(), &user).await?;
    Ok(Json(json!({ "favorites": favorites })))
}

pub async fn add_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<i32>,
) -> Result<(StatusCode, Json<Value>), DomainError> {
    let favorite = favorite_service::add_favorite(state.db(), room_id, &user).await?;
    Ok((StatusCode::CREATED, Json(json!(favorite))))
}

pub async fn remove_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<i32>,
) -> Result<StatusCode, DomainError> {
    favorite_service::remove_favorite(state.db(), room_id, &user).await?;
    Ok(StatusCode::NO_CONTENT)
}
