use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::services::review_service::{self, ReviewInput};

pub async fn list_reviews(
    State(state): State<AppState>,
    Path(room_id): Path<i32>,
) -> Result<Json<Value>, DomainError> {
    let reviews = review_service::list_reviews(state.db(), room_id).await?;
    Ok(Json(json!({ "reviews": reviews })))
}

pub async fn create_review(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(room_id): Path<i32>,
    ApiJson(payload): ApiJson<ReviewInput>,
) -> Result<(StatusCode, Json<Value>), DomainError> {
    let review = review_service::create_review(state.db(), room_id, payload, &user).await?;
    Ok((StatusCode::CREATED, Json(json!(review))))
}
