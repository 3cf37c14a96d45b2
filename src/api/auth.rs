use axum::{extract::State, http::StatusCode, Json};
use sea_orm::EntityTrait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::models::user::{Entity as User, UserDto};
use crate::services::account_service::{self, SignUpForm};

#[derive(Deserialize)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/signup",
    responses(
        (status = 201, description = "Account created and signed in"),
        (status = 400, description = "Per-field validation errors")
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<SignUpForm>,
) -> Result<(StatusCode, Json<Value>), DomainError> {
    let session = account_service::sign_up(state.db(), form).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "user": UserDto::from(session.user),
            "token": session.token,
        })),
    ))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    responses(
        (status = 200, description = "Session token"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> Result<Json<Value>, DomainError> {
    let session = account_service::login(state.db(), &payload.username, &payload.password).await?;
    Ok(Json(json!({
        "token": session.token,
        "user": UserDto::from(session.user),
    })))
}

pub async fn get_me(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<UserDto>, DomainError> {
    let found = User::find_by_id(user.id)
        .one(state.db())
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("user {}", user.id)))?;
    Ok(Json(UserDto::from(found)))
}
