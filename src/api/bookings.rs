use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::api::extract::ApiJson;
use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::infrastructure::AppState;
use crate::models::{BookingDto, BookingStatus};
use crate::services::booking_service::{self, BookingRequest};

#[utoipa::path(
    get,
    path = "/api/bookings/",
    responses(
        (status = 200, description = "All bookings with their room")
    )
)]
pub async fn list_bookings(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let bookings = state.booking_repo.find_all().await?;
    Ok(Json(json!({ "bookings": bookings })))
}

pub async fn my_bookings(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<Value>, DomainError> {
    let bookings = state.booking_repo.find_by_user(user.id).await?;
    Ok(Json(json!({ "bookings": bookings })))
}

#[utoipa::path(
    post,
    path = "/api/bookings/",
    responses(
        (status = 201, description = "Booking created, pending confirmation"),
        (status = 400, description = "Malformed date or times"),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Room not found"),
        (status = 409, description = "Room already booked that day")
    )
)]
pub async fn create_booking(
    State(state): State<AppState>,
    user: CurrentUser,
    ApiJson(payload): ApiJson<BookingRequest>,
) -> Result<impl IntoResponse, DomainError> {
    let slot = payload.slot()?;
    let booking = booking_service::create_booking(state.db(), payload.room, slot, &user).await?;

    let location = format!("/api/bookings/{}", booking.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(BookingDto::from(booking)),
    ))
}

#[derive(Deserialize)]
pub struct StatusUpdate {
    pub status: String,
}

pub async fn update_status(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<i32>,
    ApiJson(payload): ApiJson<StatusUpdate>,
) -> Result<Json<BookingDto>, DomainError> {
    let status = BookingStatus::parse(payload.status.trim()).ok_or_else(|| {
        DomainError::field("status", "Choose pending, confirmed or canceled.")
    })?;

    let updated = booking_service::update_booking_status(state.db(), id, status, &user).await?;
    Ok(Json(BookingDto::from(updated)))
}
