use axum::{extract::State, Json};
use chrono::Local;
use serde_json::{json, Value};

use crate::domain::DomainError;
use crate::infrastructure::AppState;
use crate::utils::dates::format_date;

const POPULAR_ROOMS: u64 = 5;
const UPCOMING_BOOKINGS: u64 = 5;

/// Landing page data: most booked rooms, next bookings and all venues.
#[utoipa::path(
    get,
    path = "/api",
    responses(
        (status = 200, description = "Popular rooms, upcoming bookings and locations")
    )
)]
pub async fn dashboard(State(state): State<AppState>) -> Result<Json<Value>, DomainError> {
    let today = Local::now().date_naive();

    let popular_rooms = state.room_repo.find_popular(POPULAR_ROOMS).await?;
    let upcoming_bookings = state
        .booking_repo
        .find_upcoming(today, UPCOMING_BOOKINGS)
        .await?;
    let locations = state.location_repo.find_all().await?;

    Ok(Json(json!({
        "today": format_date(today),
        "popular_rooms": popular_rooms,
        "upcoming_bookings": upcoming_bookings,
        "locations": locations,
    })))
}
