pub mod amenities;
pub mod auth;
pub mod bookings;
pub mod dashboard;
pub mod errors;
pub mod extract;
pub mod favorites;
pub mod health;
pub mod locations;
pub mod places;
pub mod reviews;
pub mod search;

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::infrastructure::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Read pages
        .route("/", get(dashboard::dashboard))
        .route("/search/", get(search::search_rooms))
        .route("/places/", get(places::list_places))
        // Bookings
        .route(
            "/bookings/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route("/bookings/mine", get(bookings::my_bookings))
        .route("/bookings/:id/status", put(bookings::update_status))
        // Auth
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/auth/me", get(auth::get_me))
        // Catalog
        .route(
            "/locations",
            get(locations::list_locations).post(locations::create_location),
        )
        .route("/rooms", post(places::create_room))
        .route("/rooms/:id", get(places::get_room))
        .route("/rooms/:id/images", post(places::add_image))
        .route(
            "/rooms/:id/reviews",
            get(reviews::list_reviews).post(reviews::create_review),
        )
        .route(
            "/amenities",
            get(amenities::list_amenities).post(amenities::create_amenity),
        )
        // Favorites
        .route("/favorites", get(favorites::list_favorites))
        .route(
            "/favorites/:room_id",
            post(favorites::add_favorite).delete(favorites::remove_favorite),
        )
        .with_state(state)
}
