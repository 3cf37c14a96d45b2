//! Repository trait definitions
//!
//! These traits define the contract for data access.
//! Implementations live in the infrastructure layer.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::DomainError;
use crate::models::amenity::Model as Amenity;
use crate::models::image::Model as Image;
use crate::models::location::LocationDto;
use crate::models::review::Model as Review;
use crate::models::{BookingDto, RoomDto};

/// Filter criteria for the availability search
#[derive(Debug, Default, Clone)]
pub struct RoomSearch {
    pub location_id: Option<i32>,
    pub date: Option<NaiveDate>,
}

/// Room with everything the detail page shows
#[derive(Debug, Clone, serde::Serialize)]
pub struct RoomDetail {
    #[serde(flatten)]
    pub room: RoomDto,
    pub location_name: Option<String>,
    pub display_name: String,
    pub amenities: Vec<Amenity>,
    pub amenities_list: String,
    pub images: Vec<Image>,
    pub reviews: Vec<Review>,
    pub average_rating: Option<f64>,
}

/// Repository trait for the room read side
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// Rooms ordered by descending booking count, ties by ascending id
    async fn find_popular(&self, limit: u64) -> Result<Vec<RoomDto>, DomainError>;

    /// Active rooms ordered by name
    async fn find_active(&self) -> Result<Vec<RoomDto>, DomainError>;

    /// Active rooms, optionally limited to a location and to rooms with no booking on a date
    async fn search_available(&self, search: RoomSearch) -> Result<Vec<RoomDto>, DomainError>;

    /// Room with location, amenities, images and reviews
    async fn find_detail(&self, id: i32) -> Result<Option<RoomDetail>, DomainError>;
}

/// Repository trait for the booking read side
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Bookings dated on or after `today`, soonest first
    async fn find_upcoming(&self, today: NaiveDate, limit: u64)
        -> Result<Vec<BookingDto>, DomainError>;

    /// All bookings with their room, latest date first
    async fn find_all(&self) -> Result<Vec<BookingDto>, DomainError>;

    /// Bookings made by one user, latest date first
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<BookingDto>, DomainError>;
}

/// Repository trait for locations and amenities
#[async_trait]
pub trait LocationRepository: Send + Sync {
    /// All locations, newest first, with their room count
    async fn find_all(&self) -> Result<Vec<LocationDto>, DomainError>;

    /// All amenities ordered by name
    async fn find_amenities(&self) -> Result<Vec<Amenity>, DomainError>;
}
