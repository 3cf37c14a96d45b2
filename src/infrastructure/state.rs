//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{BookingRepository, LocationRepository, RoomRepository};
use crate::infrastructure::{
    SeaOrmBookingRepository, SeaOrmLocationRepository, SeaOrmRoomRepository,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection for the write flows
    db: DatabaseConnection,
    /// Room read side
    pub room_repo: Arc<dyn RoomRepository>,
    /// Booking read side
    pub booking_repo: Arc<dyn BookingRepository>,
    /// Locations and amenities
    pub location_repo: Arc<dyn LocationRepository>,
}

impl AppState {
    /// Create a new AppState with all repositories initialized
    pub fn new(db: DatabaseConnection) -> Self {
        let room_repo = Arc::new(SeaOrmRoomRepository::new(db.clone()));
        let booking_repo = Arc::new(SeaOrmBookingRepository::new(db.clone()));
        let location_repo = Arc::new(SeaOrmLocationRepository::new(db.clone()));

        Self {
            db,
            room_repo,
            booking_repo,
            location_repo,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
