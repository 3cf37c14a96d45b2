//! Repository implementations using SeaORM

pub mod booking_repository;
pub mod location_repository;
pub mod room_repository;

pub use booking_repository::SeaOrmBookingRepository;
pub use location_repository::SeaOrmLocationRepository;
pub use room_repository::SeaOrmRoomRepository;
