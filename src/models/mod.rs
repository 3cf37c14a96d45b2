pub mod amenity;
pub mod booking;
pub mod favorite;
pub mod image;
pub mod location;
pub mod review;
pub mod room;
pub mod room_amenity;
pub mod user;

pub use booking::{BookingDto, BookingStatus};
pub use room::RoomDto;
pub use user::{Role, UserDto};
