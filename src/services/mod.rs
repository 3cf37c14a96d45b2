//! Services Layer
//!
//! Business logic for the write side, kept out of the HTTP handlers.
//! Handlers pass the authenticated user down explicitly.

pub mod account_service;
pub mod booking_service;
pub mod catalog_service;
pub mod favorite_service;
pub mod review_service;

pub use account_service::{login, sign_up, Session, SignUpForm};
pub use booking_service::{create_booking, update_booking_status, BookingRequest, BookingSlot};
