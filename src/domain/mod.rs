//! Domain layer - Pure business abstractions
//!
//! No Axum in here. SeaORM only shows up through the `DbErr` conversion.
//! Only trait definitions and domain error types.

pub mod errors;
pub mod repositories;

pub use errors::{DomainError, FieldErrors};
pub use repositories::*;
