//! Catalog Service - venues, rooms, amenities and room images

use sea_orm::*;
use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::models::amenity::{self, Entity as Amenity};
use crate::models::image;
use crate::models::location::{self, Entity as Location};
use crate::models::room::{self, Entity as Room};
use crate::models::room_amenity;
use crate::models::user::Role;
use crate::utils::dates::now_rfc3339;

#[derive(Debug, Clone, Deserialize)]
pub struct LocationInput {
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoomInput {
    pub location_id: i32,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub amenity_ids: Vec<i32>,
}

fn require_non_empty(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::field(field, "This field is required."));
    }
    Ok(())
}

/// Register a venue owned by the current user. Owners and admins only.
pub async fn create_location(
    db: &DatabaseConnection,
    input: LocationInput,
    user: &CurrentUser,
) -> Result<location::Model, DomainError> {
    if !matches!(user.role, Role::Owner | Role::Admin) {
        return Err(DomainError::Forbidden(
            "Only owners can register a venue".into(),
        ));
    }
    require_non_empty("name", &input.name)?;
    require_non_empty("address", &input.address)?;

    let new_location = location::ActiveModel {
        name: Set(input.name.trim().to_string()),
        address: Set(input.address),
        description: Set(input.description),
        owner_id: Set(Some(user.id)),
        created_at: Set(now_rfc3339()),
        ..Default::default()
    };

    let saved = new_location.insert(db).await?;
    tracing::info!(location_id = saved.id, owner = %user.username, "Location created");
    Ok(saved)
}

/// Add a room to a venue, linking the given amenities.
pub async fn create_room(
    db: &DatabaseConnection,
    input: RoomInput,
    user: &CurrentUser,
) -> Result<room::Model, DomainError> {
    require_non_empty("name", &input.name)?;
    if input.capacity < 1 {
        return Err(DomainError::field("capacity", "Capacity must be at least 1."));
    }
    if !input.price_per_hour.is_finite() || input.price_per_hour < 0.0 {
        return Err(DomainError::field(
            "price_per_hour",
            "Price must be a non-negative number.",
        ));
    }

    let venue = Location::find_by_id(input.location_id)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("location {}", input.location_id)))?;

    if !user.can_manage(venue.owner_id) {
        return Err(DomainError::Forbidden(
            "Only the venue owner or an administrator can add rooms".into(),
        ));
    }

    let mut amenity_ids = input.amenity_ids.clone();
    amenity_ids.sort_unstable();
    amenity_ids.dedup();

    if !amenity_ids.is_empty() {
        let known = Amenity::find()
            .filter(amenity::Column::Id.is_in(amenity_ids.clone()))
            .count(db)
            .await?;
        if known as usize != amenity_ids.len() {
            return Err(DomainError::field("amenity_ids", "Unknown amenity."));
        }
    }

    let txn = db.begin().await?;

    let saved = room::ActiveModel {
        location_id: Set(venue.id),
        name: Set(input.name.trim().to_string()),
        capacity: Set(input.capacity),
        price_per_hour: Set(input.price_per_hour),
        description: Set(input.description),
        is_active: Set(true),
        created_at: Set(now_rfc3339()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    if !amenity_ids.is_empty() {
        let links = amenity_ids.into_iter().map(|amenity_id| room_amenity::ActiveModel {
            room_id: Set(saved.id),
            amenity_id: Set(amenity_id),
        });
        room_amenity::Entity::insert_many(links).exec(&txn).await?;
    }

    txn.commit().await?;

    tracing::info!(room_id = saved.id, "Room created: {}", saved.display_name(Some(&venue.name)));
    Ok(saved)
}

/// Add an amenity to the shared catalogue. Admins only; names are unique.
pub async fn create_amenity(
    db: &DatabaseConnection,
    name: &str,
    user: &CurrentUser,
) -> Result<amenity::Model, DomainError> {
    if !user.is_admin() {
        return Err(DomainError::Forbidden(
            "Only administrators can manage amenities".into(),
        ));
    }
    let name = name.trim();
    require_non_empty("name", name)?;

    amenity::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict(format!("amenity '{}' already exists", name))
        }
        _ => DomainError::from(e),
    })
}

/// Attach an image URL to a room.
pub async fn add_image(
    db: &DatabaseConnection,
    room_id: i32,
    image_url: &str,
    user: &CurrentUser,
) -> Result<image::Model, DomainError> {
    let parsed = url::Url::parse(image_url.trim())
        .map_err(|_| DomainError::field("url", "Enter a valid URL."))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(DomainError::field("url", "Enter a valid URL."));
    }

    let (target, venue) = Room::find_by_id(room_id)
        .find_also_related(Location)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("room {}", room_id)))?;

    if !user.can_manage(venue.and_then(|v| v.owner_id)) {
        return Err(DomainError::Forbidden(
            "Only the venue owner or an administrator can add images".into(),
        ));
    }

    let saved = image::ActiveModel {
        room_id: Set(target.id),
        url: Set(parsed.to_string()),
        uploaded_at: Set(now_rfc3339()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_required() {
        assert!(require_non_empty("name", "  ").is_err());
        assert!(require_non_empty("name", "Main hall").is_ok());
    }
}
