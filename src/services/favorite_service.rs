//! Favorite Service - rooms a user has starred

use sea_orm::*;
use serde::Serialize;

use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::models::favorite::{self, Entity as Favorite};
use crate::models::room::{Entity as Room, RoomDto};
use crate::utils::dates::now_rfc3339;

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteDto {
    pub id: i32,
    pub room_id: i32,
    pub created_at: String,
    pub room: Option<RoomDto>,
}

/// Star a room. Starring the same room twice is a conflict.
pub async fn add_favorite(
    db: &DatabaseConnection,
    room_id: i32,
    user: &CurrentUser,
) -> Result<favorite::Model, DomainError> {
    Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("room {}", room_id)))?;

    let saved = favorite::ActiveModel {
        user_id: Set(user.id),
        room_id: Set(room_id),
        created_at: Set(now_rfc3339()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            DomainError::Conflict("room is already a favorite".into())
        }
        _ => DomainError::from(e),
    })?;

    tracing::debug!(user = %user.username, room_id, "Favorite added");
    Ok(saved)
}

pub async fn remove_favorite(
    db: &DatabaseConnection,
    room_id: i32,
    user: &CurrentUser,
) -> Result<(), DomainError> {
    let result = Favorite::delete_many()
        .filter(favorite::Column::UserId.eq(user.id))
        .filter(favorite::Column::RoomId.eq(room_id))
        .exec(db)
        .await?;

    if result.rows_affected == 0 {
        return Err(DomainError::NotFound(format!("favorite room {}", room_id)));
    }
    Ok(())
}

/// The user's favorites, most recent first.
pub async fn list_favorites(
    db: &DatabaseConnection,
    user: &CurrentUser,
) -> Result<Vec<FavoriteDto>, DomainError> {
    let rows = Favorite::find()
        .filter(favorite::Column::UserId.eq(user.id))
        .order_by_desc(favorite::Column::CreatedAt)
        .order_by_desc(favorite::Column::Id)
        .find_also_related(Room)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(fav, room)| FavoriteDto {
            id: fav.id,
            room_id: fav.room_id,
            created_at: fav.created_at,
            room: room.map(RoomDto::from),
        })
        .collect())
}
