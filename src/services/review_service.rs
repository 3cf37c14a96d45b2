//! Review Service - ratings left on rooms

use sea_orm::*;
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::models::review::{self, rating_in_range, Entity as Review, MAX_RATING, MIN_RATING};
use crate::models::room::Entity as Room;
use crate::models::user::Entity as User;
use crate::utils::dates::now_rfc3339;

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewInput {
    pub rating: i32,
    #[serde(default)]
    pub comment: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReviewDto {
    pub id: i32,
    pub room_id: i32,
    pub user_id: i32,
    pub username: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub created_at: String,
}

impl ReviewInput {
    pub fn check(&self) -> Result<(), DomainError> {
        if !rating_in_range(self.rating) {
            return Err(DomainError::field(
                "rating",
                format!("Rating must be between {} and {}.", MIN_RATING, MAX_RATING),
            ));
        }
        Ok(())
    }
}

pub async fn create_review(
    db: &DatabaseConnection,
    room_id: i32,
    input: ReviewInput,
    user: &CurrentUser,
) -> Result<review::Model, DomainError> {
    input.check()?;

    let room = Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("room {}", room_id)))?;

    let saved = review::ActiveModel {
        user_id: Set(user.id),
        room_id: Set(room.id),
        rating: Set(input.rating),
        comment: Set(input.comment.trim().to_string()),
        created_at: Set(now_rfc3339()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Review added: {}", saved.describe(&user.username, &room.name));
    Ok(saved)
}

/// Reviews of a room, newest first.
pub async fn list_reviews(
    db: &DatabaseConnection,
    room_id: i32,
) -> Result<Vec<ReviewDto>, DomainError> {
    Room::find_by_id(room_id)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("room {}", room_id)))?;

    let rows = Review::find()
        .filter(review::Column::RoomId.eq(room_id))
        .order_by_desc(review::Column::CreatedAt)
        .order_by_desc(review::Column::Id)
        .find_also_related(User)
        .all(db)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(r, author)| ReviewDto {
            id: r.id,
            room_id: r.room_id,
            user_id: r.user_id,
            username: author.map(|u| u.username),
            rating: r.rating,
            comment: r.comment,
            created_at: r.created_at,
        })
        .collect())
}
