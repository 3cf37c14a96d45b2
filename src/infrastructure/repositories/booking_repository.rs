//! SeaORM implementation of BookingRepository

use async_trait::async_trait;
use chrono::NaiveDate;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::domain::{BookingRepository, DomainError};
use crate::models::booking::{self, BookingDto, Entity as BookingEntity};
use crate::models::room::Entity as RoomEntity;
use crate::utils::dates::format_date;

/// SeaORM-based implementation of BookingRepository
pub struct SeaOrmBookingRepository {
    db: DatabaseConnection,
}

impl SeaOrmBookingRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BookingRepository for SeaOrmBookingRepository {
    async fn find_upcoming(
        &self,
        today: NaiveDate,
        limit: u64,
    ) -> Result<Vec<BookingDto>, DomainError> {
        let bookings = BookingEntity::find()
            .filter(booking::Column::Date.gte(format_date(today)))
            .order_by_asc(booking::Column::Date)
            .order_by_asc(booking::Column::StartTime)
            .limit(limit)
            .find_also_related(RoomEntity)
            .all(&self.db)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(booking, room)| BookingDto::with_room(booking, room))
            .collect())
    }

    async fn find_all(&self) -> Result<Vec<BookingDto>, DomainError> {
        let bookings = BookingEntity::find()
            .order_by_desc(booking::Column::Date)
            .order_by_asc(booking::Column::StartTime)
            .find_also_related(RoomEntity)
            .all(&self.db)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(booking, room)| BookingDto::with_room(booking, room))
            .collect())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<BookingDto>, DomainError> {
        let bookings = BookingEntity::find()
            .filter(booking::Column::UserId.eq(user_id))
            .order_by_desc(booking::Column::Date)
            .order_by_asc(booking::Column::StartTime)
            .find_also_related(RoomEntity)
            .all(&self.db)
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(booking, room)| BookingDto::with_room(booking, room))
            .collect())
    }
}
