//! SeaORM implementation of RoomRepository

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Order, Query};
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, ModelTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::domain::{DomainError, RoomDetail, RoomRepository, RoomSearch};
use crate::models::room::{self, Entity as RoomEntity, RoomDto};
use crate::models::{amenity, booking, image, location, review};
use crate::utils::dates::format_date;

/// Room row plus the aggregated booking count
#[derive(Debug, FromQueryResult)]
struct RoomWithBookingCount {
    id: i32,
    location_id: i32,
    name: String,
    capacity: i32,
    price_per_hour: f64,
    description: String,
    is_active: bool,
    created_at: String,
    num_bookings: i64,
}

impl From<RoomWithBookingCount> for RoomDto {
    fn from(row: RoomWithBookingCount) -> Self {
        Self {
            id: row.id,
            location_id: row.location_id,
            name: row.name,
            capacity: row.capacity,
            price_per_hour: row.price_per_hour,
            description: row.description,
            is_active: row.is_active,
            created_at: row.created_at,
            num_bookings: Some(row.num_bookings),
        }
    }
}

/// SeaORM-based implementation of RoomRepository
pub struct SeaOrmRoomRepository {
    db: DatabaseConnection,
}

impl SeaOrmRoomRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RoomRepository for SeaOrmRoomRepository {
    async fn find_popular(&self, limit: u64) -> Result<Vec<RoomDto>, DomainError> {
        let rows = RoomEntity::find()
            .column_as(booking::Column::Id.count(), "num_bookings")
            .join(JoinType::LeftJoin, room::Relation::Bookings.def())
            .group_by(room::Column::Id)
            .order_by(Expr::cust("num_bookings"), Order::Desc)
            .order_by_asc(room::Column::Id)
            .limit(limit)
            .into_model::<RoomWithBookingCount>()
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(RoomDto::from).collect())
    }

    async fn find_active(&self) -> Result<Vec<RoomDto>, DomainError> {
        let rooms = RoomEntity::find()
            .filter(room::Column::IsActive.eq(true))
            .order_by_asc(room::Column::Name)
            .order_by_asc(room::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    async fn search_available(&self, search: RoomSearch) -> Result<Vec<RoomDto>, DomainError> {
        let mut query = RoomEntity::find().filter(room::Column::IsActive.eq(true));

        if let Some(location_id) = search.location_id {
            query = query.filter(room::Column::LocationId.eq(location_id));
        }

        // Day granularity: any booking on the date takes the room out, whatever its hours
        if let Some(date) = search.date {
            query = query.filter(
                room::Column::Id.not_in_subquery(
                    Query::select()
                        .column(booking::Column::RoomId)
                        .from(booking::Entity)
                        .and_where(booking::Column::Date.eq(format_date(date)))
                        .to_owned(),
                ),
            );
        }

        let rooms = query
            .order_by_asc(room::Column::LocationId)
            .order_by_asc(room::Column::Name)
            .all(&self.db)
            .await?;

        Ok(rooms.into_iter().map(RoomDto::from).collect())
    }

    async fn find_detail(&self, id: i32) -> Result<Option<RoomDetail>, DomainError> {
        let Some((room, location)) = RoomEntity::find_by_id(id)
            .find_also_related(location::Entity)
            .one(&self.db)
            .await?
        else {
            return Ok(None);
        };

        let amenities = room
            .find_related(amenity::Entity)
            .order_by_asc(amenity::Column::Name)
            .all(&self.db)
            .await?;

        let images = room
            .find_related(image::Entity)
            .order_by_desc(image::Column::UploadedAt)
            .all(&self.db)
            .await?;

        let reviews = room
            .find_related(review::Entity)
            .order_by_desc(review::Column::CreatedAt)
            .all(&self.db)
            .await?;

        let average_rating = if reviews.is_empty() {
            None
        } else {
            let total: i32 = reviews.iter().map(|r| r.rating).sum();
            Some(f64::from(total) / reviews.len() as f64)
        };

        let location_name = location.map(|l| l.name);
        let amenities_list = amenities
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Some(RoomDetail {
            display_name: room.display_name(location_name.as_deref()),
            room: RoomDto::from(room),
            location_name,
            amenities,
            amenities_list,
            images,
            reviews,
            average_rating,
        }))
    }
}
