//! SeaORM implementation of LocationRepository

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::domain::{DomainError, LocationRepository};
use crate::models::amenity::{self, Entity as AmenityEntity, Model as Amenity};
use crate::models::location::{self, Entity as LocationEntity, LocationDto};
use crate::models::room;

/// SeaORM-based implementation of LocationRepository
pub struct SeaOrmLocationRepository {
    db: DatabaseConnection,
}

impl SeaOrmLocationRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LocationRepository for SeaOrmLocationRepository {
    async fn find_all(&self) -> Result<Vec<LocationDto>, DomainError> {
        let locations = LocationEntity::find()
            .order_by_desc(location::Column::CreatedAt)
            .order_by_desc(location::Column::Id)
            .all(&self.db)
            .await?;

        let mut dtos = Vec::with_capacity(locations.len());
        for loc in locations {
            let room_count = room::Entity::find()
                .filter(room::Column::LocationId.eq(loc.id))
                .count(&self.db)
                .await?;
            dtos.push(LocationDto::from_model(loc, room_count));
        }

        Ok(dtos)
    }

    async fn find_amenities(&self) -> Result<Vec<Amenity>, DomainError> {
        let amenities = AmenityEntity::find()
            .order_by_asc(amenity::Column::Name)
            .all(&self.db)
            .await?;

        Ok(amenities)
    }
}
