use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub location_id: i32,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour: f64,
    #[serde(default)]
    pub description: String,
    /// Inactive rooms are hidden from listings and search.
    pub is_active: bool,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::location::Entity",
        from = "Column::LocationId",
        to = "super::location::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Location,
    #[sea_orm(has_many = "super::booking::Entity")]
    Bookings,
    #[sea_orm(has_many = "super::image::Entity")]
    Images,
    #[sea_orm(has_many = "super::review::Entity")]
    Reviews,
    #[sea_orm(has_many = "super::favorite::Entity")]
    FavoritedBy,
    #[sea_orm(has_many = "super::room_amenity::Entity")]
    RoomAmenities,
}

impl Related<super::location::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Location.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Bookings.def()
    }
}

impl Related<super::image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Images.def()
    }
}

impl Related<super::review::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviews.def()
    }
}

impl Related<super::favorite::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FavoritedBy.def()
    }
}

impl Related<super::amenity::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_amenity::Relation::Amenity.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_amenity::Relation::Room.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// "Room name (Location name)", or just the room name when the location is unknown.
    pub fn display_name(&self, location_name: Option<&str>) -> String {
        match location_name {
            Some(location) => format!("{} ({})", self.name, location),
            None => self.name.clone(),
        }
    }
}

// DTO for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomDto {
    pub id: i32,
    pub location_id: i32,
    pub name: String,
    pub capacity: i32,
    pub price_per_hour: f64,
    pub description: String,
    pub is_active: bool,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_bookings: Option<i64>,
}

impl From<Model> for RoomDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            location_id: model.location_id,
            name: model.name,
            capacity: model.capacity,
            price_per_hour: model.price_per_hour,
            description: model.description,
            is_active: model.is_active,
            created_at: model.created_at,
            num_bookings: None,
        }
    }
}
