use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "amenities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::room_amenity::Entity")]
    RoomAmenities,
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        super::room_amenity::Relation::Room.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::room_amenity::Relation::Amenity.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
