use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub address: String,
    #[serde(default)]
    pub description: String,
    /// Cleared (not cascaded) when the owning user is deleted.
    pub owner_id: Option<i32>,
    pub created_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::OwnerId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "SetNull"
    )]
    Owner,
    #[sea_orm(has_many = "super::room::Entity")]
    Rooms,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Owner.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Debug, Clone, Serialize)]
pub struct LocationDto {
    pub id: i32,
    pub name: String,
    pub address: String,
    pub description: String,
    pub owner_id: Option<i32>,
    pub created_at: String,
    pub room_count: u64,
}

impl LocationDto {
    pub fn from_model(model: Model, room_count: u64) -> Self {
        Self {
            id: model.id,
            name: model.name,
            address: model.address,
            description: model.description,
            owner_id: model.owner_id,
            created_at: model.created_at,
            room_count,
        }
    }
}
