use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Text")]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    #[sea_orm(string_value = "pending")]
    Pending,
    #[sea_orm(string_value = "confirmed")]
    Confirmed,
    #[sea_orm(string_value = "canceled")]
    Canceled,
}

impl BookingStatus {
    pub fn label(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Awaiting confirmation",
            BookingStatus::Confirmed => "Confirmed",
            BookingStatus::Canceled => "Canceled",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "canceled" => Some(BookingStatus::Canceled),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "bookings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    /// `YYYY-MM-DD`; one booking per (room_id, date).
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::room::Entity",
        from = "Column::RoomId",
        to = "super::room::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    Room,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::room::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn describe(&self, room_name: &str) -> String {
        format!(
            "Booking: {} on {} ({}–{}) – {}",
            room_name,
            self.date,
            self.start_time,
            self.end_time,
            self.status.label()
        )
    }
}

// DTO for API responses, with the room eagerly attached when known
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub room_id: i32,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub status: BookingStatus,
    pub status_label: String,
    pub created_at: String,
    pub updated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<super::room::RoomDto>,
}

impl From<Model> for BookingDto {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            room_id: model.room_id,
            date: model.date,
            start_time: model.start_time,
            end_time: model.end_time,
            status: model.status,
            status_label: model.status.label().to_string(),
            created_at: model.created_at,
            updated_at: model.updated_at,
            room: None,
        }
    }
}

impl BookingDto {
    pub fn with_room(model: Model, room: Option<super::room::Model>) -> Self {
        let mut dto = Self::from(model);
        dto.room = room.map(super::room::RoomDto::from);
        dto
    }
}
