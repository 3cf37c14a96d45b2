#![allow(dead_code)]

use roombook::auth::CurrentUser;
use roombook::db;
use roombook::models::booking::{self, BookingStatus};
use roombook::models::user::{self, Role};
use roombook::models::{location, room};
use sea_orm::{DatabaseConnection, EntityTrait, Set};

// In-memory SQLite, schema applied
pub async fn setup_test_db() -> DatabaseConnection {
    db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB")
}

pub async fn create_user(db: &DatabaseConnection, username: &str, role: Role) -> CurrentUser {
    let now = chrono::Utc::now().to_rfc3339();
    let account = user::ActiveModel {
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        password_hash: Set("$argon2id$dummy_hash".to_string()),
        role: Set(role),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    let res = user::Entity::insert(account)
        .exec(db)
        .await
        .expect("Failed to create user");

    CurrentUser {
        id: res.last_insert_id,
        username: username.to_string(),
        role,
    }
}

pub async fn create_location(db: &DatabaseConnection, owner_id: Option<i32>, name: &str) -> i32 {
    let venue = location::ActiveModel {
        name: Set(name.to_string()),
        address: Set("1 Test Street".to_string()),
        description: Set(String::new()),
        owner_id: Set(owner_id),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    location::Entity::insert(venue)
        .exec(db)
        .await
        .expect("Failed to create location")
        .last_insert_id
}

pub async fn create_room(db: &DatabaseConnection, location_id: i32, name: &str) -> i32 {
    create_room_with(db, location_id, name, true).await
}

pub async fn create_room_with(
    db: &DatabaseConnection,
    location_id: i32,
    name: &str,
    is_active: bool,
) -> i32 {
    let new_room = room::ActiveModel {
        location_id: Set(location_id),
        name: Set(name.to_string()),
        capacity: Set(10),
        price_per_hour: Set(20.0),
        description: Set(String::new()),
        is_active: Set(is_active),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    };
    room::Entity::insert(new_room)
        .exec(db)
        .await
        .expect("Failed to create room")
        .last_insert_id
}

pub async fn insert_booking(db: &DatabaseConnection, user_id: i32, room_id: i32, date: &str) -> i32 {
    let now = chrono::Utc::now().to_rfc3339();
    let new_booking = booking::ActiveModel {
        user_id: Set(user_id),
        room_id: Set(room_id),
        date: Set(date.to_string()),
        start_time: Set("09:00:00".to_string()),
        end_time: Set("10:00:00".to_string()),
        status: Set(BookingStatus::Pending),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };
    booking::Entity::insert(new_booking)
        .exec(db)
        .await
        .expect("Failed to create booking")
        .last_insert_id
}
