use sea_orm::sea_query::OnConflict;
use sea_orm::*;

use crate::infrastructure::auth::hash_password;
use crate::models::booking::BookingStatus;
use crate::models::user::Role;
use crate::models::{amenity, booking, location, room, room_amenity, user};
use crate::utils::dates::{format_date, now_rfc3339};

const DEMO_USERS: [(&str, &str, Role); 3] = [
    ("admin", "admin@roombook.local", Role::Admin),
    ("owner", "owner@roombook.local", Role::Owner),
    ("user", "user@roombook.local", Role::User),
];

const DEMO_AMENITIES: [&str; 4] = ["Projector", "Whiteboard", "Wi-Fi", "Coffee machine"];

async fn demo_user(db: &DatabaseConnection, username: &str) -> Result<user::Model, DbErr> {
    user::Entity::find()
        .filter(user::Column::Username.eq(username))
        .one(db)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("demo user {}", username)))
}

/// Insert demo accounts, a venue with rooms and a few bookings.
///
/// Accounts use their username as password. Safe to run on every start:
/// users and amenities are skipped when present, the venue only when the
/// location table is empty.
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    // 1. Users
    for (username, email, role) in DEMO_USERS {
        let password_hash = hash_password(username).map_err(DbErr::Custom)?;
        let now = now_rfc3339();
        let account = user::ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            role: Set(role),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        };

        user::Entity::insert(account)
            .on_conflict(
                OnConflict::column(user::Column::Username)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    // 2. Amenities
    for name in DEMO_AMENITIES {
        amenity::Entity::insert(amenity::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(amenity::Column::Name)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    }

    if location::Entity::find().count(db).await? > 0 {
        tracing::debug!("Locations already present, skipping demo venue");
        return Ok(());
    }

    // 3. Venue and rooms
    let owner = demo_user(db, "owner").await?;
    let guest = demo_user(db, "user").await?;

    let venue = location::ActiveModel {
        name: Set("Harbour House".to_owned()),
        address: Set("12 Quay Street".to_owned()),
        description: Set("Meeting rooms by the water".to_owned()),
        owner_id: Set(Some(owner.id)),
        created_at: Set(now_rfc3339()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let rooms = [
        ("Boardroom", 12, 45.0),
        ("Studio", 6, 25.0),
        ("Loft", 30, 80.0),
    ];

    let amenities = amenity::Entity::find()
        .order_by_asc(amenity::Column::Id)
        .all(db)
        .await?;

    let mut created = Vec::with_capacity(rooms.len());
    for (name, capacity, price) in rooms {
        let saved = room::ActiveModel {
            location_id: Set(venue.id),
            name: Set(name.to_owned()),
            capacity: Set(capacity),
            price_per_hour: Set(price),
            description: Set(String::new()),
            is_active: Set(true),
            created_at: Set(now_rfc3339()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let links: Vec<room_amenity::ActiveModel> = amenities
            .iter()
            .take(2)
            .map(|a| room_amenity::ActiveModel {
                room_id: Set(saved.id),
                amenity_id: Set(a.id),
            })
            .collect();
        if !links.is_empty() {
            room_amenity::Entity::insert_many(links)
                .exec_without_returning(db)
                .await?;
        }

        created.push(saved);
    }

    // 4. A couple of bookings in the coming days
    let today = chrono::Local::now().date_naive();
    for (offset, target) in created.iter().take(2).enumerate() {
        let date = today + chrono::Duration::days(offset as i64 + 1);
        let now = now_rfc3339();
        booking::ActiveModel {
            user_id: Set(guest.id),
            room_id: Set(target.id),
            date: Set(format_date(date)),
            start_time: Set("09:00:00".to_owned()),
            end_time: Set("12:00:00".to_owned()),
            status: Set(BookingStatus::Confirmed),
            created_at: Set(now.clone()),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    tracing::info!(
        "Demo venue '{}' seeded with {} rooms",
        venue.name,
        created.len()
    );
    Ok(())
}
