mod common;

use chrono::NaiveDate;
use common::*;
use roombook::domain::DomainError;
use roombook::models::booking::{self, BookingStatus};
use roombook::models::user::Role;
use roombook::services::booking_service::{
    create_booking, update_booking_status, BookingSlot, ALREADY_BOOKED,
};
use sea_orm::{EntityTrait, PaginatorTrait};

fn slot(date: &str) -> BookingSlot {
    BookingSlot::whole_day(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap())
}

#[tokio::test]
async fn test_booking_is_created_pending_for_current_user() {
    let db = setup_test_db().await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = create_location(&db, None, "Harbour House").await;
    let studio = create_room(&db, venue, "Studio").await;

    let created = create_booking(&db, studio, slot("2030-04-01"), &guest)
        .await
        .unwrap();

    assert_eq!(created.user_id, guest.id);
    assert_eq!(created.room_id, studio);
    assert_eq!(created.date, "2030-04-01");
    assert_eq!(created.start_time, "00:00:00");
    assert_eq!(created.end_time, "23:59:59");
    assert_eq!(created.status, BookingStatus::Pending);
}

#[tokio::test]
async fn test_second_booking_same_room_same_day_conflicts() {
    let db = setup_test_db().await;
    let alice = create_user(&db, "alice", Role::User).await;
    let bob = create_user(&db, "bob", Role::User).await;
    let venue = create_location(&db, None, "Harbour House").await;
    let studio = create_room(&db, venue, "Studio").await;

    create_booking(&db, studio, slot("2030-04-01"), &alice)
        .await
        .unwrap();

    match create_booking(&db, studio, slot("2030-04-01"), &bob).await {
        Err(DomainError::Conflict(msg)) => assert_eq!(msg, ALREADY_BOOKED),
        other => panic!("expected conflict, got {:?}", other),
    }

    assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 1);

    // Another day is fine
    create_booking(&db, studio, slot("2030-04-02"), &bob)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_canceled_booking_still_holds_the_day() {
    let db = setup_test_db().await;
    let admin = create_user(&db, "root", Role::Admin).await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = create_location(&db, None, "Harbour House").await;
    let studio = create_room(&db, venue, "Studio").await;

    let first = create_booking(&db, studio, slot("2030-04-01"), &guest)
        .await
        .unwrap();
    update_booking_status(&db, first.id, BookingStatus::Canceled, &admin)
        .await
        .unwrap();

    let again = create_booking(&db, studio, slot("2030-04-01"), &guest).await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_booking_unknown_room_is_not_found() {
    let db = setup_test_db().await;
    let guest = create_user(&db, "guest", Role::User).await;

    let result = create_booking(&db, 999, slot("2030-04-01"), &guest).await;
    assert!(matches!(result, Err(DomainError::NotFound(_))));
    assert_eq!(booking::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn test_unique_index_rejects_direct_duplicate_insert() {
    let db = setup_test_db().await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = create_location(&db, None, "Harbour House").await;
    let studio = create_room(&db, venue, "Studio").await;

    insert_booking(&db, guest.id, studio, "2030-05-05").await;

    let now = chrono::Utc::now().to_rfc3339();
    let duplicate = booking::ActiveModel {
        user_id: sea_orm::Set(guest.id),
        room_id: sea_orm::Set(studio),
        date: sea_orm::Set("2030-05-05".to_string()),
        start_time: sea_orm::Set("14:00:00".to_string()),
        end_time: sea_orm::Set("15:00:00".to_string()),
        status: sea_orm::Set(BookingStatus::Pending),
        created_at: sea_orm::Set(now.clone()),
        updated_at: sea_orm::Set(now),
        ..Default::default()
    };
    let err = booking::Entity::insert(duplicate).exec(&db).await.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
}

#[tokio::test]
async fn test_status_change_limited_to_owner_and_admin() {
    let db = setup_test_db().await;
    let owner = create_user(&db, "olga", Role::Owner).await;
    let other_owner = create_user(&db, "oscar", Role::Owner).await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = create_location(&db, Some(owner.id), "Harbour House").await;
    let studio = create_room(&db, venue, "Studio").await;

    let pending = create_booking(&db, studio, slot("2030-04-01"), &guest)
        .await
        .unwrap();

    let by_guest = update_booking_status(&db, pending.id, BookingStatus::Confirmed, &guest).await;
    assert!(matches!(by_guest, Err(DomainError::Forbidden(_))));

    let by_stranger =
        update_booking_status(&db, pending.id, BookingStatus::Confirmed, &other_owner).await;
    assert!(matches!(by_stranger, Err(DomainError::Forbidden(_))));

    let confirmed = update_booking_status(&db, pending.id, BookingStatus::Confirmed, &owner)
        .await
        .unwrap();
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let missing = update_booking_status(&db, 4242, BookingStatus::Confirmed, &owner).await;
    assert!(matches!(missing, Err(DomainError::NotFound(_))));
}
