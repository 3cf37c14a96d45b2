mod common;

use common::*;
use roombook::domain::{DomainError, RoomRepository};
use roombook::infrastructure::SeaOrmRoomRepository;
use roombook::models::favorite;
use roombook::models::user::Role;
use roombook::services::catalog_service::{
    add_image, create_amenity, create_location, create_room, LocationInput, RoomInput,
};
use roombook::services::favorite_service::{add_favorite, list_favorites, remove_favorite};
use roombook::services::review_service::{create_review, list_reviews, ReviewInput};
use sea_orm::{ActiveModelTrait, Set};

fn room_input(location_id: i32, amenity_ids: Vec<i32>) -> RoomInput {
    RoomInput {
        location_id,
        name: "Boardroom".into(),
        capacity: 12,
        price_per_hour: 45.0,
        description: String::new(),
        amenity_ids,
    }
}

#[tokio::test]
async fn test_owner_registers_venue_and_room_with_amenities() {
    let db = setup_test_db().await;
    let admin = create_user(&db, "root", Role::Admin).await;
    let owner = create_user(&db, "olga", Role::Owner).await;

    let venue = create_location(
        &db,
        LocationInput {
            name: "Harbour House".into(),
            address: "12 Quay Street".into(),
            description: String::new(),
        },
        &owner,
    )
    .await
    .unwrap();
    assert_eq!(venue.owner_id, Some(owner.id));

    let projector = create_amenity(&db, "Projector", &admin).await.unwrap();
    let wifi = create_amenity(&db, "Wi-Fi", &admin).await.unwrap();

    let room = create_room(&db, room_input(venue.id, vec![wifi.id, projector.id]), &owner)
        .await
        .unwrap();

    let repo = SeaOrmRoomRepository::new(db.clone());
    let detail = repo
        .find_detail(room.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(detail.amenities_list, "Projector, Wi-Fi");
}

#[tokio::test]
async fn test_plain_users_cannot_manage_catalog() {
    let db = setup_test_db().await;
    let owner = create_user(&db, "olga", Role::Owner).await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = create_location_row(&db, owner.id).await;

    let location = create_location(
        &db,
        LocationInput {
            name: "Shed".into(),
            address: "Back yard".into(),
            description: String::new(),
        },
        &guest,
    )
    .await;
    assert!(matches!(location, Err(DomainError::Forbidden(_))));

    let room = create_room(&db, room_input(venue, vec![]), &guest).await;
    assert!(matches!(room, Err(DomainError::Forbidden(_))));

    let amenity = create_amenity(&db, "Sauna", &owner).await;
    assert!(matches!(amenity, Err(DomainError::Forbidden(_))));
}

async fn create_location_row(db: &sea_orm::DatabaseConnection, owner_id: i32) -> i32 {
    common::create_location(db, Some(owner_id), "Harbour House").await
}

#[tokio::test]
async fn test_room_input_is_validated() {
    let db = setup_test_db().await;
    let owner = create_user(&db, "olga", Role::Owner).await;
    let venue = create_location_row(&db, owner.id).await;

    let mut empty = room_input(venue, vec![]);
    empty.capacity = 0;
    assert!(matches!(
        create_room(&db, empty, &owner).await,
        Err(DomainError::Validation { .. })
    ));

    let unknown_amenity = create_room(&db, room_input(venue, vec![77]), &owner).await;
    assert!(matches!(unknown_amenity, Err(DomainError::Validation { .. })));

    let unknown_venue = create_room(&db, room_input(venue + 50, vec![]), &owner).await;
    assert!(matches!(unknown_venue, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_duplicate_amenity_name_conflicts() {
    let db = setup_test_db().await;
    let admin = create_user(&db, "root", Role::Admin).await;

    create_amenity(&db, "Projector", &admin).await.unwrap();
    let again = create_amenity(&db, "Projector", &admin).await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));
}

#[tokio::test]
async fn test_image_url_must_be_http() {
    let db = setup_test_db().await;
    let owner = create_user(&db, "olga", Role::Owner).await;
    let venue = create_location_row(&db, owner.id).await;
    let studio = common::create_room(&db, venue, "Studio").await;

    let bad = add_image(&db, studio, "ftp://files.example.com/a.jpg", &owner).await;
    assert!(matches!(bad, Err(DomainError::Validation { .. })));

    let saved = add_image(&db, studio, "https://img.example.com/a.jpg", &owner)
        .await
        .unwrap();
    assert_eq!(saved.url, "https://img.example.com/a.jpg");
}

#[tokio::test]
async fn test_duplicate_favorite_is_rejected() {
    let db = setup_test_db().await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = common::create_location(&db, None, "Harbour House").await;
    let studio = common::create_room(&db, venue, "Studio").await;

    add_favorite(&db, studio, &guest).await.unwrap();
    let again = add_favorite(&db, studio, &guest).await;
    assert!(matches!(again, Err(DomainError::Conflict(_))));

    // The store itself refuses the pair, not only the service
    let direct = favorite::ActiveModel {
        user_id: Set(guest.id),
        room_id: Set(studio),
        created_at: Set(chrono::Utc::now().to_rfc3339()),
        ..Default::default()
    }
    .insert(&db)
    .await;
    assert!(direct.is_err());

    let favorites = list_favorites(&db, &guest).await.unwrap();
    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].room.as_ref().map(|r| r.id), Some(studio));

    remove_favorite(&db, studio, &guest).await.unwrap();
    let missing = remove_favorite(&db, studio, &guest).await;
    assert!(matches!(missing, Err(DomainError::NotFound(_))));

    let unknown_room = add_favorite(&db, studio + 10, &guest).await;
    assert!(matches!(unknown_room, Err(DomainError::NotFound(_))));
}

#[tokio::test]
async fn test_review_rating_bounds() {
    let db = setup_test_db().await;
    let guest = create_user(&db, "guest", Role::User).await;
    let venue = common::create_location(&db, None, "Harbour House").await;
    let studio = common::create_room(&db, venue, "Studio").await;

    for rating in [0, 6] {
        let result = create_review(
            &db,
            studio,
            ReviewInput {
                rating,
                comment: String::new(),
            },
            &guest,
        )
        .await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    create_review(
        &db,
        studio,
        ReviewInput {
            rating: 5,
            comment: "Great light".into(),
        },
        &guest,
    )
    .await
    .unwrap();

    let reviews = list_reviews(&db, studio).await.unwrap();
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].username.as_deref(), Some("guest"));

    let unknown = create_review(
        &db,
        studio + 10,
        ReviewInput {
            rating: 3,
            comment: String::new(),
        },
        &guest,
    )
    .await;
    assert!(matches!(unknown, Err(DomainError::NotFound(_))));
}
