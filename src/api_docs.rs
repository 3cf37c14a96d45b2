use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::dashboard::dashboard,
        api::search::search_rooms,
        api::places::list_places,
        api::places::get_room,
        api::bookings::list_bookings,
        api::bookings::create_booking,
        api::auth::signup,
        api::auth::login,
        api::locations::list_locations,
    ),
    tags(
        (name = "roombook", description = "Roombook API")
    )
)]
pub struct ApiDoc;
