use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use utoipa::IntoParams;

use crate::domain::{DomainError, RoomSearch};
use crate::infrastructure::AppState;
use crate::utils::dates::parse_date;

/// Query string of the search form. Empty values mean "any".
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    /// Location id
    pub location: Option<String>,
    /// Day to check, YYYY-MM-DD
    pub date: Option<String>,
}

impl SearchQuery {
    pub fn to_search(&self) -> Result<RoomSearch, DomainError> {
        let location_id = match non_empty(&self.location) {
            Some(raw) => Some(
                raw.parse::<i32>()
                    .map_err(|_| DomainError::field("location", "Select a valid location."))?,
            ),
            None => None,
        };

        let date = match non_empty(&self.date) {
            Some(raw) => Some(
                parse_date(raw)
                    .ok_or_else(|| DomainError::field("date", "Enter a date as YYYY-MM-DD."))?,
            ),
            None => None,
        };

        Ok(RoomSearch { location_id, date })
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

#[utoipa::path(
    get,
    path = "/api/search/",
    params(SearchQuery),
    responses(
        (status = 200, description = "Rooms free on the given day"),
        (status = 400, description = "Malformed date or location")
    )
)]
pub async fn search_rooms(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<Value>, DomainError> {
    let search = params.to_search()?;
    tracing::debug!(?search, "Availability search");

    let rooms = state.room_repo.search_available(search).await?;
    let total = rooms.len();

    Ok(Json(json!({ "rooms": rooms, "total": total })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_mean_no_filter() {
        let query = SearchQuery {
            location: Some("".into()),
            date: Some("  ".into()),
        };
        let search = query.to_search().unwrap();
        assert_eq!(search.location_id, None);
        assert_eq!(search.date, None);
    }

    #[test]
    fn bad_date_is_rejected() {
        let query = SearchQuery {
            location: Some("2".into()),
            date: Some("tomorrow".into()),
        };
        assert!(matches!(
            query.to_search(),
            Err(DomainError::Validation { .. })
        ));
    }
}
