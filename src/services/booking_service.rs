//! Booking Service - reservation creation and status changes

use chrono::{NaiveDate, NaiveTime};
use sea_orm::*;
use serde::Deserialize;

use crate::domain::DomainError;
use crate::infrastructure::auth::CurrentUser;
use crate::models::booking::{self, BookingStatus, Entity as Booking};
use crate::models::location::Entity as Location;
use crate::models::room::Entity as Room;
use crate::utils::dates::{format_date, format_time, now_rfc3339, parse_date, parse_time};

pub const ALREADY_BOOKED: &str = "room already booked this date";

/// Booking form as posted by the client
#[derive(Debug, Clone, Deserialize)]
pub struct BookingRequest {
    pub room: i32,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// A parsed, validated day and time range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingSlot {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl BookingSlot {
    /// Whole-day slot, used when the request carries no times.
    pub fn whole_day(date: NaiveDate) -> Self {
        Self {
            date,
            start: NaiveTime::MIN,
            end: NaiveTime::from_hms_opt(23, 59, 59).unwrap_or(NaiveTime::MIN),
        }
    }
}

impl BookingRequest {
    pub fn slot(&self) -> Result<BookingSlot, DomainError> {
        let date = parse_date(&self.date)
            .ok_or_else(|| DomainError::field("date", "Enter a date as YYYY-MM-DD."))?;

        let mut slot = BookingSlot::whole_day(date);

        if let Some(start) = self.start_time.as_deref() {
            slot.start = parse_time(start)
                .ok_or_else(|| DomainError::field("start_time", "Enter a time as HH:MM."))?;
        }
        if let Some(end) = self.end_time.as_deref() {
            slot.end = parse_time(end)
                .ok_or_else(|| DomainError::field("end_time", "Enter a time as HH:MM."))?;
        }

        if slot.start >= slot.end {
            return Err(DomainError::field(
                "end_time",
                "End time must be after start time.",
            ));
        }

        Ok(slot)
    }
}

/// Map a unique-index violation on (room_id, date) to the booking conflict.
fn conflict_on_unique(err: DbErr) -> DomainError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => DomainError::Conflict(ALREADY_BOOKED.into()),
        _ => DomainError::from(err),
    }
}

/// Create a pending booking of `room_id` for `user`.
///
/// Any existing booking of the room on the same day is a conflict, whatever
/// its hours. The check runs before the room lookup, so an unknown room id is
/// reported as not found only once no booking exists for it.
pub async fn create_booking(
    db: &DatabaseConnection,
    room_id: i32,
    slot: BookingSlot,
    user: &CurrentUser,
) -> Result<booking::Model, DomainError> {
    let date = format_date(slot.date);
    let txn = db.begin().await?;

    // 1. Same room, same day
    let existing = Booking::find()
        .filter(booking::Column::RoomId.eq(room_id))
        .filter(booking::Column::Date.eq(date.as_str()))
        .count(&txn)
        .await?;

    if existing > 0 {
        txn.rollback().await?;
        tracing::info!(room_id, date = %date, "Booking rejected: room already booked");
        return Err(DomainError::Conflict(ALREADY_BOOKED.into()));
    }

    // 2. Resolve room
    let Some(room) = Room::find_by_id(room_id).one(&txn).await? else {
        txn.rollback().await?;
        return Err(DomainError::NotFound(format!("room {}", room_id)));
    };

    // 3. Insert
    let now = now_rfc3339();
    let new_booking = booking::ActiveModel {
        user_id: Set(user.id),
        room_id: Set(room.id),
        date: Set(date),
        start_time: Set(format_time(slot.start)),
        end_time: Set(format_time(slot.end)),
        status: Set(BookingStatus::Pending),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    };

    let saved = new_booking.insert(&txn).await.map_err(conflict_on_unique)?;
    txn.commit().await.map_err(conflict_on_unique)?;

    tracing::info!(
        booking_id = saved.id,
        user = %user.username,
        "{}",
        saved.describe(&room.name)
    );

    Ok(saved)
}

/// Confirm or cancel a booking. Admins and the owner of the room's location only.
pub async fn update_booking_status(
    db: &DatabaseConnection,
    booking_id: i32,
    status: BookingStatus,
    user: &CurrentUser,
) -> Result<booking::Model, DomainError> {
    let (existing, room) = Booking::find_by_id(booking_id)
        .find_also_related(Room)
        .one(db)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("booking {}", booking_id)))?;

    let owner_id = match room {
        Some(room) => Location::find_by_id(room.location_id)
            .one(db)
            .await?
            .and_then(|l| l.owner_id),
        None => None,
    };

    if !user.can_manage(owner_id) {
        return Err(DomainError::Forbidden(
            "Only the venue owner or an administrator can change a booking".into(),
        ));
    }

    let mut active: booking::ActiveModel = existing.into();
    active.status = Set(status);
    active.updated_at = Set(now_rfc3339());

    let updated = active.update(db).await?;
    tracing::info!(booking_id, status = status.label(), "Booking status changed");
    Ok(updated)
}
