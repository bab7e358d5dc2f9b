//! Reservation display helpers and date predicates.

use gearbase_core::model::ReservationFields;
use time::OffsetDateTime;

/// Friendly display label for a reservation status; unrecognized statuses
/// map to `"Unknown"`, never an error.
#[must_use]
pub fn friendly_reservation_status(status: &str) -> &'static str {
    match status {
        "creating" => "Draft",
        "open" => "Booked",
        "closed" => "Completed",
        "cancelled" => "Cancelled",
        _ => "Unknown",
    }
}

/// CSS label class for a reservation status, `""` for unrecognized ones.
#[must_use]
pub fn friendly_reservation_css(status: &str) -> &'static str {
    match status {
        "creating" => "label-creating",
        "open" => "label-open",
        "closed" => "label-closed",
        "cancelled" => "label-cancelled",
        _ => "",
    }
}

/// Booked and past its start date.
#[must_use]
pub fn is_reservation_overdue(reservation: &ReservationFields, now: OffsetDateTime) -> bool {
    reservation.status == "open" && reservation.from_date.is_some_and(|from| now > from)
}

/// Booked but the whole date window has already passed.
#[must_use]
pub fn is_reservation_in_the_past(reservation: &ReservationFields, now: OffsetDateTime) -> bool {
    reservation.status == "open"
        && reservation.from_date.is_some_and(|from| now > from)
        && reservation.to_date.is_some_and(|to| now > to)
}

#[must_use]
pub fn is_reservation_archived(reservation: &ReservationFields) -> bool {
    reservation.archived.is_some()
}

/// Status CSS, striped when the reservation is archived.
#[must_use]
pub fn reservation_css(reservation: &ReservationFields) -> String {
    let css = friendly_reservation_css(&reservation.status);

    if is_reservation_archived(reservation) {
        format!("{css} label-striped")
    } else {
        css.to_owned()
    }
}

///
/// TESTS
///
