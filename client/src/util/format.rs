//! Display formatting for trips and tickets.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use busline::net::types::{Route, TicketStatus, Trip, TripStatus};
use time::{OffsetDateTime, UtcOffset};

/// `YYYY-MM-DD HH:MM` in the timestamp's own offset.
pub fn format_departure(at: &OffsetDateTime) -> String {
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        at.year(),
        u8::from(at.month()),
        at.day(),
        at.hour(),
        at.minute()
    )
}

/// `YYYY-MM-DDTHH:MM` in UTC, the value a `datetime-local` input expects.
pub fn format_datetime_local(at: &OffsetDateTime) -> String {
    format_departure(&at.to_offset(UtcOffset::UTC)).replacen(' ', "T", 1)
}

pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

/// Minutes as `2h 05m`, or `45m` under an hour.
pub fn format_duration(minutes: i64) -> String {
    let minutes = minutes.max(0);
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{m}m"),
        (h, m) => format!("{h}h {m:02}m"),
    }
}

/// `Origin → Destination`, with placeholders for missing ends.
pub fn route_label(route: Option<&Route>) -> String {
    let name = |loc: Option<&busline::net::types::Location>| {
        loc.map_or_else(|| "?".to_owned(), |l| l.location_name.clone())
    };
    match route {
        Some(route) => format!("{} → {}", name(route.origin.as_ref()), name(route.destination.as_ref())),
        None => "Unknown route".to_owned(),
    }
}

pub fn trip_label(trip: &Trip) -> String {
    route_label(trip.route.as_ref())
}

pub const fn trip_status_label(status: TripStatus) -> &'static str {
    match status {
        TripStatus::Scheduled => "Scheduled",
        TripStatus::OnGoing => "On the road",
        TripStatus::Completed => "Completed",
        TripStatus::Cancelled => "Cancelled",
    }
}

pub const fn ticket_status_label(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Reserved => "Reserved",
        TicketStatus::Paid => "Paid",
        TicketStatus::Cancelled => "Cancelled",
    }
}
