use super::*;
use busline::net::types::Location;
use time::macros::datetime;

fn route(origin: Option<&str>, destination: Option<&str>) -> Route {
    let loc = |name: &str| Location { location_id: 1, location_name: name.to_owned() };
    Route {
        route_id: "r1".into(),
        origin: origin.map(loc),
        destination: destination.map(loc),
        route_base_price: 10.0,
        route_estimate_duration: 90,
    }
}

#[test]
fn departure_is_zero_padded() {
    assert_eq!(format_departure(&datetime!(2025-03-01 08:05 UTC)), "2025-03-01 08:05");
}

#[test]
fn price_has_two_decimals() {
    assert_eq!(format_price(12.5), "$12.50");
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn duration_formats() {
    assert_eq!(format_duration(45), "45m");
    assert_eq!(format_duration(125), "2h 05m");
    assert_eq!(format_duration(-5), "0m");
}

#[test]
fn route_label_fills_missing_ends() {
    assert_eq!(route_label(Some(&route(Some("Quito"), Some("Cuenca")))), "Quito → Cuenca");
    assert_eq!(route_label(Some(&route(Some("Quito"), None))), "Quito → ?");
    assert_eq!(route_label(None), "Unknown route");
}

#[test]
fn status_labels() {
    assert_eq!(trip_status_label(TripStatus::OnGoing), "On the road");
    assert_eq!(ticket_status_label(TicketStatus::Cancelled), "Cancelled");
}

#[test]
fn datetime_local_is_utc_with_t_separator() {
    assert_eq!(format_datetime_local(&datetime!(2025-03-01 08:05 UTC)), "2025-03-01T08:05");
    assert_eq!(format_datetime_local(&datetime!(2025-03-01 08:05 -5)), "2025-03-01T13:05");
}
