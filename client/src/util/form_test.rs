use super::*;
use time::macros::datetime;

#[test]
fn validate_login_trims_email_only() {
    assert_eq!(
        validate_login("  ana@example.com ", " secret "),
        Ok(("ana@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_login_requires_both_fields() {
    assert_eq!(validate_login("   ", "secret"), Err("Enter your email and password."));
    assert_eq!(validate_login("ana@example.com", ""), Err("Enter your email and password."));
}

#[test]
fn validate_signup_requires_every_field() {
    assert_eq!(validate_signup("", "a@b.com", "pw"), Err("All fields are required."));
    assert_eq!(validate_signup("Ana", " ", "pw"), Err("All fields are required."));
    assert_eq!(validate_signup("Ana", "a@b.com", ""), Err("All fields are required."));
}

#[test]
fn validate_signup_checks_email_shape() {
    assert_eq!(validate_signup("Ana", "ana.example.com", "pw"), Err("Enter a valid email address."));
    let input = validate_signup(" Ana Ruiz ", " ana@example.com ", "pw").unwrap();
    assert_eq!(input.full_name, "Ana Ruiz");
    assert_eq!(input.email, "ana@example.com");
}

#[test]
fn parse_seat_number_cases() {
    assert_eq!(parse_seat_number(" 12 ", None), Ok(12));
    assert_eq!(parse_seat_number("40", Some(40)), Ok(40));
    assert_eq!(parse_seat_number("", None), Err("Enter a seat number.".to_owned()));
    assert_eq!(parse_seat_number("12a", None), Err("Seat number must be a whole number.".to_owned()));
    assert_eq!(parse_seat_number("-3", None), Err("Seat number must be a whole number.".to_owned()));
    assert_eq!(parse_seat_number("0", None), Err("Seat numbers start at 1.".to_owned()));
    assert_eq!(parse_seat_number("41", Some(40)), Err("This bus has 40 seats.".to_owned()));
}

#[test]
fn image_mime_detection() {
    assert!(is_image_mime("image/png"));
    assert!(is_image_mime("IMAGE/JPEG"));
    assert!(!is_image_mime("application/pdf"));
    assert!(!is_image_mime(""));
}

#[test]
fn location_name_is_trimmed_and_required() {
    assert_eq!(validate_location_name("  Quito "), Ok("Quito".to_owned()));
    assert_eq!(validate_location_name("   "), Err("Enter a name."));
}

// =============================================================================
// Admin editors
// =============================================================================

#[test]
fn bus_input_parses_capacity() {
    assert_eq!(
        bus_input(" PBA-1234 ", "40"),
        Ok(BusInput { bus_plate_number: "PBA-1234".into(), bus_capacity: 40 })
    );
    assert_eq!(bus_input("", "40"), Err("Fill in every field."));
    assert_eq!(bus_input("PBA-1234", "forty"), Err("Seats must be a whole number."));
    assert_eq!(bus_input("PBA-1234", "0"), Err("A bus needs at least one seat."));
}

#[test]
fn route_input_goes_through_route_validation() {
    let input = route_input("1", "2", "15.5", "600").unwrap();
    assert_eq!(input.origin, 1);
    assert_eq!(input.destination, 2);
    assert!((input.route_base_price - 15.5).abs() < f64::EPSILON);
    assert_eq!(input.route_estimate_duration, 600);

    assert_eq!(route_input("1", "1", "15", "60"), Err("Origin and destination must differ."));
    assert_eq!(route_input("1", "2", "0", "60"), Err("Base price must be greater than zero."));
    assert_eq!(route_input("1", "2", "15", "0"), Err("Estimated duration must be greater than zero."));
}

#[test]
fn route_input_rejects_unparsable_fields() {
    assert_eq!(route_input("", "2", "15", "60"), Err("Fill in every field."));
    assert_eq!(route_input("x", "2", "15", "60"), Err("Pick a location from the list."));
    assert_eq!(route_input("1", "2", "cheap", "60"), Err("Base price must be a number."));
    assert_eq!(route_input("1", "2", "15", "1.5"), Err("Duration must be whole minutes."));
}

#[test]
fn trip_input_reads_departure_as_utc() {
    let input = trip_input("r1", "b1", "2025-05-02T07:30").unwrap();
    assert_eq!(input.route_id, "r1");
    assert_eq!(input.bus_id, "b1");
    assert_eq!(input.trip_departure_date, datetime!(2025-05-02 07:30 UTC));
    assert_eq!(trip_input("r1", "", "2025-05-02T07:30"), Err("Fill in every field."));
    assert_eq!(trip_input("r1", "b1", "tomorrow"), Err("Enter a valid departure date and time."));
}

#[test]
fn departure_accepts_seconds() {
    assert_eq!(parse_departure("2025-05-02T07:30:15"), Ok(datetime!(2025-05-02 07:30:15 UTC)));
}
