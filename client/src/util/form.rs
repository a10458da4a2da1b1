//! Form input validation for the auth, purchase, upload, and admin editor
//! flows.
//!
//! Each validator trims its input and returns the cleaned value or the
//! message shown next to the form.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use busline::net::types::{BusInput, RouteInput, TripInput};
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Trimmed `(email, password)` for the login form. The password is not
/// trimmed; whitespace may be part of it.
pub fn validate_login(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

pub fn validate_signup(full_name: &str, email: &str, password: &str) -> Result<SignupInput, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("All fields are required.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(SignupInput { full_name: full_name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Seat number typed into the purchase dialog. `capacity` is the bus size
/// when the trip carries one.
pub fn parse_seat_number(raw: &str, capacity: Option<u32>) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Enter a seat number.".to_owned());
    }
    let seat: u32 = raw.parse().map_err(|_| "Seat number must be a whole number.".to_owned())?;
    if seat == 0 {
        return Err("Seat numbers start at 1.".to_owned());
    }
    match capacity {
        Some(capacity) if seat > capacity => Err(format!("This bus has {capacity} seats.")),
        _ => Ok(seat),
    }
}

/// Identity documents are uploaded as images.
pub fn is_image_mime(mime: &str) -> bool {
    mime.trim().to_ascii_lowercase().starts_with("image/")
}

/// Name for a new location, or the warning to show.
pub fn validate_location_name(raw: &str) -> Result<String, &'static str> {
    let name = raw.trim();
    if name.is_empty() {
        return Err("Enter a name.");
    }
    Ok(name.to_owned())
}

/// Bus editor fields: plate and seat count.
pub fn bus_input(plate: &str, capacity: &str) -> Result<BusInput, &'static str> {
    let plate = plate.trim();
    if plate.is_empty() || capacity.trim().is_empty() {
        return Err("Fill in every field.");
    }
    let bus_capacity: u32 = capacity.trim().parse().map_err(|_| "Seats must be a whole number.")?;
    if bus_capacity == 0 {
        return Err("A bus needs at least one seat.");
    }
    Ok(BusInput { bus_plate_number: plate.to_owned(), bus_capacity })
}

/// Route editor fields. Origin and destination are location ids as picked
/// from the select; the result has passed [`RouteInput::validate`].
pub fn route_input(origin: &str, destination: &str, price: &str, duration: &str) -> Result<RouteInput, &'static str> {
    if [origin, destination, price, duration].iter().any(|f| f.trim().is_empty()) {
        return Err("Fill in every field.");
    }
    let location = |raw: &str| raw.trim().parse::<i64>().map_err(|_| "Pick a location from the list.");
    let input = RouteInput {
        origin: location(origin)?,
        destination: location(destination)?,
        route_base_price: price.trim().parse().map_err(|_| "Base price must be a number.")?,
        route_estimate_duration: duration.trim().parse().map_err(|_| "Duration must be whole minutes.")?,
    };
    input.validate()?;
    Ok(input)
}

/// Trip editor fields. `departure` is a `datetime-local` value and is
/// read as UTC.
pub fn trip_input(route_id: &str, bus_id: &str, departure: &str) -> Result<TripInput, &'static str> {
    let route_id = route_id.trim();
    let bus_id = bus_id.trim();
    if route_id.is_empty() || bus_id.is_empty() || departure.trim().is_empty() {
        return Err("Fill in every field.");
    }
    Ok(TripInput {
        route_id: route_id.to_owned(),
        bus_id: bus_id.to_owned(),
        trip_departure_date: parse_departure(departure)?,
    })
}

/// `YYYY-MM-DDTHH:MM`, with optional seconds, as UTC.
pub fn parse_departure(raw: &str) -> Result<OffsetDateTime, &'static str> {
    let raw = raw.trim();
    PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]"))
        .or_else(|_| PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|_| "Enter a valid departure date and time.")
}
