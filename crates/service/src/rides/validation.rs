//! Field checks for ride creation. Pure: no storage access.

use serde_json::Value as JsonValue;

use super::domain::{CreateRidePayload, ValidRide};
use crate::errors::RideError;

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

pub const START_COORDINATES_MESSAGE: &str =
    "Start latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively";
pub const END_COORDINATES_MESSAGE: &str =
    "End latitude and longitude must be between -90 - 90 and -180 to 180 degrees respectively";
pub const RIDER_NAME_MESSAGE: &str = "Rider name must be a non empty string";
pub const DRIVER_NAME_MESSAGE: &str = "Driver name must be a non empty string";
pub const DRIVER_VEHICLE_MESSAGE: &str = "Driver vehicle must be a non empty string";

/// Check a creation payload, stopping at the first failed field group.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use service::rides::{validate_create, CreateRidePayload};
///
/// let payload: CreateRidePayload = serde_json::from_value(json!({
///     "start_lat": 20, "start_long": "100", "end_lat": 20, "end_long": 100,
///     "rider_name": "John", "driver_name": "Victor", "driver_vehicle": "Volvo"
/// })).unwrap();
/// let ride = validate_create(&payload).unwrap();
/// assert_eq!(ride.start_long, 100.0);
/// ```
pub fn validate_create(payload: &CreateRidePayload) -> Result<ValidRide, RideError> {
    let (start_lat, start_long) = coordinates(&payload.start_lat, &payload.start_long)
        .ok_or_else(|| RideError::validation(START_COORDINATES_MESSAGE))?;
    let (end_lat, end_long) = coordinates(&payload.end_lat, &payload.end_long)
        .ok_or_else(|| RideError::validation(END_COORDINATES_MESSAGE))?;
    let rider_name = non_empty(&payload.rider_name).ok_or_else(|| RideError::validation(RIDER_NAME_MESSAGE))?;
    let driver_name = non_empty(&payload.driver_name).ok_or_else(|| RideError::validation(DRIVER_NAME_MESSAGE))?;
    let driver_vehicle =
        non_empty(&payload.driver_vehicle).ok_or_else(|| RideError::validation(DRIVER_VEHICLE_MESSAGE))?;

    Ok(ValidRide { start_lat, start_long, end_lat, end_long, rider_name, driver_name, driver_vehicle })
}

fn coordinates(lat: &Option<JsonValue>, long: &Option<JsonValue>) -> Option<(f64, f64)> {
    let lat = coerce_number(lat.as_ref()).filter(|v| within(*v, MAX_LATITUDE))?;
    let long = coerce_number(long.as_ref()).filter(|v| within(*v, MAX_LONGITUDE))?;
    Some((lat, long))
}

fn within(v: f64, bound: f64) -> bool {
    (-bound..=bound).contains(&v)
}

/// Numbers pass through; numeric text is parsed. Everything else, including
/// empty text, null and booleans, fails to coerce.
pub fn coerce_number(v: Option<&JsonValue>) -> Option<f64> {
    let n = match v? {
        JsonValue::Number(n) => n.as_f64()?,
        JsonValue::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

fn non_empty(v: &Option<JsonValue>) -> Option<String> {
    match v {
        Some(JsonValue::String(s)) if !s.is_empty() => Some(s.clone()),
        _ => None,
    }
}
