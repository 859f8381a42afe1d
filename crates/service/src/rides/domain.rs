use sea_orm::Value;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Creation payload exactly as received. Every field stays loosely typed
/// until validation: coordinates may arrive as numbers or numeric text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateRidePayload {
    #[serde(default)]
    pub start_lat: Option<JsonValue>,
    #[serde(default)]
    pub start_long: Option<JsonValue>,
    #[serde(default)]
    pub end_lat: Option<JsonValue>,
    #[serde(default)]
    pub end_long: Option<JsonValue>,
    #[serde(default)]
    pub rider_name: Option<JsonValue>,
    #[serde(default)]
    pub driver_name: Option<JsonValue>,
    #[serde(default)]
    pub driver_vehicle: Option<JsonValue>,
}

impl CreateRidePayload {
    /// Pick the ride fields out of an arbitrary JSON body. Anything other
    /// than an object yields an empty payload; unknown keys are ignored.
    pub fn from_json(body: JsonValue) -> Self {
        let JsonValue::Object(mut fields) = body else {
            return Self::default();
        };
        Self {
            start_lat: fields.remove("start_lat"),
            start_long: fields.remove("start_long"),
            end_lat: fields.remove("end_lat"),
            end_long: fields.remove("end_long"),
            rider_name: fields.remove("rider_name"),
            driver_name: fields.remove("driver_name"),
            driver_vehicle: fields.remove("driver_vehicle"),
        }
    }
}

/// A payload that passed every field check.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidRide {
    pub start_lat: f64,
    pub start_long: f64,
    pub end_lat: f64,
    pub end_long: f64,
    pub rider_name: String,
    pub driver_name: String,
    pub driver_vehicle: String,
}

impl ValidRide {
    /// Bind values in `INSERT` column order.
    pub fn into_params(self) -> Vec<Value> {
        vec![
            self.start_lat.into(),
            self.start_long.into(),
            self.end_lat.into(),
            self.end_long.into(),
            self.rider_name.into(),
            self.driver_name.into(),
            self.driver_vehicle.into(),
        ]
    }
}

/// Raw `from`/`count` query parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListRidesQuery {
    pub from: Option<String>,
    pub count: Option<String>,
}
