//! Rides module: domain types, payload validation and the orchestrating service.

pub mod domain;
pub mod service;
pub mod validation;

pub use domain::{CreateRidePayload, ListRidesQuery, ValidRide};
pub use service::RideService;
pub use validation::validate_create;
