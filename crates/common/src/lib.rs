//! Shared building blocks for the ride bookings workspace: tracing setup,
//! startup environment checks and small wire types.

pub mod types;
pub mod utils;
pub mod env;
