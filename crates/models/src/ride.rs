//! The `Rides` table: one immutable row per booking.
//!
//! Column names are camelCase in the schema and on the wire, so every field
//! carries both a column and a serde rename.
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "Rides")]
pub struct Model {
    #[sea_orm(primary_key, column_name = "rideID")]
    #[serde(rename = "rideID")]
    pub ride_id: i64,
    #[sea_orm(column_name = "startLat")]
    #[serde(rename = "startLat")]
    pub start_lat: f64,
    #[sea_orm(column_name = "startLong")]
    #[serde(rename = "startLong")]
    pub start_long: f64,
    #[sea_orm(column_name = "endLat")]
    #[serde(rename = "endLat")]
    pub end_lat: f64,
    #[sea_orm(column_name = "endLong")]
    #[serde(rename = "endLong")]
    pub end_long: f64,
    #[sea_orm(column_name = "riderName")]
    #[serde(rename = "riderName")]
    pub rider_name: String,
    #[sea_orm(column_name = "driverName")]
    #[serde(rename = "driverName")]
    pub driver_name: String,
    #[sea_orm(column_name = "driverVehicle")]
    #[serde(rename = "driverVehicle")]
    pub driver_vehicle: String,
    pub created: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub type Ride = Model;
