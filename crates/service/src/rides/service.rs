use std::sync::Arc;

use models::ride::Ride;
use tracing::{debug, error, info, instrument};

use super::domain::{CreateRidePayload, ListRidesQuery};
use super::validation::validate_create;
use crate::errors::RideError;
use crate::gateway::{GatewayError, PersistenceGateway};
use crate::pagination::{parse_integral, Window};

const INSERT_RIDE: &str = "INSERT INTO Rides(startLat, startLong, endLat, endLong, riderName, driverName, driverVehicle) VALUES (?, ?, ?, ?, ?, ?, ?)";
const SELECT_RIDE_BY_ID: &str = "SELECT * FROM Rides WHERE rideID = ?";
const SELECT_RIDE_PAGE: &str = "SELECT * FROM Rides ORDER BY rideID ASC LIMIT ? OFFSET ?";

/// Ride workflows over a persistence gateway, independent of web framework.
/// Every operation returns the matching records as a list, or one [`RideError`].
pub struct RideService<G: PersistenceGateway> {
    gateway: Arc<G>,
}

impl<G: PersistenceGateway> Clone for RideService<G> {
    fn clone(&self) -> Self {
        Self { gateway: self.gateway.clone() }
    }
}

fn storage_failure(op: &'static str) -> impl FnOnce(GatewayError) -> RideError {
    move |e| {
        error!(op, error = %e, "storage call failed");
        RideError::Server
    }
}

impl<G: PersistenceGateway> RideService<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    /// Validate and persist a ride, then read the stored row back.
    ///
    /// Nothing reaches storage when validation fails.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::gateway::mock::FailingGateway;
    /// use service::rides::{CreateRidePayload, RideService};
    /// use service::ErrorKind;
    ///
    /// let gw = Arc::new(FailingGateway::default());
    /// let svc = RideService::new(gw.clone());
    /// let err = tokio_test::block_on(svc.create(&CreateRidePayload::default())).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ValidationError);
    /// assert_eq!(gw.calls(), 0);
    /// ```
    #[instrument(skip_all)]
    pub async fn create(&self, payload: &CreateRidePayload) -> Result<Vec<Ride>, RideError> {
        let ride = validate_create(payload).inspect_err(|e| debug!(reason = %e, "ride rejected"))?;

        let ctx = self
            .gateway
            .execute(INSERT_RIDE, ride.into_params())
            .await
            .map_err(storage_failure("insert ride"))?;

        let rows: Vec<Ride> = self
            .gateway
            .query(SELECT_RIDE_BY_ID, vec![ctx.last_insert_id.into()])
            .await
            .map_err(storage_failure("read back ride"))?;
        if rows.is_empty() {
            error!(ride_id = ctx.last_insert_id, "inserted ride could not be read back");
            return Err(RideError::Server);
        }
        info!(ride_id = ctx.last_insert_id, "ride_created");
        Ok(rows)
    }

    /// One page of rides in ascending id order.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use service::gateway::mock::FailingGateway;
    /// use service::rides::{ListRidesQuery, RideService};
    /// use service::RideError;
    ///
    /// let svc = RideService::new(Arc::new(FailingGateway::default()));
    /// let q = ListRidesQuery { from: Some("0".into()), count: Some("5".into()) };
    /// assert_eq!(tokio_test::block_on(svc.list(&q)), Err(RideError::Server));
    /// ```
    #[instrument(skip(self), fields(from = ?query.from, count = ?query.count))]
    pub async fn list(&self, query: &ListRidesQuery) -> Result<Vec<Ride>, RideError> {
        let window = Window::parse(query.from.as_deref(), query.count.as_deref())?;
        let rows: Vec<Ride> = self
            .gateway
            .query(SELECT_RIDE_PAGE, vec![window.count.into(), window.from.into()])
            .await
            .map_err(storage_failure("list rides"))?;
        if rows.is_empty() {
            return Err(RideError::NotFound);
        }
        debug!(rows = rows.len(), "rides listed");
        Ok(rows)
    }

    /// The ride with the given id, as a one-element list. Integral numeric
    /// text such as `"1.0"` names ride 1; an id that is not an integer cannot
    /// match any ride.
    #[instrument(skip(self))]
    pub async fn get(&self, id: &str) -> Result<Vec<Ride>, RideError> {
        let Some(id) = parse_integral(id) else {
            return Err(RideError::NotFound);
        };
        let rows: Vec<Ride> = self
            .gateway
            .query(SELECT_RIDE_BY_ID, vec![id.into()])
            .await
            .map_err(storage_failure("get ride"))?;
        if rows.is_empty() {
            return Err(RideError::NotFound);
        }
        Ok(rows)
    }
}
