use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    routing::get,
    Json, Router,
};
use configs::StatusPolicy;
use models::ride::Ride;
use serde_json::Value as JsonValue;
use service::{
    gateway::SeaOrmGateway,
    pagination::INVALID_WINDOW_MESSAGE,
    rides::{CreateRidePayload, ListRidesQuery},
    RideError, RideService,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{debug, Level};

use crate::errors::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub rides: Arc<RideService<SeaOrmGateway>>,
    pub status_policy: StatusPolicy,
}

impl AppState {
    pub fn new(gateway: SeaOrmGateway, status_policy: StatusPolicy) -> Self {
        Self { rides: Arc::new(RideService::new(Arc::new(gateway))), status_policy }
    }

    fn respond(&self, res: Result<Vec<Ride>, RideError>) -> Result<Json<Vec<Ride>>, ApiError> {
        res.map(Json).map_err(|e| ApiError::new(e, self.status_policy))
    }
}

pub async fn health() -> &'static str {
    common::types::HEALTHY
}

/// A body that is not a JSON object is checked as an empty payload, so it
/// fails validation like any other bad input. Repeated keys keep the last value.
async fn create_ride(
    State(state): State<AppState>,
    body: Result<Json<JsonValue>, JsonRejection>,
) -> Result<Json<Vec<Ride>>, ApiError> {
    let payload = match body {
        Ok(Json(body)) => CreateRidePayload::from_json(body),
        Err(rejection) => {
            debug!(reason = %rejection.body_text(), "unreadable ride payload");
            CreateRidePayload::default()
        }
    };
    state.respond(state.rides.create(&payload).await)
}

/// A query string that cannot be read (e.g. a repeated `from`) is an invalid window.
async fn list_rides(
    State(state): State<AppState>,
    query: Result<Query<ListRidesQuery>, QueryRejection>,
) -> Result<Json<Vec<Ride>>, ApiError> {
    let Ok(Query(query)) = query.inspect_err(|r| debug!(reason = %r.body_text(), "unreadable list query")) else {
        return state.respond(Err(RideError::validation(INVALID_WINDOW_MESSAGE)));
    };
    state.respond(state.rides.list(&query).await)
}

/// An id that cannot be decoded names no ride.
async fn get_ride(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Vec<Ride>>, ApiError> {
    let Ok(Path(id)) = id.inspect_err(|r| debug!(reason = %r.body_text(), "unreadable ride id")) else {
        return state.respond(Err(RideError::NotFound));
    };
    state.respond(state.rides.get(&id).await)
}

/// Build the application router: health probe plus the ride endpoints.
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/rides", get(list_rides).post(create_ride))
        .route("/rides/:id", get(get_ride))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // status and latency
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
