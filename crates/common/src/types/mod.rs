/// Body served by the liveness endpoint.
pub const HEALTHY: &str = "Healthy";
