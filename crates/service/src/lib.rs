//! Service layer for ride bookings.
//! - `errors`: the three error kinds callers can observe and their envelope.
//! - `gateway`: awaitable `query`/`execute` over the storage driver.
//! - `rides`: payload validation and the create/list/get orchestration.

pub mod errors;
pub mod gateway;
pub mod pagination;
pub mod rides;
#[cfg(test)]
pub mod test_support;

pub use errors::{ErrorEnvelope, ErrorKind, RideError};
pub use gateway::{ExecContext, GatewayError, PersistenceGateway};
pub use rides::RideService;
