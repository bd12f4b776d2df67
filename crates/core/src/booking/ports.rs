//! Port interfaces for booking operations

use async_trait::async_trait;
use reservo_domain::{Booking, NewBooking, Result};

/// Trait for the remote booking endpoints
///
/// The remote service holds the authoritative copy; the client never caches
/// bookings between operations.
#[async_trait]
pub trait BookingsGateway: Send + Sync {
    /// Fetch the current user's bookings.
    async fn list(&self) -> Result<Vec<Booking>>;

    /// Create a booking and return the server's copy.
    async fn create(&self, booking: &NewBooking) -> Result<Booking>;

    /// Delete a booking by its server-assigned id.
    async fn delete(&self, id: &str) -> Result<()>;
}
