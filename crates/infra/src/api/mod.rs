//! HTTP gateway to the remote booking service
//!
//! One client implements all three core gateway ports; the remote service is
//! a single API surface and shares auth, error shape, and base URL.

mod gateway;
mod types;

pub use gateway::BookingApi;
