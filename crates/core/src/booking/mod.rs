//! Bookings
//!
//! Time-range draft validation plus list/create/delete orchestration against
//! the remote booking endpoints.

pub mod draft;
pub mod ports;
mod service;

pub use service::BookingService;
