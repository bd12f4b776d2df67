//! Command handlers
//!
//! One module per surface, mirroring the CLI layout. Handlers own terminal
//! output; everything below them only logs.

pub mod auth;
pub mod bookings;
pub mod calendar;
