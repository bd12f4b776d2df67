//! External calendar connection
//!
//! Connect flow (authorization hand-off plus status polling with cooperative
//! cancellation), fresh status reads, and disconnect.

pub mod poll;
pub mod ports;
mod service;

pub use service::{ConnectOutcome, ConnectionService};
