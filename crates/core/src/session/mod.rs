//! Session management
//!
//! Route gating policy plus login/logout orchestration against the remote
//! auth endpoint and the local session store.

pub mod guard;
pub mod ports;
mod service;

pub use service::SessionService;
