//! # Reservo App
//!
//! Application layer - CLI commands and main entry point.
//!
//! This crate contains:
//! - The command-line interface definition
//! - Application context (dependency injection)
//! - Command handlers bridging the CLI to the core services
//!
//! ## Architecture
//! - Depends on `reservo-domain`, `reservo-core`, and `reservo-infra`
//! - Wires up the hexagonal architecture
//! - Owns all terminal output; services below only log

pub mod cli;
pub mod commands;
pub mod context;
pub mod logging;

// Re-export for convenience
pub use cli::{BookingsCommand, CalendarCommand, Cli, Command};
pub use context::AppContext;
