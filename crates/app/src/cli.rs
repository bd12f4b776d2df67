//! [`Cli`] definitions.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

/// Client for the Reservo booking service.
#[derive(Debug, Parser)]
#[command(name = "reservo", version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file (skips the usual probing).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Exchange a Google-issued identity token for a session
    Login {
        /// Identity token from Google sign-in
        #[arg(long)]
        id_token: String,

        /// Destination recorded by the route guard (`from` parameter,
        /// possibly percent-encoded)
        #[arg(long)]
        from: Option<String>,
    },

    /// Clear the local session
    Logout,

    /// Evaluate the route guard for a path
    Guard {
        /// Request path, e.g. `/calendar`
        path: String,

        /// Raw query string without the leading `?`
        #[arg(long, default_value = "")]
        query: String,
    },

    /// Manage bookings
    #[command(subcommand)]
    Bookings(BookingsCommand),

    /// Manage the Google Calendar link
    #[command(subcommand)]
    Calendar(CalendarCommand),
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List your bookings
    List,

    /// Create a booking
    Create {
        #[arg(long)]
        title: String,

        /// Local date (YYYY-MM-DD); defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Local start time (HH:MM); defaults to the next quarter hour
        #[arg(long)]
        start: Option<NaiveTime>,

        /// Duration in minutes: 15, 30, 45, 60, 90 or 120
        #[arg(long, default_value_t = 60)]
        duration: u32,
    },

    /// Cancel a booking
    Delete {
        /// Server-assigned booking id
        id: String,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum CalendarCommand {
    /// Fresh read of the connection status
    Status,

    /// Link your Google Calendar (opens the browser, then polls)
    Connect,

    /// Sever the calendar link
    Disconnect,
}

impl Command {
    /// Logical command identifier for structured logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Login { .. } => "auth::login",
            Self::Logout => "auth::logout",
            Self::Guard { .. } => "auth::guard",
            Self::Bookings(BookingsCommand::List) => "bookings::list",
            Self::Bookings(BookingsCommand::Create { .. }) => "bookings::create",
            Self::Bookings(BookingsCommand::Delete { .. }) => "bookings::delete",
            Self::Calendar(CalendarCommand::Status) => "calendar::status",
            Self::Calendar(CalendarCommand::Connect) => "calendar::connect",
            Self::Calendar(CalendarCommand::Disconnect) => "calendar::disconnect",
        }
    }
}
