//! Reservo - booking service client
//!
//! Main entry point for the command-line application.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use reservo_app::{commands, AppContext, BookingsCommand, CalendarCommand, Cli, Command};
use reservo_app::logging::log_command_execution;
use reservo_domain::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging FIRST so .env loading is visible. Logs go to stderr;
    // stdout belongs to command output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("reservo=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables from .env file
    match dotenvy::dotenv() {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env file loaded"),
    }

    let cli = Cli::parse();
    let label = cli.command.label();
    let start = Instant::now();

    match run(cli).await {
        Ok(()) => {
            log_command_execution(label, start.elapsed(), true);
            ExitCode::SUCCESS
        }
        Err(err) => {
            log_command_execution(label, start.elapsed(), false);
            tracing::error!(kind = err.label(), error = %err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match cli.config {
        Some(path) => reservo_infra::config::load_from_file(Some(path))?,
        None => reservo_infra::config::load()?,
    };
    let ctx = AppContext::new(config)?;

    match cli.command {
        Command::Login { id_token, from } => {
            commands::auth::login(&ctx, &id_token, from.as_deref()).await
        }
        Command::Logout => commands::auth::logout(&ctx).await,
        Command::Guard { path, query } => commands::auth::guard(&ctx, &path, &query).await,
        Command::Bookings(BookingsCommand::List) => commands::bookings::list(&ctx).await,
        Command::Bookings(BookingsCommand::Create { title, date, start, duration }) => {
            commands::bookings::create(&ctx, title, date, start, duration).await
        }
        Command::Bookings(BookingsCommand::Delete { id, yes }) => {
            commands::bookings::delete(&ctx, &id, yes).await
        }
        Command::Calendar(CalendarCommand::Status) => commands::calendar::status(&ctx).await,
        Command::Calendar(CalendarCommand::Connect) => commands::calendar::connect(&ctx).await,
        Command::Calendar(CalendarCommand::Disconnect) => {
            commands::calendar::disconnect(&ctx).await
        }
    }
}
