//! CLI surface tests: the commands parse the way the help text promises.

use clap::Parser;
use reservo_app::{BookingsCommand, CalendarCommand, Cli, Command};

#[test]
fn login_takes_id_token_and_optional_from() {
    let cli = Cli::parse_from([
        "reservo",
        "login",
        "--id-token",
        "google-token",
        "--from",
        "%2Fcalendar",
    ]);

    match cli.command {
        Command::Login { id_token, from } => {
            assert_eq!(id_token, "google-token");
            assert_eq!(from.as_deref(), Some("%2Fcalendar"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn guard_defaults_to_empty_query() {
    let cli = Cli::parse_from(["reservo", "guard", "/calendar"]);

    match cli.command {
        Command::Guard { path, query } => {
            assert_eq!(path, "/calendar");
            assert_eq!(query, "");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn create_parses_date_time_and_duration() {
    let cli = Cli::parse_from([
        "reservo", "bookings", "create", "--title", "Client meeting", "--date", "2024-06-10",
        "--start", "10:00", "--duration", "30",
    ]);

    match cli.command {
        Command::Bookings(BookingsCommand::Create { title, date, start, duration }) => {
            assert_eq!(title, "Client meeting");
            assert_eq!(date.expect("date parsed").to_string(), "2024-06-10");
            assert_eq!(start.expect("time parsed").to_string(), "10:00:00");
            assert_eq!(duration, 30);
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn create_duration_defaults_to_an_hour() {
    let cli = Cli::parse_from(["reservo", "bookings", "create", "--title", "X"]);

    match cli.command {
        Command::Bookings(BookingsCommand::Create { duration, date, start, .. }) => {
            assert_eq!(duration, 60);
            assert!(date.is_none());
            assert!(start.is_none());
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn delete_requires_explicit_yes_to_skip_confirmation() {
    let cli = Cli::parse_from(["reservo", "bookings", "delete", "bk_1"]);
    match cli.command {
        Command::Bookings(BookingsCommand::Delete { id, yes }) => {
            assert_eq!(id, "bk_1");
            assert!(!yes);
        }
        other => panic!("unexpected command: {other:?}"),
    }

    let cli = Cli::parse_from(["reservo", "bookings", "delete", "bk_1", "--yes"]);
    match cli.command {
        Command::Bookings(BookingsCommand::Delete { yes, .. }) => assert!(yes),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn calendar_subcommands_parse() {
    let cli = Cli::parse_from(["reservo", "calendar", "status"]);
    assert!(matches!(cli.command, Command::Calendar(CalendarCommand::Status)));

    let cli = Cli::parse_from(["reservo", "calendar", "connect"]);
    assert!(matches!(cli.command, Command::Calendar(CalendarCommand::Connect)));

    let cli = Cli::parse_from(["reservo", "calendar", "disconnect"]);
    assert!(matches!(cli.command, Command::Calendar(CalendarCommand::Disconnect)));
}

#[test]
fn command_labels_are_stable() {
    let cli = Cli::parse_from(["reservo", "bookings", "list"]);
    assert_eq!(cli.command.label(), "bookings::list");

    let cli = Cli::parse_from(["reservo", "logout"]);
    assert_eq!(cli.command.label(), "auth::logout");
}
