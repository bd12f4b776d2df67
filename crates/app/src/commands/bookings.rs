//! Booking commands: list, create, delete

use std::io::{self, Write};

use chrono::{Local, NaiveDate, NaiveTime, Utc};
use reservo_core::BookingDraft;
use reservo_domain::constants::DURATION_CHOICES_MIN;
use reservo_domain::{Booking, ReservoError, Result};

use crate::AppContext;

/// List the current user's bookings in the order the service returns them.
pub async fn list(ctx: &AppContext) -> Result<()> {
    let bookings = ctx.bookings.list().await?;

    if bookings.is_empty() {
        println!("You have no bookings.");
        return Ok(());
    }

    for booking in &bookings {
        println!("{}", render(booking));
    }
    Ok(())
}

/// Build a draft from the arguments, warn on a past start, and submit.
pub async fn create(
    ctx: &AppContext,
    title: String,
    date: Option<NaiveDate>,
    start: Option<NaiveTime>,
    duration: u32,
) -> Result<()> {
    if !BookingDraft::is_allowed_duration(duration) {
        return Err(ReservoError::InvalidInput(format!(
            "duration must be one of {DURATION_CHOICES_MIN:?} minutes"
        )));
    }

    let mut draft = BookingDraft::starting_at(Local::now().naive_local());
    draft.title = title;
    draft.duration_min = duration;
    if let Some(date) = date {
        draft.date = date;
    }
    if let Some(start) = start {
        draft.start_time = start;
    }

    if draft.validate(&Local, Utc::now()).starts_in_past {
        println!("⚠ Start time is in the past");
    }

    let booking = ctx.bookings.create(&draft, &Local, Utc::now()).await?;
    println!("Booking created: {}", render(&booking));
    Ok(())
}

/// Cancel a booking after explicit confirmation.
pub async fn delete(ctx: &AppContext, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Cancel booking {id}? This can't be undone."))? {
        println!("Kept the booking.");
        return Ok(());
    }

    ctx.bookings.delete(id).await?;
    println!("Booking cancelled.");
    Ok(())
}

fn render(booking: &Booking) -> String {
    let start = booking.start_at.with_timezone(&Local);
    let end = booking.end_at.with_timezone(&Local);
    format!(
        "{}  {}  {} – {}",
        booking.id,
        booking.title,
        start.format("%Y-%m-%d %H:%M"),
        end.format("%H:%M")
    )
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/N] ");
    io::stdout()
        .flush()
        .map_err(|e| ReservoError::Platform(format!("terminal unavailable: {e}")))?;

    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .map_err(|e| ReservoError::Platform(format!("terminal unavailable: {e}")))?;

    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
