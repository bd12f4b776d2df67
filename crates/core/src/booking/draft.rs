//! Booking time-range draft
//!
//! Form state for a new booking: title, local date, local start time, and a
//! duration picked from a fixed set. The end time is derived, never entered.
//! Validation is recomputed on every edit; instants only materialize at
//! submission time.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike, Utc};
use reservo_domain::constants::{DEFAULT_DURATION_MIN, DURATION_CHOICES_MIN, START_TIME_STEP_MIN};
use reservo_domain::NewBooking;
use serde::Serialize;

/// Live validation state for a draft.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DraftValidation {
    /// Title is empty after trimming. Blocks submission.
    pub missing_title: bool,
    /// Derived end does not land strictly after the start on the same local
    /// day. Blocks submission.
    pub inverted_range: bool,
    /// Start is earlier than "now". Warning only, never blocks.
    pub starts_in_past: bool,
}

impl DraftValidation {
    /// Whether submission must be refused.
    pub fn blocks_submission(&self) -> bool {
        self.missing_title || self.inverted_range
    }
}

/// A booking in the making.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub title: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub duration_min: u32,
}

impl BookingDraft {
    /// Fresh-form defaults: today's date, the next quarter-hour start, a
    /// 60 minute duration, empty title.
    pub fn starting_at(now_local: NaiveDateTime) -> Self {
        Self {
            title: String::new(),
            date: now_local.date(),
            start_time: round_to_next_quarter(now_local.time()),
            duration_min: DEFAULT_DURATION_MIN,
        }
    }

    /// Whether `minutes` is one of the selectable durations.
    pub fn is_allowed_duration(minutes: u32) -> bool {
        DURATION_CHOICES_MIN.contains(&minutes)
    }

    /// Derived end time on the same local day. Crossing midnight wraps, which
    /// the range validation then rejects.
    pub fn end_time(&self) -> NaiveTime {
        self.start_time
            .overflowing_add_signed(Duration::minutes(i64::from(self.duration_min)))
            .0
    }

    /// Shortcut: move the draft to today's date.
    pub fn set_today(&mut self, now_local: NaiveDateTime) {
        self.date = now_local.date();
    }

    /// Shortcut: move the draft to tomorrow's date.
    pub fn set_tomorrow(&mut self, now_local: NaiveDateTime) {
        self.date = now_local.date() + Duration::days(1);
    }

    /// Recompute validation against the wall clock `now`.
    pub fn validate<Tz: TimeZone>(&self, tz: &Tz, now: DateTime<Utc>) -> DraftValidation {
        let starts_in_past = match tz.from_local_datetime(&self.local_start()).earliest() {
            Some(start) => start.with_timezone(&Utc) < now,
            // Nonexistent local time (DST gap): submission will fail anyway,
            // don't also warn about the past.
            None => false,
        };

        DraftValidation {
            missing_title: self.title.trim().is_empty(),
            inverted_range: self.local_end() <= self.local_start(),
            starts_in_past,
        }
    }

    /// Resolve the local range to absolute instants.
    ///
    /// `None` when the local start or end does not exist in `tz` (DST gap).
    /// Ambiguous local times (DST overlap) resolve to the earlier instant.
    pub fn resolve_range<Tz: TimeZone>(&self, tz: &Tz) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let start = tz.from_local_datetime(&self.local_start()).earliest()?.with_timezone(&Utc);
        let end = tz.from_local_datetime(&self.local_end()).earliest()?.with_timezone(&Utc);
        Some((start, end))
    }

    /// Submission payload, or `None` while a blocking validation fails.
    ///
    /// The emitted title is trimmed; a past start produces a payload all the
    /// same (it only warns).
    pub fn payload<Tz: TimeZone>(&self, tz: &Tz, now: DateTime<Utc>) -> Option<NewBooking> {
        if self.validate(tz, now).blocks_submission() {
            return None;
        }
        let (start_at, end_at) = self.resolve_range(tz)?;
        Some(NewBooking { title: self.title.trim().to_string(), start_at, end_at })
    }

    fn local_start(&self) -> NaiveDateTime {
        self.date.and_time(self.start_time)
    }

    fn local_end(&self) -> NaiveDateTime {
        self.date.and_time(self.end_time())
    }
}

/// Round up to the next quarter-hour boundary, zeroing seconds. A time
/// already on a boundary is returned unchanged.
pub fn round_to_next_quarter(time: NaiveTime) -> NaiveTime {
    let flat = time.with_second(0).and_then(|t| t.with_nanosecond(0)).unwrap_or(time);
    let remainder = flat.minute() % START_TIME_STEP_MIN;
    if remainder == 0 {
        flat
    } else {
        flat.overflowing_add_signed(Duration::minutes(i64::from(START_TIME_STEP_MIN - remainder)))
            .0
    }
}
