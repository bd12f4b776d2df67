//! Booking service - list/create/delete orchestration

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use reservo_domain::{Booking, ReservoError, Result};
use tracing::{info, warn};

use super::draft::BookingDraft;
use super::ports::BookingsGateway;

/// Booking service
pub struct BookingService {
    gateway: Arc<dyn BookingsGateway>,
}

impl BookingService {
    pub fn new(gateway: Arc<dyn BookingsGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch the current user's bookings.
    pub async fn list(&self) -> Result<Vec<Booking>> {
        self.gateway.list().await
    }

    /// Validate the draft and create the booking.
    ///
    /// Blocking validation failures are refused here with the same messages
    /// the form shows; a past start only logs a warning.
    pub async fn create<Tz>(
        &self,
        draft: &BookingDraft,
        tz: &Tz,
        now: DateTime<Utc>,
    ) -> Result<Booking>
    where
        Tz: TimeZone + Sync,
    {
        let validation = draft.validate(tz, now);
        if validation.missing_title {
            return Err(ReservoError::InvalidInput("please enter a title".to_string()));
        }
        if validation.inverted_range {
            return Err(ReservoError::InvalidInput("end time must be after start".to_string()));
        }
        if validation.starts_in_past {
            warn!("booking starts in the past");
        }

        let payload = draft.payload(tz, now).ok_or_else(|| {
            ReservoError::InvalidInput(
                "start time does not exist in the local time zone".to_string(),
            )
        })?;

        let booking = self.gateway.create(&payload).await?;
        info!(booking_id = %booking.id, "booking created");
        Ok(booking)
    }

    /// Delete a booking. Confirmation is the caller's responsibility; this
    /// call is the point of no return.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.gateway.delete(id).await?;
        info!(booking_id = %id, "booking deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use chrono::{NaiveDate, NaiveTime, TimeZone};
    use chrono_tz::Europe::Madrid;
    use reservo_domain::NewBooking;

    use super::*;

    #[derive(Default)]
    struct RecordingGateway {
        created: Mutex<Vec<NewBooking>>,
        deleted: Mutex<Vec<String>>,
        list_calls: AtomicUsize,
    }

    #[async_trait]
    impl BookingsGateway for RecordingGateway {
        async fn list(&self) -> Result<Vec<Booking>> {
            self.list_calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn create(&self, booking: &NewBooking) -> Result<Booking> {
            self.created.lock().expect("lock").push(booking.clone());
            Ok(Booking {
                id: "bk_1".to_string(),
                title: booking.title.clone(),
                start_at: booking.start_at,
                end_at: booking.end_at,
            })
        }

        async fn delete(&self, id: &str) -> Result<()> {
            self.deleted.lock().expect("lock").push(id.to_string());
            Ok(())
        }
    }

    fn draft(title: &str) -> BookingDraft {
        BookingDraft {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(2030, 6, 10).expect("valid date"),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).expect("valid time"),
            duration_min: 30,
        }
    }

    #[tokio::test]
    async fn create_refuses_blocking_validation_without_calling_the_gateway() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = BookingService::new(gateway.clone());

        let err = service
            .create(&draft("  "), &Madrid, Utc::now())
            .await
            .expect_err("must be refused");

        assert!(matches!(err, ReservoError::InvalidInput(_)));
        assert!(gateway.created.lock().expect("lock").is_empty());
    }

    #[tokio::test]
    async fn create_submits_trimmed_payload() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = BookingService::new(gateway.clone());

        let booking = service
            .create(&draft("  Standup  "), &Madrid, Utc::now())
            .await
            .expect("created");

        assert_eq!(booking.id, "bk_1");
        let created = gateway.created.lock().expect("lock");
        assert_eq!(created.len(), 1);
        assert_eq!(created[0].title, "Standup");
        // Madrid is UTC+2 in June.
        assert_eq!(
            created[0].start_at,
            Utc.with_ymd_and_hms(2030, 6, 10, 8, 0, 0).single().expect("valid timestamp")
        );
    }

    #[tokio::test]
    async fn delete_forwards_the_id() {
        let gateway = Arc::new(RecordingGateway::default());
        let service = BookingService::new(gateway.clone());

        service.delete("bk_9").await.expect("deleted");

        assert_eq!(gateway.deleted.lock().expect("lock").as_slice(), ["bk_9"]);
    }
}
