//! Domain types and models

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::SESSION_TTL_DAYS;

/// A booking as held by the remote service.
///
/// The `id` is an opaque server-assigned identifier; the client never mints
/// booking ids itself. Timestamps are absolute UTC instants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

/// Payload for creating a booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub title: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

/// Result of a calendar connection status read.
///
/// Always fetched fresh from the remote endpoint; stale the instant the
/// remote state changes elsewhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionStatus {
    pub connected: bool,
}

/// Same-site policy carried on the session record for fidelity with the
/// cookie the web deployment writes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    Lax,
    Strict,
    None,
}

/// Locally persisted session state.
///
/// Presence of an unexpired record means authenticated; there is no refresh
/// logic beyond the record's own TTL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionRecord {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub same_site: SameSite,
    pub secure: bool,
}

impl SessionRecord {
    /// Issue a new session record expiring `SESSION_TTL_DAYS` from `now`.
    pub fn issue(token: String, now: DateTime<Utc>) -> Self {
        Self::issue_with_ttl(token, now, SESSION_TTL_DAYS)
    }

    /// Issue a new session record with an explicit TTL in days.
    pub fn issue_with_ttl(token: String, now: DateTime<Utc>, ttl_days: i64) -> Self {
        Self {
            token,
            expires_at: now + Duration::days(ttl_days),
            same_site: SameSite::Lax,
            secure: false,
        }
    }

    /// Whether the record has passed its expiry at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn session_record_expires_after_ttl() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("valid timestamp");
        let record = SessionRecord::issue("tok".to_string(), now);

        assert_eq!(record.expires_at, now + Duration::days(7));
        assert!(!record.is_expired(now));
        assert!(!record.is_expired(now + Duration::days(7) - Duration::seconds(1)));
        assert!(record.is_expired(now + Duration::days(7)));
    }

    #[test]
    fn session_record_defaults_to_lax_non_secure() {
        let now = Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).single().expect("valid timestamp");
        let record = SessionRecord::issue("tok".to_string(), now);

        assert_eq!(record.same_site, SameSite::Lax);
        assert!(!record.secure);
    }

    #[test]
    fn booking_round_trips_camel_case_wire_format() {
        let json = r#"{
            "id": "bk_1",
            "title": "Client meeting",
            "startAt": "2024-03-01T10:00:00Z",
            "endAt": "2024-03-01T11:00:00Z"
        }"#;

        let booking: Booking = serde_json::from_str(json).expect("valid booking json");
        assert_eq!(booking.id, "bk_1");
        assert_eq!(booking.end_at - booking.start_at, Duration::minutes(60));

        let out = serde_json::to_value(&booking).expect("serializable");
        assert!(out.get("startAt").is_some());
        assert!(out.get("start_at").is_none());
    }
}
