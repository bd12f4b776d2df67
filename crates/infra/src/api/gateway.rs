//! Remote booking service gateway

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use reservo_core::{AuthGateway, BookingsGateway, CalendarGateway, SessionStore};
use reservo_domain::config::ApiConfig;
use reservo_domain::{Booking, ConnectionStatus, NewBooking, ReservoError, Result};
use tracing::debug;
use url::Url;

use super::types::{ConnectBody, ErrorBody, GoogleLoginRequest, StatusBody, TokenGrant};
use crate::http::HttpClient;

/// HTTP gateway to the remote booking service.
///
/// Implements the auth, calendar, and bookings ports against one API surface.
/// The bearer token is read from the session store per request, so a login or
/// logout in the same process is picked up immediately.
pub struct BookingApi {
    http: HttpClient,
    base_url: Url,
    store: Arc<dyn SessionStore>,
}

impl BookingApi {
    pub fn new(config: &ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ReservoError::Config(format!("invalid API base URL: {e}")))?;
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { http, base_url, store })
    }

    /// Build an endpoint URL from path segments; segments are percent-encoded
    /// as needed, so opaque ids can be passed straight through.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ReservoError::Config("API base URL cannot be a base".to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Attach the bearer token when an unexpired session exists.
    async fn authorized(&self, builder: RequestBuilder) -> Result<RequestBuilder> {
        match self.store.get().await? {
            Some(record) if !record.is_expired(Utc::now()) => {
                Ok(builder.bearer_auth(record.token))
            }
            _ => Ok(builder),
        }
    }

    /// Turn non-2xx responses into domain errors, surfacing the server's
    /// message when one is present.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let fallback = format!("request failed with status {status}");
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.join(),
            Err(_) => fallback,
        };
        debug!(%status, message, "remote API returned an error");

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ReservoError::Auth(message)),
            StatusCode::NOT_FOUND => Err(ReservoError::NotFound(message)),
            _ => Err(ReservoError::Api(message)),
        }
    }

    async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ReservoError::Internal(format!("failed to decode response body: {e}")))
    }
}

#[async_trait]
impl AuthGateway for BookingApi {
    async fn login_google(&self, id_token: &str) -> Result<String> {
        let url = self.endpoint(&["auth", "google"])?;
        let request =
            self.http.request(Method::POST, url).json(&GoogleLoginRequest { id_token });
        let response = Self::check(self.http.send_once(request).await?).await?;
        let grant: TokenGrant = Self::decode(response).await?;
        Ok(grant.token)
    }
}

#[async_trait]
impl CalendarGateway for BookingApi {
    async fn status(&self) -> Result<ConnectionStatus> {
        let url = self.endpoint(&["calendar", "status"])?;
        let request = self.authorized(self.http.request(Method::GET, url)).await?;
        // A status poll is a single read; retries would inflate the attempt.
        let response = Self::check(self.http.send_once(request).await?).await?;
        let body: StatusBody = Self::decode(response).await?;
        Ok(ConnectionStatus { connected: body.connected })
    }

    async fn connect_url(&self) -> Result<String> {
        let url = self.endpoint(&["calendar", "connect"])?;
        let request = self.authorized(self.http.request(Method::GET, url)).await?;
        let response = Self::check(self.http.send(request).await?).await?;
        let body: ConnectBody = Self::decode(response).await?;
        Ok(body.url)
    }

    async fn disconnect(&self) -> Result<()> {
        let url = self.endpoint(&["calendar", "disconnect"])?;
        let request = self.authorized(self.http.request(Method::POST, url)).await?;
        Self::check(self.http.send_once(request).await?).await?;
        Ok(())
    }
}

#[async_trait]
impl BookingsGateway for BookingApi {
    async fn list(&self) -> Result<Vec<Booking>> {
        let url = self.endpoint(&["bookings", "me"])?;
        let request = self.authorized(self.http.request(Method::GET, url)).await?;
        let response = Self::check(self.http.send(request).await?).await?;
        Self::decode(response).await
    }

    async fn create(&self, booking: &NewBooking) -> Result<Booking> {
        let url = self.endpoint(&["bookings"])?;
        let request =
            self.authorized(self.http.request(Method::POST, url)).await?.json(booking);
        // Creates are not idempotent; one attempt only.
        let response = Self::check(self.http.send_once(request).await?).await?;
        Self::decode(response).await
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let url = self.endpoint(&["bookings", id])?;
        let request = self.authorized(self.http.request(Method::DELETE, url)).await?;
        Self::check(self.http.send(request).await?).await?;
        Ok(())
    }
}
