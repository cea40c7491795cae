//! Admin API client
//!
//! Core component responsible for communicating with the admin API.
//! Holds the session credential and attaches it to every gated request.
//! Each operation is a single best-effort attempt: one HTTP exchange
//! mapped to a typed result, no retry, no failover.

use std::sync::Arc;

use reqwest::Client;
use reqwest::header::{AUTHORIZATION, HeaderValue};

use crate::admin::errors::{AuthError, LookupError, WriteError, error_detail};
use crate::admin::session::SessionStore;
use crate::admin::types::{AuditLogEntry, Restaurant};
use crate::http_client::build_client;
use crate::model::config::Config;

/// Fallback audit window when the caller leaves it unset or zero (24 hours)
pub const DEFAULT_LOG_WINDOW_MINUTES: u32 = 1440;

/// Effective audit window in minutes
///
/// Unset and zero both fall back to the last 24 hours, matching the
/// server's own default.
pub fn effective_window(minutes: Option<u32>) -> u32 {
    match minutes {
        Some(m) if m > 0 => m,
        _ => DEFAULT_LOG_WINDOW_MINUTES,
    }
}

/// Admin API client
///
/// Gated operations read the credential from the shared [`SessionStore`]
/// and fail fast before any network traffic when it is absent.
pub struct AdminClient {
    client: Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl AdminClient {
    /// Build a client against `config.api_base_url` sharing `session`
    pub fn new(config: &Config, session: Arc<SessionStore>) -> anyhow::Result<Self> {
        let proxy = config.proxy();
        let client = build_client(proxy.as_ref(), config.timeout_secs)?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn restaurant_endpoint(&self, id: &str) -> String {
        self.endpoint(&format!("/admin/restaurants/{}", urlencoding::encode(id)))
    }

    /// Credential header for a gated request, or `None` before login
    fn auth_header(&self) -> Option<HeaderValue> {
        let credential = self.session.credential()?;
        HeaderValue::from_str(&credential).ok()
    }

    /// Validate `password` against the admin API and store it on success
    ///
    /// 2xx stores the credential for every later gated call; any other
    /// status is a rejected credential. Single attempt.
    pub async fn login(&self, password: &str) -> Result<(), AuthError> {
        // A password that cannot travel in a header cannot be valid
        let header =
            HeaderValue::from_str(password).map_err(|_| AuthError::InvalidCredential)?;

        let response = self
            .client
            .get(self.endpoint("/admin/validate"))
            .header(AUTHORIZATION, header)
            .send()
            .await
            .map_err(|e| AuthError::NetworkFailure(e.to_string()))?;

        if response.status().is_success() {
            self.session.set_credential(password);
            tracing::info!("Admin credential validated");
            Ok(())
        } else {
            tracing::warn!(status = %response.status(), "Admin credential rejected");
            Err(AuthError::InvalidCredential)
        }
    }

    /// Submit a new restaurant listing
    pub async fn create_restaurant(&self, record: &Restaurant) -> Result<(), WriteError> {
        let auth = self.auth_header().ok_or(WriteError::Unauthenticated)?;

        let response = self
            .client
            .post(self.endpoint("/admin/restaurants"))
            .header(AUTHORIZATION, auth)
            .json(record)
            .send()
            .await
            .map_err(|e| WriteError::NetworkFailure(e.to_string()))?;

        Self::write_outcome(response).await
    }

    /// Replace the listing stored under `id`
    pub async fn update_restaurant(
        &self,
        id: &str,
        record: &Restaurant,
    ) -> Result<(), WriteError> {
        if id.trim().is_empty() {
            return Err(WriteError::MissingId);
        }
        let auth = self.auth_header().ok_or(WriteError::Unauthenticated)?;

        let response = self
            .client
            .put(self.restaurant_endpoint(id))
            .header(AUTHORIZATION, auth)
            .json(record)
            .send()
            .await
            .map_err(|e| WriteError::NetworkFailure(e.to_string()))?;

        Self::write_outcome(response).await
    }

    /// Delete the listing stored under `id`
    pub async fn remove_restaurant(&self, id: &str) -> Result<(), WriteError> {
        if id.trim().is_empty() {
            return Err(WriteError::MissingId);
        }
        let auth = self.auth_header().ok_or(WriteError::Unauthenticated)?;

        let response = self
            .client
            .delete(self.restaurant_endpoint(id))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| WriteError::NetworkFailure(e.to_string()))?;

        Self::write_outcome(response).await
    }

    /// Fetch the listing stored under `id`
    ///
    /// Missing fields in the response default per [`Restaurant`]; a
    /// missing field is never an error.
    pub async fn fetch_restaurant(&self, id: &str) -> Result<Restaurant, LookupError> {
        if id.trim().is_empty() {
            return Err(LookupError::MissingId);
        }
        let auth = self.auth_header().ok_or(LookupError::Unauthenticated)?;

        let response = self
            .client
            .get(self.restaurant_endpoint(id))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, id, "Restaurant lookup failed");
            return Err(LookupError::NotFound { id: id.to_string() });
        }

        response
            .json::<Restaurant>()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))
    }

    /// Fetch audit log entries for the trailing window, in server order
    pub async fn fetch_audit_logs(
        &self,
        minutes: Option<u32>,
    ) -> Result<Vec<AuditLogEntry>, LookupError> {
        let auth = self.auth_header().ok_or(LookupError::Unauthenticated)?;
        let window = effective_window(minutes);

        let response = self
            .client
            .get(self.endpoint(&format!("/admin/logs?minutes={}", window)))
            .header(AUTHORIZATION, auth)
            .send()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Audit log fetch failed");
            return Err(LookupError::RequestFailed(error_detail(status, &body)));
        }

        response
            .json::<Vec<AuditLogEntry>>()
            .await
            .map_err(|e| LookupError::RequestFailed(e.to_string()))
    }

    /// Map a write response to its terminal outcome
    async fn write_outcome(response: reqwest::Response) -> Result<(), WriteError> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = %status, "Write rejected");
        Err(WriteError::Rejected(error_detail(status, &body)))
    }
}
