//! HTTP client wrapper for the Faultline API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`. Server-side
//! (SSR): stubs returning a transport error since these endpoints are
//! only meaningful in the browser.
//!
//! Every call goes through the same pipeline: send with the fixed base
//! path and JSON headers, parse the body, normalize the envelope, hand
//! the outcome to the toast queue, convert to a typed `Result`. The
//! notification queue is the only side channel, and it is injected, not
//! global.

#![allow(clippy::unused_async)]

use leptos::prelude::RwSignal;
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;
#[cfg(feature = "hydrate")]
use serde_json::Value;

#[cfg(feature = "hydrate")]
use super::envelope;
use super::envelope::ApiError;
use super::types::{AuthStatus, Issue, IssueEvent, IssueFilters, LoginCredentials, SettingMeta, UserProfile};
use crate::state::notifications::NotificationsState;

/// Prefix for every API request.
pub const BASE_PATH: &str = "/api";

/// Handle for making API calls.
///
/// Carries the notification queue so response outcomes can surface
/// toasts. Cheap to copy; constructed once at the application root and
/// provided via context.
#[derive(Clone, Copy)]
pub struct ApiClient {
    notifications: RwSignal<NotificationsState>,
}

impl ApiClient {
    pub fn new(notifications: RwSignal<NotificationsState>) -> Self {
        Self { notifications }
    }

    /// Fetch the instance settings snapshot (`GET /setting/meta`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`]; a failure here means the instance is treated as
    /// not installed.
    pub async fn setting_meta(&self) -> Result<SettingMeta, ApiError> {
        self.get("/setting/meta", &[]).await
    }

    /// Fetch the current session state (`GET /auth/status`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn auth_status(&self) -> Result<AuthStatus, ApiError> {
        self.get("/auth/status", &[]).await
    }

    /// Log in (`POST /auth/login`), resolving to the user's profile.
    ///
    /// # Errors
    ///
    /// [`ApiError::Declared`] on rejected credentials (the backend
    /// answers `success: false`), otherwise transport/decode failures.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<UserProfile, ApiError> {
        self.post("/auth/login", credentials).await
    }

    /// Fetch the recent-issues list (`GET /issues/recent`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn recent_issues(&self, filters: &IssueFilters) -> Result<Vec<Issue>, ApiError> {
        self.get("/issues/recent", &filters.to_query()).await
    }

    /// Fetch one issue (`GET /issues/{issueId}`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn issue_details(&self, issue_id: &str) -> Result<Issue, ApiError> {
        self.get(&format!("/issues/{issue_id}"), &[]).await
    }

    /// Fetch an issue's event history
    /// (`GET /issues/{issueId}/previous_events`).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`].
    pub async fn issue_previous_events(&self, issue_id: &str) -> Result<Vec<IssueEvent>, ApiError> {
        self.get(&format!("/issues/{issue_id}/previous_events"), &[]).await
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{BASE_PATH}{path}");
            let request = gloo_net::http::Request::get(&url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .query(query.iter().map(|(k, v)| (*k, v.as_str())));
            let body = self.read_body(request.send().await).await?;
            self.finish(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, query);
            Err(ApiError::unavailable())
        }
    }

    async fn post<T: serde::de::DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        payload: &B,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = format!("{BASE_PATH}{path}");
            let request = gloo_net::http::Request::post(&url)
                .header("Content-Type", "application/json")
                .header("Accept", "application/json")
                .json(payload);
            let request = match request {
                Ok(r) => r,
                Err(e) => {
                    let message = envelope::transport_message(None, Some(&e.to_string()));
                    self.notify_error(&message);
                    return Err(ApiError::Transport {
                        message,
                        status: None,
                        source: Some(Box::new(e)),
                    });
                }
            };
            let body = self.read_body(request.send().await).await?;
            self.finish(body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, payload);
            Err(ApiError::unavailable())
        }
    }

    /// Turn a raw transport result into a parsed JSON body, surfacing a
    /// toast for every failure. Non-2xx responses derive their message
    /// from the body's `message`, then the HTTP status line.
    #[cfg(feature = "hydrate")]
    async fn read_body(
        &self,
        sent: Result<gloo_net::http::Response, gloo_net::Error>,
    ) -> Result<Value, ApiError> {
        let response = match sent {
            Ok(r) => r,
            Err(e) => {
                let message = envelope::transport_message(None, Some(&e.to_string()));
                self.notify_error(&message);
                return Err(ApiError::Transport {
                    message,
                    status: None,
                    source: Some(Box::new(e)),
                });
            }
        };

        if !response.ok() {
            let status = response.status();
            let status_line = format!("HTTP {status} {}", response.status_text());
            let body = response.json::<Value>().await.ok();
            let message = envelope::transport_message(body.as_ref(), Some(&status_line));
            self.notify_error(&message);
            return Err(ApiError::Transport { message, status: Some(status), source: None });
        }

        let status = response.status();
        response.json::<Value>().await.map_err(|e| {
            let message = envelope::transport_message(None, Some(&e.to_string()));
            self.notify_error(&message);
            ApiError::Transport { message, status: Some(status), source: Some(Box::new(e)) }
        })
    }

    /// Normalize the body, dispatch at most one toast, decode the payload.
    #[cfg(feature = "hydrate")]
    fn finish<T: serde::de::DeserializeOwned>(&self, body: Value) -> Result<T, ApiError> {
        let outcome = envelope::normalize(body);
        self.notifications.update(|n| n.absorb(&outcome));
        envelope::into_result(outcome)
    }

    #[cfg(feature = "hydrate")]
    fn notify_error(&self, message: &str) {
        self.notifications.update(|n| n.push_error(message));
    }
}
