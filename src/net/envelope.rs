//! Response-envelope normalization.
//!
//! The backend wraps most responses in `{success, message, data}`.
//! `normalize` is a pure function from a parsed body to a tagged outcome;
//! it never touches the network or the notification queue. The HTTP
//! wrapper in [`super::api`] feeds the outcome to the toast dispatcher and
//! converts it into a typed `Result` via [`into_result`].
//!
//! ENVELOPE RULES
//! ==============
//! * `success` strictly `true`: the inner `data` is the payload; a
//!   non-empty `message` is an informational side note.
//! * `success` anything else: declared failure, message falls back to
//!   "Request failed".
//! * no `success` key (or a non-object body): pass the body through
//!   untouched. Some endpoints never adopted the envelope.

#[cfg(test)]
#[path = "envelope_test.rs"]
mod envelope_test;

use serde_json::Value;

/// Fallback message for a declared failure without one of its own.
pub const REQUEST_FAILED: &str = "Request failed";

/// Fallback message for a transport failure with no usable detail.
pub const NETWORK_ERROR: &str = "Network error";

/// Outcome of normalizing one response body.
#[derive(Clone, Debug, PartialEq)]
pub enum Normalized {
    /// Envelope with `success: true`. `data` is the inner payload,
    /// `message` the optional notification text.
    Success { data: Value, message: Option<String> },
    /// Envelope with any non-`true` success value, carrying a display message.
    Failure { message: String },
    /// Body without the envelope convention, unchanged.
    Passthrough(Value),
}

/// Normalize a parsed response body against the envelope convention.
pub fn normalize(body: Value) -> Normalized {
    let Some(map) = body.as_object() else {
        return Normalized::Passthrough(body);
    };
    if !map.contains_key("success") {
        return Normalized::Passthrough(body);
    }

    // Only a literal `true` counts as success.
    if map.get("success") == Some(&Value::Bool(true)) {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.is_empty())
            .map(ToOwned::to_owned);
        let data = map.get("data").cloned().unwrap_or(Value::Null);
        return Normalized::Success { data, message };
    }

    let message = map
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .unwrap_or(REQUEST_FAILED)
        .to_owned();
    Normalized::Failure { message }
}

/// Resolve the display message for a transport-layer failure.
///
/// Priority: the response body's own `message`, then the transport
/// error's text, then [`NETWORK_ERROR`].
pub fn transport_message(body: Option<&Value>, transport: Option<&str>) -> String {
    body.and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(ToOwned::to_owned)
        .or_else(|| {
            transport
                .filter(|m| !m.is_empty())
                .map(ToOwned::to_owned)
        })
        .unwrap_or_else(|| NETWORK_ERROR.to_owned())
}

/// Convert a normalized outcome into a typed result.
///
/// # Errors
///
/// [`ApiError::Declared`] for a declared failure, [`ApiError::Decode`]
/// when the payload does not match `T`.
pub fn into_result<T: serde::de::DeserializeOwned>(outcome: Normalized) -> Result<T, ApiError> {
    match outcome {
        Normalized::Success { data, .. } => serde_json::from_value(data).map_err(ApiError::Decode),
        Normalized::Failure { message } => Err(ApiError::Declared { message }),
        Normalized::Passthrough(body) => serde_json::from_value(body).map_err(ApiError::Decode),
    }
}

/// Error type for API calls.
///
/// Transport failures keep the underlying error as `source` so callers
/// still see the status code and cause, not just the display message.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with `success: false`.
    #[error("{message}")]
    Declared { message: String },
    /// Network or HTTP-layer failure.
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
    /// The payload did not match the expected shape.
    #[error("response decode failed: {0}")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// The user-facing message for this failure.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status code, when the failure got far enough to have one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn unavailable() -> Self {
        Self::Transport {
            message: "not available on server".to_owned(),
            status: None,
            source: None,
        }
    }
}
