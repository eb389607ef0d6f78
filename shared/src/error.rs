//! Error types shared by the week math, the exclusion reconciler and the
//! HTTP client.

use serde_json::Value;
use thiserror::Error;

/// Errors produced when turning a `YYYY-Www` identifier into a week.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeekError {
    #[error("Invalid week identifier '{0}', expected YYYY-Www")]
    InvalidFormat(String),

    #[error("Week {week} does not exist in ISO year {year}")]
    WeekOutOfRange { year: i32, week: u32 },
}

/// Errors produced by calls to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),

    #[error("Failed to serialize request: {0}")]
    Serialize(String),
}

impl ApiError {
    /// Build the error for a non-2xx response.
    ///
    /// The backend reports failures as `{"detail": "..."}`. When the body has
    /// no usable `detail` (validation errors carry an array there) the HTTP
    /// status text is used instead.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        let message = detail_message(body).unwrap_or_else(|| {
            if status_text.trim().is_empty() {
                format!("HTTP {}", status)
            } else {
                status_text.to_string()
            }
        });
        ApiError::RequestFailed { status, message }
    }

    /// The collaborator's message for a rejected request.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed { message, .. } => Some(message),
            _ => None,
        }
    }

    /// Text to put in front of the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::RequestFailed { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

fn detail_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
        _ => None,
    }
}

/// Errors from the exclusion state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReconcileError {
    #[error("Choose an exclusion reason before choosing the number of weeks")]
    MissingReason,

    #[error("An exclusion must span at least one week")]
    InvalidSpan,

    #[error("An update for this member is already in flight")]
    CommitInFlight,
}
