//! Error types for the tweet CLI.
//!
//! Every failure ends the current command. [`CliError::report`] renders the
//! text written to stderr, including remediation hints for common API failures.

use chrono::{SecondsFormat, TimeZone, Utc};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Hint printed after an HTTP 403, which almost always means the app lacks write access.
pub const WRITE_PERMISSION_HINT: &str = "Hint: 403 usually means your app permissions are \"Read\" only.\n\
Go to the X Developer Portal, set permissions to \"Read and write\",\n\
then regenerate your Access Token and Secret.";

#[derive(Error, Debug)]
pub enum CliError {
    /// Required credentials are still missing after all config layers were read.
    #[error("{0}")]
    Config(String),

    /// Empty post text or an unrecognised tweet ID/URL.
    #[error("{0}")]
    Validation(String),

    /// The API answered with a non-success status.
    #[error("{0}")]
    Api(ApiError),

    /// The delete call succeeded but the API reports the tweet still exists.
    #[error("Failed to delete tweet {id}.")]
    DeleteNotConfirmed { id: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API response for '{0}' did not contain any data")]
    MissingData(&'static str),
}

/// A non-success response from the Twitter API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Short problem title (`title` or `reason` in the body, else the HTTP reason phrase).
    pub title: String,
    /// Longer explanation, if the API sent one.
    pub detail: Option<String>,
    /// Flattened messages from the `errors` array.
    pub messages: Vec<String>,
    /// Unix timestamp from the `x-rate-limit-reset` header.
    pub rate_limit_reset: Option<i64>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error (HTTP {}): {}", self.status, self.title)
    }
}

impl ApiError {
    pub fn is_forbidden(&self) -> bool {
        self.status == 403
    }

    /// The rate limit reset time as an ISO-8601 UTC timestamp, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn rate_limit_reset_iso(&self) -> Option<String> {
        self.rate_limit_reset
            .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
            .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    fn report(&self) -> String {
        let mut lines = vec![self.to_string()];
        if let Some(detail) = self.detail.as_deref().filter(|d| !d.is_empty()) {
            lines.push(format!("  Detail: {}", detail));
        }
        if !self.messages.is_empty() {
            lines.push(format!("  {}", self.messages.join("; ")));
        }
        if self.is_forbidden() {
            lines.push(String::new());
            lines.push(WRITE_PERMISSION_HINT.to_string());
        }
        if let Some(reset) = self.rate_limit_reset_iso() {
            lines.push(format!("Rate limited. Resets at: {}", reset));
        }
        lines.join("\n")
    }
}

impl CliError {
    /// Process exit status for this error. Every handled failure exits with 1.
    pub fn exit_code(&self) -> i32 {
        1
    }

    /// Text written to stderr for this error.
    pub fn report(&self) -> String {
        match self {
            CliError::Api(api) => api.report(),
            CliError::DeleteNotConfirmed { .. } => self.to_string(),
            other => format!("Error: {}", other),
        }
    }
}
