//! Core Twitter API utilities.
//!
//! This module contains the HTTP client that signs every request with OAuth 1.0a
//! and turns non-success responses into [`ApiError`] values.

use log::{debug, info};
use reqwest::header::{HeaderMap, AUTHORIZATION};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::config::Credentials;
use crate::error::{ApiError, CliError, Result};
use crate::oauth::build_oauth1_header;

use super::types::{ApiResponse, ErrorBody};

/// Base URL of the Twitter API v2.
pub const API_BASE_URL: &str = "https://api.x.com/2";

const RATE_LIMIT_RESET_HEADER: &str = "x-rate-limit-reset";

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// Newlines and tabs become spaces, other control characters become `?`, and
/// anything past `max_len` characters is cut off.
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!("{}... [truncated, {} total bytes]", truncated, text.len())
    } else {
        sanitized
    }
}

/// Authenticated HTTP client for the Twitter API v2, bound to one set of credentials.
#[derive(Debug, Clone)]
pub struct XClient {
    http: Client,
    base_url: String,
    credentials: Credentials,
}

impl XClient {
    /// Creates a client against the public API.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, API_BASE_URL)
    }

    /// Creates a client against a different API root, e.g. a local stand-in server.
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("tweet-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(XClient {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            credentials,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Starts a request to `path` (relative to the base URL) with a signed Authorization header.
    ///
    /// Query parameters are part of the OAuth signature, so they must be passed here
    /// rather than added to the builder afterwards.
    pub(crate) fn signed_request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
    ) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        debug!("Signing {} request for {}", method, url);
        let auth_header = build_oauth1_header(method.as_str(), &url, query, &self.credentials);

        let mut builder = self.http.request(method, &url).header(AUTHORIZATION, auth_header);
        if !query.is_empty() {
            builder = builder.query(query);
        }
        builder
    }

    /// Sends a request once and decodes the `data` member of a successful response.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: The decoded `data` member
    /// - `Ok(None)`: The response succeeded but carried no `data`
    /// - `Err(CliError::Api)`: The API answered with a non-success status
    /// - `Err(CliError::Http)` / `Err(CliError::Decode)`: Transport or JSON failure
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        request_builder: RequestBuilder,
        operation_name: &str,
    ) -> Result<Option<T>> {
        info!("Sending request for operation: {}", operation_name);
        let response = request_builder.send().await?;

        let status = response.status();
        let headers = response.headers().clone();
        info!(
            "Received response with status: {} for operation: {}",
            status, operation_name
        );
        let body = response.text().await?;

        if status.is_success() {
            debug!(
                "Response summary for '{}': {} bytes received",
                operation_name,
                body.len()
            );
            let parsed: ApiResponse<T> = serde_json::from_str(&body)?;
            return Ok(parsed.data);
        }

        info!("Operation '{}' failed - Status: {}", operation_name, status);
        debug!(
            "Error response for '{}': {}",
            operation_name,
            sanitize_for_logging(&body, 200)
        );
        Err(CliError::Api(parse_api_error(status, &headers, &body)))
    }
}

/// Builds an [`ApiError`] from a failed response.
pub(crate) fn parse_api_error(status: StatusCode, headers: &HeaderMap, body: &str) -> ApiError {
    let (parsed, raw_detail) = match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => (parsed, None),
        Err(_) => {
            let trimmed = body.trim();
            let detail = (!trimmed.is_empty()).then(|| sanitize_for_logging(trimmed, 200));
            (ErrorBody::default(), detail)
        }
    };

    let title = parsed
        .title
        .or(parsed.reason)
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("Request failed")
                .to_string()
        });

    let messages = parsed
        .errors
        .into_iter()
        .filter_map(|e| e.message.or(e.detail))
        .filter(|m| !m.is_empty())
        .collect();

    let rate_limit_reset = headers
        .get(RATE_LIMIT_RESET_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<i64>().ok());

    ApiError {
        status: status.as_u16(),
        title,
        detail: parsed.detail.filter(|d| !d.is_empty()).or(raw_detail),
        messages,
        rate_limit_reset,
    }
}
