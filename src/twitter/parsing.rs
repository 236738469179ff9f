//! Tweet identifier parsing and URL construction.

use regex::Regex;
use std::sync::OnceLock;

use crate::error::{CliError, Result};

/// Matches `https://x.com/<user>/status/<id>` and the twitter.com equivalent,
/// with optional scheme and `www.`/`mobile.` subdomain. Trailing path or query is ignored.
const TWEET_URL_PATTERN: &str =
    r"(?i)^(?:https?://)?(?:(?:www|mobile)\.)?(?:twitter|x)\.com/\w+/status/(\d+)(?:[/?#].*)?$";

fn tweet_url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(TWEET_URL_PATTERN).expect("tweet URL pattern is valid"))
}

/// Extracts a tweet ID from a raw numeric ID or a tweet URL.
///
/// # Accepted forms
///
/// - `123456`
/// - `https://x.com/user/status/123456`
/// - `https://twitter.com/user/status/123456`
///
/// # Errors
///
/// Returns [`CliError::Validation`] for empty input or anything matching neither form.
///
/// # Example
///
/// ```rust
/// use tweet_cli::parse_tweet_id;
///
/// assert_eq!(parse_tweet_id("https://X.com/jack/status/20").unwrap(), "20");
/// assert_eq!(parse_tweet_id(" 42 ").unwrap(), "42");
/// assert!(parse_tweet_id("jack").is_err());
/// ```
pub fn parse_tweet_id(input: &str) -> Result<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CliError::Validation("Tweet ID or URL is required.".to_string()));
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Ok(trimmed.to_string());
    }

    let captured = tweet_url_regex()
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string());

    captured.ok_or_else(|| {
        CliError::Validation(format!(
            "Invalid tweet ID or URL: \"{}\"\n\
             Expected a numeric ID or a URL like https://x.com/user/status/123456",
            trimmed
        ))
    })
}

/// Builds the public URL of a tweet.
///
/// ```rust
/// assert_eq!(tweet_cli::tweet_url("alice", "42"), "https://x.com/alice/status/42");
/// ```
pub fn tweet_url(username: &str, tweet_id: &str) -> String {
    format!("https://x.com/{}/status/{}", username, tweet_id)
}
