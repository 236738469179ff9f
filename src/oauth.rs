//! OAuth 1.0a authentication module for Twitter/X API integration.
//!
//! Every request is signed with HMAC-SHA1 using the app's consumer key pair and
//! the user's access token pair, as described in RFC 5849.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;
use std::borrow::Cow;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Credentials;

/// Percent-encodes a value per RFC 3986, leaving only `A-Za-z0-9-._~` untouched.
pub fn percent_encode(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Per-request OAuth parameters used to create a signature.
#[derive(Clone, Debug)]
pub(crate) struct OAuthParams {
    /// A random token representing the request itself, used by the API to reject replays.
    nonce: String,
    /// Unix timestamp for when the request was created.
    timestamp: u64,
}

impl OAuthParams {
    /// Creates parameters with a fresh 32-character nonce and the current time.
    pub(crate) fn new() -> Self {
        let timestamp = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(dur) => dur,
            Err(err) => err.duration(),
        }
        .as_secs();
        let nonce = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(32)
            .map(char::from)
            .collect();
        OAuthParams { nonce, timestamp }
    }

    /// Signs a request and returns the header parameters including `oauth_signature`.
    ///
    /// `url` must not contain a query string; query (and form) parameters go in `params`.
    pub(crate) fn sign(
        self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        credentials: &Credentials,
    ) -> SignedHeader {
        let timestamp = self.timestamp.to_string();
        let mut oauth: Vec<(&'static str, String)> = vec![
            ("oauth_consumer_key", credentials.api_key.clone()),
            ("oauth_nonce", self.nonce),
            ("oauth_signature_method", "HMAC-SHA1".to_string()),
            ("oauth_timestamp", timestamp),
            ("oauth_token", credentials.access_token.clone()),
            ("oauth_version", "1.0".to_string()),
        ];

        let mut encoded: Vec<(String, String)> = params
            .iter()
            .map(|(k, v)| (percent_encode(k).into_owned(), percent_encode(v).into_owned()))
            .chain(
                oauth
                    .iter()
                    .map(|(k, v)| (percent_encode(k).into_owned(), percent_encode(v).into_owned())),
            )
            .collect();
        encoded.sort();

        let parameter_string = encoded
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");

        let base_string = format!(
            "{}&{}&{}",
            percent_encode(&method.to_uppercase()),
            percent_encode(url),
            percent_encode(&parameter_string)
        );
        let signing_key = format!(
            "{}&{}",
            percent_encode(&credentials.api_secret),
            percent_encode(&credentials.access_token_secret)
        );

        let mut mac = Hmac::<Sha1>::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base_string.as_bytes());
        let signature = STANDARD.encode(mac.finalize().into_bytes());

        oauth.push(("oauth_signature", signature));
        oauth.sort();
        SignedHeader { params: oauth }
    }
}

/// OAuth parameters combined with their signature, ready to be sent.
pub(crate) struct SignedHeader {
    params: Vec<(&'static str, String)>,
}

/// Formats the parameters as an `Authorization` header value.
impl fmt::Display for SignedHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "OAuth ")?;
        for (i, (k, v)) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=\"{}\"", k, percent_encode(v))?;
        }
        Ok(())
    }
}

/// Builds the Authorization header for an OAuth 1.0a user-context request.
///
/// # Parameters
///
/// - `method`: HTTP method, e.g. `GET`
/// - `url`: The endpoint URL without its query string
/// - `params`: Query parameters sent with the request (JSON bodies are not signed)
/// - `credentials`: Consumer and access token pairs
///
/// # Example
///
/// ```rust
/// use tweet_cli::{build_oauth1_header, Credentials};
///
/// let creds = Credentials {
///     api_key: "key".into(),
///     api_secret: "secret".into(),
///     access_token: "token".into(),
///     access_token_secret: "token-secret".into(),
/// };
/// let header = build_oauth1_header("GET", "https://api.x.com/2/users/me", &[], &creds);
/// assert!(header.starts_with("OAuth "));
/// ```
pub fn build_oauth1_header(
    method: &str,
    url: &str,
    params: &[(&str, &str)],
    credentials: &Credentials,
) -> String {
    OAuthParams::new()
        .sign(method, url, params, credentials)
        .to_string()
}
