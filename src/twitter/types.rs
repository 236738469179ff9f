//! Request and response payloads for the Twitter API v2 endpoints used by the CLI.

use serde::{Deserialize, Serialize};

/// Envelope around every v2 response body.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    pub data: Option<T>,
}

/// The authenticated user, as returned by `GET /2/users/me`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub public_metrics: Option<PublicMetrics>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicMetrics {
    #[serde(default)]
    pub followers_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub tweet_count: u64,
}

/// A newly created tweet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPost {
    pub id: String,
    #[serde(default)]
    pub text: String,
}

/// Result of `DELETE /2/tweets/:id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct DeletedPost {
    pub deleted: bool,
}

/// Optional links from a new tweet to an existing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostReferences {
    /// Tweet being replied to.
    pub reply_to: Option<String>,
    /// Tweet being quoted.
    pub quote_of: Option<String>,
}

impl PostReferences {
    pub fn reply_to(id: impl Into<String>) -> Self {
        PostReferences {
            reply_to: Some(id.into()),
            quote_of: None,
        }
    }

    pub fn quote_of(id: impl Into<String>) -> Self {
        PostReferences {
            reply_to: None,
            quote_of: Some(id.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct CreatePostRequest<'a> {
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<ReplyTarget<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote_tweet_id: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplyTarget<'a> {
    pub in_reply_to_tweet_id: &'a str,
}

impl<'a> CreatePostRequest<'a> {
    pub fn new(text: &'a str, refs: &'a PostReferences) -> Self {
        CreatePostRequest {
            text,
            reply: refs.reply_to.as_deref().map(|id| ReplyTarget {
                in_reply_to_tweet_id: id,
            }),
            quote_tweet_id: refs.quote_of.as_deref(),
        }
    }
}

/// Error body of a failed request. Both the v2 problem format and the older
/// `{"errors": [{"code", "message"}]}` format deserialize into this.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    pub title: Option<String>,
    pub reason: Option<String>,
    pub detail: Option<String>,
    #[serde(default)]
    pub errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEntry {
    pub message: Option<String>,
    pub detail: Option<String>,
}
