//! Twitter/X API integration module.
//!
//! This module contains the [`Session`] abstraction used by the commands and its
//! HTTP implementation, [`XClient`], which signs requests with OAuth 1.0a.

mod api;
mod parsing;
mod tweets;
mod types;
mod users;

#[cfg(test)]
pub(crate) mod test_server;

use async_trait::async_trait;

use crate::config::Credentials;
use crate::error::Result;

// Re-export public API
pub use api::{XClient, API_BASE_URL};
pub use parsing::{parse_tweet_id, tweet_url};
pub use tweets::{create_post, delete_post, TWEET_CHAR_LIMIT};
pub use types::{CreatedPost, DeletedPost, PostReferences, PublicMetrics, UserProfile};
pub use users::fetch_current_user;

/// An authenticated connection to the API, bound to one set of credentials.
///
/// Every method issues exactly one request.
#[async_trait]
pub trait Session: Send + Sync {
    /// Returns the profile of the authenticated user.
    async fn current_user(&self) -> Result<UserProfile>;

    /// Creates a tweet, optionally replying to or quoting another one.
    async fn create_post(&self, text: &str, refs: &PostReferences) -> Result<CreatedPost>;

    /// Requests deletion of a tweet.
    async fn delete_post(&self, tweet_id: &str) -> Result<DeletedPost>;
}

#[async_trait]
impl Session for XClient {
    async fn current_user(&self) -> Result<UserProfile> {
        fetch_current_user(self).await
    }

    async fn create_post(&self, text: &str, refs: &PostReferences) -> Result<CreatedPost> {
        create_post(self, text, refs).await
    }

    async fn delete_post(&self, tweet_id: &str) -> Result<DeletedPost> {
        delete_post(self, tweet_id).await
    }
}

/// Creates an API session from loaded credentials.
pub fn create_session(credentials: Credentials) -> Result<XClient> {
    XClient::new(credentials)
}
