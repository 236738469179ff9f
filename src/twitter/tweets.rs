//! Tweet operations for Twitter API.
//!
//! This module contains functions for posting, replying to, quoting and deleting
//! tweets using the Twitter API v2.

use log::{debug, info, warn};
use reqwest::Method;

use crate::error::{CliError, Result};

use super::api::{sanitize_for_logging, XClient};
use super::types::{CreatePostRequest, CreatedPost, DeletedPost, PostReferences};

/// Character limit for standard accounts. Longer texts are sent anyway.
pub const TWEET_CHAR_LIMIT: usize = 280;

/// Creates a tweet via `POST /2/tweets`, optionally as a reply or quote.
///
/// # Parameters
///
/// - `client`: Authenticated API client
/// - `text`: The text content of the tweet
/// - `refs`: Reply parent and/or quoted tweet
///
/// # Returns
///
/// - `Ok(CreatedPost)`: The new tweet's ID and text
/// - `Err(CliError)`: Network error or API error
pub async fn create_post(
    client: &XClient,
    text: &str,
    refs: &PostReferences,
) -> Result<CreatedPost> {
    info!(
        "Creating tweet (reply_to: {:?}, quote_of: {:?}): '{}'",
        refs.reply_to,
        refs.quote_of,
        sanitize_for_logging(text, 80)
    );

    let length = text.chars().count();
    if length > TWEET_CHAR_LIMIT {
        warn!(
            "Tweet is {} characters, above the standard limit of {}",
            length, TWEET_CHAR_LIMIT
        );
    }

    let payload = CreatePostRequest::new(text, refs);
    debug!("Tweet payload: {}", serde_json::to_string(&payload)?);

    let request_builder = client
        .signed_request(Method::POST, "/tweets", &[])
        .json(&payload);

    let created = client
        .send::<CreatedPost>(request_builder, "create_post")
        .await?
        .ok_or(CliError::MissingData("create_post"))?;

    info!("Tweet created with ID {}", created.id);
    Ok(created)
}

/// Deletes a tweet via `DELETE /2/tweets/:id`.
///
/// A successful response without a `data` member is treated as "not deleted".
pub async fn delete_post(client: &XClient, tweet_id: &str) -> Result<DeletedPost> {
    info!("Deleting tweet {}", tweet_id);
    let path = format!("/tweets/{}", tweet_id);
    let request_builder = client.signed_request(Method::DELETE, &path, &[]);

    let result = client
        .send::<DeletedPost>(request_builder, "delete_post")
        .await?
        .unwrap_or_default();

    info!("Delete of tweet {} reported deleted={}", tweet_id, result.deleted);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WRITE_PERMISSION_HINT;
    use crate::twitter::test_server::TestServer;

    #[tokio::test]
    async fn test_create_post_sends_reply_payload() {
        let server = TestServer::respond(
            "201 Created",
            &[],
            r#"{"data": {"id": "1790", "text": "Agreed"}}"#,
        );
        let created = create_post(&server.client(), "Agreed", &PostReferences::reply_to("42"))
            .await
            .unwrap();
        assert_eq!(created.id, "1790");

        let request = server.request();
        assert!(request.starts_with("POST /2/tweets HTTP/1.1\r\n"));
        assert!(request.to_lowercase().contains("authorization: oauth oauth_consumer_key=\"key\""));
        assert!(request.ends_with(r#"{"text":"Agreed","reply":{"in_reply_to_tweet_id":"42"}}"#));
    }

    #[tokio::test]
    async fn test_create_post_without_data_is_missing_data() {
        let server = TestServer::respond("200 OK", &[], "{}");
        let result = create_post(&server.client(), "hello", &PostReferences::default()).await;
        assert!(matches!(result, Err(CliError::MissingData("create_post"))));
        server.request();
    }

    #[tokio::test]
    async fn test_create_post_forbidden_with_rate_limit_header() {
        let server = TestServer::respond(
            "403 Forbidden",
            &[("x-rate-limit-reset", "1700000000")],
            r#"{"title": "Forbidden", "detail": "You are not permitted to perform this action."}"#,
        );
        let err = create_post(&server.client(), "hello", &PostReferences::default())
            .await
            .unwrap_err();
        server.request();

        match &err {
            CliError::Api(api) => {
                assert_eq!(api.status, 403);
                assert_eq!(api.rate_limit_reset, Some(1_700_000_000));
            }
            other => panic!("expected API error, got {:?}", other),
        }
        let report = err.report();
        assert!(report.starts_with("Error (HTTP 403): Forbidden"));
        assert!(report.contains(WRITE_PERMISSION_HINT));
        assert!(report.ends_with("Rate limited. Resets at: 2023-11-14T22:13:20.000Z"));
    }

    #[tokio::test]
    async fn test_delete_post_confirmed() {
        let server = TestServer::respond("200 OK", &[], r#"{"data": {"deleted": true}}"#);
        let result = delete_post(&server.client(), "123").await.unwrap();
        assert!(result.deleted);
        assert!(server.request().starts_with("DELETE /2/tweets/123 HTTP/1.1\r\n"));
    }

    #[tokio::test]
    async fn test_delete_post_without_data_is_not_deleted() {
        let server = TestServer::respond("200 OK", &[], "{}");
        let result = delete_post(&server.client(), "123").await.unwrap();
        assert!(!result.deleted);
        server.request();
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let server = TestServer::respond("200 OK", &[], "not json");
        let result = delete_post(&server.client(), "123").await;
        assert!(matches!(result, Err(CliError::Decode(_))));
        server.request();
    }
}
