//! Command dispatch.
//!
//! Each command validates its input, then opens a session, then issues its API
//! calls one after another. A failing call stops the command; nothing is retried.

use log::info;

use crate::cli::Command;
use crate::config::Credentials;
use crate::error::{CliError, Result};
use crate::twitter::{
    create_session, parse_tweet_id, tweet_url, PostReferences, Session, UserProfile,
};

/// Runs a command against the real API, loading credentials from the standard locations.
pub async fn run(command: &Command) -> Result<String> {
    execute(command, || Credentials::load().and_then(create_session)).await
}

/// Runs a command and returns the text to print on stdout.
///
/// `connect` is only called once the command's input has been validated, so bad
/// input never touches the config files or the network.
pub async fn execute<S, F>(command: &Command, connect: F) -> Result<String>
where
    S: Session,
    F: FnOnce() -> Result<S>,
{
    match command {
        Command::Whoami => {
            let session = connect()?;
            let user = session.current_user().await?;
            Ok(format_profile(&user))
        }
        Command::Post { text } => {
            require_text(text, "Tweet")?;
            let session = connect()?;
            let url = publish(&session, text, PostReferences::default()).await?;
            Ok(format!("Posted: {}", url))
        }
        Command::Reply { tweet, text } => {
            require_text(text, "Reply")?;
            let reply_to = parse_tweet_id(tweet)?;
            let session = connect()?;
            let url = publish(&session, text, PostReferences::reply_to(reply_to)).await?;
            Ok(format!("Replied: {}", url))
        }
        Command::Quote { tweet, text } => {
            require_text(text, "Quote")?;
            let quoted = parse_tweet_id(tweet)?;
            let session = connect()?;
            let url = publish(&session, text, PostReferences::quote_of(quoted)).await?;
            Ok(format!("Quoted: {}", url))
        }
        Command::Delete { tweet } => {
            let tweet_id = parse_tweet_id(tweet)?;
            let session = connect()?;
            let result = session.delete_post(&tweet_id).await?;
            if result.deleted {
                Ok(format!("Deleted: {}", tweet_id))
            } else {
                Err(CliError::DeleteNotConfirmed { id: tweet_id })
            }
        }
    }
}

/// Resolves the user's handle, then creates the tweet and returns its URL.
async fn publish<S: Session>(session: &S, text: &str, refs: PostReferences) -> Result<String> {
    let me = session.current_user().await?;
    let created = session.create_post(text, &refs).await?;
    info!("Published tweet {} as @{}", created.id, me.username);
    Ok(tweet_url(&me.username, &created.id))
}

fn require_text(text: &str, kind: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(CliError::Validation(format!("{} text cannot be empty.", kind)));
    }
    Ok(())
}

/// Formats the `whoami` output.
pub fn format_profile(user: &UserProfile) -> String {
    let mut out = format!("@{} ({})\n  ID: {}", user.username, user.name, user.id);
    if let Some(metrics) = &user.public_metrics {
        out.push_str(&format!(
            "\n  Followers: {} | Following: {} | Tweets: {}",
            metrics.followers_count, metrics.following_count, metrics.tweet_count
        ));
    }
    out
}
