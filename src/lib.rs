//! # tweet-cli
//!
//! A lightweight command-line client for posting to X/Twitter through the official
//! API v2, authenticating with OAuth 1.0a user credentials.
//!
//! ## Features
//!
//! - `whoami`: verify credentials and show the authenticated user
//! - `post`, `reply`, `quote`: publish a tweet and print its URL
//! - `delete`: delete a tweet by ID or URL
//! - Human-readable error reports with hints for permission and rate-limit failures
//!
//! ## Configuration
//!
//! Four keys are required: `X_API_KEY`, `X_API_SECRET`, `X_ACCESS_TOKEN` and
//! `X_ACCESS_TOKEN_SECRET`. They are looked up, first match wins, in:
//!
//! 1. the process environment
//! 2. `~/.config/tweet-cli/.env`
//! 3. `.env` in the current directory
//!
//! Log output goes to stderr and is controlled with `RUST_LOG` (default `warn`).

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod oauth;
pub mod twitter;

// Re-export commonly used types and functions
pub use cli::{Cli, Command};
pub use commands::{execute, run};
pub use config::{ConfigSources, Credentials};
pub use error::{ApiError, CliError, Result};
pub use oauth::build_oauth1_header;
pub use twitter::{create_session, parse_tweet_id, tweet_url, Session, XClient};
