//! Command-line interface definition.

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "tweet-cli")]
#[command(version)]
#[command(about = "A lightweight CLI for posting to X/Twitter using the official API v2.")]
#[command(after_help = "Credentials are read from the environment, then \
~/.config/tweet-cli/.env, then ./.env:\n  \
X_API_KEY, X_API_SECRET, X_ACCESS_TOKEN, X_ACCESS_TOKEN_SECRET")]
pub struct Cli {
    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parses the process arguments, exiting on `--help`, `--version` or a usage error.
    pub fn parse_args() -> Self {
        match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => {
                let code = usage_exit_code(&err);
                let _ = err.print();
                std::process::exit(code);
            }
        }
    }
}

/// Exit status for an argument parsing outcome: 0 for help and version, 1 otherwise.
pub fn usage_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Verify credentials and show the authenticated user.
    Whoami,

    /// Post a new tweet.
    Post {
        /// Text of the tweet
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Reply to a tweet.
    Reply {
        /// ID or URL of the tweet to reply to
        #[arg(value_name = "TWEET_ID_OR_URL")]
        tweet: String,
        /// Text of the reply
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Quote a tweet.
    Quote {
        /// ID or URL of the tweet to quote
        #[arg(value_name = "TWEET_ID_OR_URL")]
        tweet: String,
        /// Text of the quote
        #[arg(allow_hyphen_values = true)]
        text: String,
    },

    /// Delete a tweet.
    Delete {
        /// ID or URL of the tweet to delete
        #[arg(value_name = "TWEET_ID_OR_URL")]
        tweet: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_reply() {
        let cli = Cli::try_parse_from([
            "tweet-cli",
            "reply",
            "https://x.com/alice/status/1",
            "-1 for this",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Command::Reply {
                tweet: "https://x.com/alice/status/1".to_string(),
                text: "-1 for this".to_string(),
            }
        );
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_empty_post_text_is_accepted_by_parser() {
        let cli = Cli::try_parse_from(["tweet-cli", "post", ""]).unwrap();
        assert_eq!(cli.command, Command::Post { text: String::new() });
    }

    #[test]
    fn test_verbose_flag_after_subcommand() {
        let cli = Cli::try_parse_from(["tweet-cli", "whoami", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.command, Command::Whoami);
    }

    #[test]
    fn test_usage_exit_codes() {
        fn code(args: &[&str]) -> i32 {
            usage_exit_code(&Cli::try_parse_from(args).unwrap_err())
        }
        assert_eq!(code(&["tweet-cli", "--help"]), 0);
        assert_eq!(code(&["tweet-cli", "--version"]), 0);
        assert_eq!(code(&["tweet-cli", "delete"]), 1);
        assert_eq!(code(&["tweet-cli", "post", "a", "b"]), 1);
        assert_eq!(code(&["tweet-cli", "retweet", "1"]), 1);
        assert_eq!(code(&["tweet-cli"]), 1);
    }

    #[test]
    fn test_missing_arguments_rejected() {
        assert!(Cli::try_parse_from(["tweet-cli", "quote", "123"]).is_err());
        assert!(Cli::try_parse_from(["tweet-cli", "delete"]).is_err());
        assert!(Cli::try_parse_from(["tweet-cli"]).is_err());
    }
}
