//! # tweet-cli
//!
//! Posts, replies to, quotes and deletes tweets from the command line.
//!
//! ## Environment Variables
//!
//! - `X_API_KEY`, `X_API_SECRET`: consumer key pair of the X app
//! - `X_ACCESS_TOKEN`, `X_ACCESS_TOKEN_SECRET`: access token pair of the posting user
//! - `RUST_LOG`: log filter for stderr output (defaults to `warn`, or `debug` with `--verbose`)
//!
//! The credential keys may also live in `~/.config/tweet-cli/.env` or `./.env`.
//!
//! ## Example Usage
//!
//! ```bash
//! tweet-cli whoami
//! tweet-cli post "Hello from Rust!"
//! tweet-cli reply https://x.com/jack/status/20 "Nice one"
//! tweet-cli delete 1790000000000000000
//! ```

use log::debug;

use tweet_cli::{commands, Cli};

/// Main entry point.
///
/// Parses the arguments, initializes logging, runs exactly one command and exits
/// with status 1 if it failed. Usage errors also exit with 1.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse_args();

    // Initialize the logging system
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
    debug!("Running command: {:?}", cli.command);

    match commands::run(&cli.command).await {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}", e.report());
            std::process::exit(e.exit_code());
        }
    }
}
