use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use hibp_range_client::{ClientConfig, RangeClient, base_url_from_env};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod error;
mod format;
mod input;

use error::Error;

const LONG_ABOUT: &str = "\
Asks for your password on the terminal and checks it against the Pwned Passwords API. \
When stdin is not a terminal, the first line of stdin is used as the password.

This works by SHA-1 hashing your password and sending only the first five characters \
of the hex-encoded hash. The API returns every hash suffix sharing that prefix, and the \
comparison happens locally.

Neither your password nor its full SHA-1 hash is ever transmitted.

Exits 0 when no compromise was found, 1 when the password was found or the check failed.";

#[derive(Parser, Debug)]
#[command(name = "hibp-check", version)]
#[command(about = "Check a password against Have I Been Pwned without sending it")]
#[command(long_about = LONG_ABOUT)]
struct Args {
    /// Range API base URL; the 5-character hash prefix is appended to it
    /// (default: $HIBP_RANGE_URL, else the public Pwned Passwords endpoint)
    #[arg(short, long)]
    url: Option<String>,

    /// Overall request deadline in seconds
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn client_config(&self) -> ClientConfig {
        let base_url = self.url.clone().unwrap_or_else(base_url_from_env);
        let config = ClientConfig::default().with_base_url(base_url);

        match self.timeout {
            Some(secs) => config.with_request_timeout(Duration::from_secs(secs)),
            None => config,
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Exit status for a completed check: 0 when clean, 1 when compromised.
fn exit_status(count: u64) -> u8 {
    if count > 0 { 1 } else { 0 }
}

async fn run(args: &Args) -> Result<u64, Error> {
    // Reject a bad base URL before asking for the password.
    let config = args.client_config();
    debug!(base_url = %config.base_url, "building range client");
    let client = RangeClient::new(config)?;

    let password = input::read_password().map_err(Error::Prompt)?;
    let count = client.check(password.as_bytes()).await?;

    Ok(count)
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args).await {
        Ok(count) => {
            print!("{}", format::report(count));
            ExitCode::from(exit_status(count))
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
