//! Breached password checker using the Have I Been Pwned range API.
//!
//! The password never leaves the process, and neither does its full hash. The
//! client SHA1-hashes the password locally, sends only the first 5 hex
//! characters of the digest to the range endpoint, and compares the returned
//! suffixes against the remaining 35 characters locally. Every password whose
//! hash shares those 5 characters looks the same to the server (k-anonymity).
//!
//! # Usage
//!
//! ```no_run
//! use hibp_range_client::{DEFAULT_BASE_URL, RangeClient};
//!
//! # async fn run() -> Result<(), hibp_range_client::Error> {
//! let client = RangeClient::with_base_url(DEFAULT_BASE_URL)?;
//! let count = client.check(b"password").await?;
//! if count > 0 {
//!     println!("seen {count} times in breaches");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Response Format
//!
//! A successful response is a 200 with one `SUFFIX:COUNT` record per line:
//!
//! ```text
//! 1E4C9B93F3F0682250B6CF8331B7EE68FD8:3303003
//! 4D0591EEAAC5A33064731DBD53F6A819DCE:0
//! ```
//!
//! Malformed lines are skipped. A 200 with no valid lines at all is an
//! [`Error::EmptyResponse`], never a clean result.

pub mod client;
pub mod config;
pub mod digest;
pub mod error;
pub mod range;

pub use client::RangeClient;
pub use config::{
    ClientConfig, DEFAULT_BASE_URL, HIBP_RANGE_URL_ENV, VERSION, base_url_from_env,
};
pub use digest::{HashSplit, PREFIX_LEN, SUFFIX_LEN, split};
pub use error::Error;
pub use range::{CandidateRecord, find_count, parse_range_body};
