//! # algosec-import
//!
//! Imports applications into AlgoSec AppViz through the BusinessFlow REST API.
//!
//! The tool logs in once with HTTP Basic authentication, keeps the returned
//! `JSESSIONID`, then creates one application per non-blank line of a text
//! file. Lines are trimmed and sorted first. A 400 answer means the
//! application already exists; it is reported and the import moves on.
//!
//! ## Usage
//!
//! ```text
//! algosec-import --server algosec.example.com --username admin --password secret --file apps.txt
//! ```
//!
//! Every flag falls back to an environment variable (`ALGO_SERVER`,
//! `ALGO_USER`, `ALGO_PASS`, `ALGO_APPS_FILE`, `ALGO_VERIFY_TLS`), and a
//! `.env` file is read before the flags are parsed.
//!
//! ## Library
//!
//! ```ignore
//! use algosec_import::prelude::*;
//!
//! let config = Config::new()?;
//! let report = run_import(config).await?;
//! println!("{report}");
//! ```

/// Login, client, configuration and import driver
pub mod application;
/// Fixed endpoint paths, defaults and environment variable names
pub mod constants;
/// Error type
pub mod error;
/// Wire models and import results
pub mod model;
/// Commonly used types
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Crate version as set in Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the crate version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
