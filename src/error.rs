/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error type shared by the client, the import driver and the binary

use reqwest::StatusCode;
use std::fmt;
use std::path::PathBuf;

/// Errors produced while talking to AlgoSec or reading the import file
#[derive(Debug)]
pub enum AppError {
    /// One or more of server, username or password is empty
    MissingCredentials(Vec<String>),
    /// Login answered but did not hand out a usable session
    AuthenticationFailed(String),
    /// An operation that needs a session was called before login
    Unauthenticated,
    /// The server rejected the credentials or the session
    Unauthorized,
    /// The applications file does not exist
    FileNotFound(PathBuf),
    /// The server answered 400 to a creation request
    AlreadyExists(String),
    /// Any other non-success status code
    Unexpected(StatusCode),
    /// Input rejected before any request was sent
    InvalidInput(String),
    /// Transport or body decoding error from reqwest
    Http(reqwest::Error),
    /// JSON (de)serialization error
    Json(serde_json::Error),
    /// File system error other than a missing file
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingCredentials(fields) => {
                write!(f, "missing credentials: {}", fields.join(", "))
            }
            AppError::AuthenticationFailed(msg) => write!(f, "authentication failed: {msg}"),
            AppError::Unauthenticated => write!(f, "not authenticated"),
            AppError::Unauthorized => write!(f, "unauthorized"),
            AppError::FileNotFound(path) => write!(f, "file {} not found", path.display()),
            AppError::AlreadyExists(name) => write!(f, "application {name} already exists"),
            AppError::Unexpected(status) => write!(f, "unexpected status code: {status}"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::Http(e) => write!(f, "http error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Http(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Http(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}
