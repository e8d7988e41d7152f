use crate::constants::{
    DEFAULT_APPS_FILE, DEFAULT_SCHEME, DEFAULT_SERVER, ENV_APPS_FILE, ENV_PASS, ENV_SERVER,
    ENV_USER, ENV_VERIFY_TLS,
};
use crate::error::AppError;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Authentication credentials for the AlgoSec BusinessFlow API
pub struct Credentials {
    /// Server base URL, always with a scheme and without a trailing slash
    pub server: String,
    /// Username for the AlgoSec account
    pub username: String,
    /// Password for the AlgoSec account, never serialized
    #[serde(skip_serializing, default)]
    pub password: String,
}

impl Credentials {
    /// Builds credentials, normalizing the server URL
    ///
    /// # Arguments
    /// * `server` - Server address, with or without scheme
    /// * `username` - AlgoSec username
    /// * `password` - AlgoSec password
    ///
    /// # Returns
    /// * `Ok(Credentials)` - All three values present
    /// * `Err(AppError::MissingCredentials)` - Names every empty field
    pub fn new(server: &str, username: &str, password: &str) -> Result<Self, AppError> {
        let mut missing = Vec::new();
        if server.trim().is_empty() {
            missing.push("server".to_string());
        }
        if username.is_empty() {
            missing.push("username".to_string());
        }
        if password.is_empty() {
            missing.push("password".to_string());
        }
        if !missing.is_empty() {
            return Err(AppError::MissingCredentials(missing));
        }

        Ok(Self {
            server: normalize_server_url(server),
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

/// Adds `https://` when the address has no scheme and strips trailing slashes
///
/// ```
/// use algosec_import::application::config::normalize_server_url;
/// assert_eq!(normalize_server_url("algosec.example.com/"), "https://algosec.example.com");
/// assert_eq!(normalize_server_url("http://10.0.0.5"), "http://10.0.0.5");
/// ```
pub fn normalize_server_url(server: &str) -> String {
    let server = server.trim();
    let with_scheme = if server.contains("://") {
        server.to_string()
    } else {
        format!("{DEFAULT_SCHEME}://{server}")
    };
    with_scheme.trim_end_matches('/').to_string()
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for an import run
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// File holding one application name per line
    pub apps_file: PathBuf,
    /// Whether TLS certificates are checked. Off by default, AlgoSec
    /// appliances usually serve self-signed certificates
    pub verify_tls: bool,
}

impl Config {
    /// Creates a configuration from `ALGO_*` environment variables
    ///
    /// A `.env` file in the working directory is loaded first.
    ///
    /// # Returns
    /// * `Ok(Config)` - Credentials were found
    /// * `Err(AppError::MissingCredentials)` - `ALGO_USER` or `ALGO_PASS` unset
    pub fn new() -> Result<Self, AppError> {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let server = get_env_or_default(ENV_SERVER, DEFAULT_SERVER.to_string());
        let username: String = get_env_or_none(ENV_USER).unwrap_or_default();
        let password: String = get_env_or_none(ENV_PASS).unwrap_or_default();
        let apps_file = get_env_or_default(ENV_APPS_FILE, DEFAULT_APPS_FILE.to_string());

        Self::from_parts(
            Credentials::new(&server, &username, &password)?,
            apps_file,
            get_env_flag(ENV_VERIFY_TLS),
        )
    }

    /// Creates a configuration from explicit values
    pub fn from_parts(
        credentials: Credentials,
        apps_file: impl AsRef<Path>,
        verify_tls: bool,
    ) -> Result<Self, AppError> {
        let apps_file = apps_file.as_ref();
        if apps_file.as_os_str().is_empty() {
            return Err(AppError::InvalidInput(
                "applications file path is empty".to_string(),
            ));
        }

        Ok(Config {
            credentials,
            apps_file: apps_file.to_path_buf(),
            verify_tls,
        })
    }

    /// Full URL for a path relative to the server
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.credentials.server,
            path.trim_start_matches('/')
        )
    }
}
