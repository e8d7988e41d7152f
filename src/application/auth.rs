/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Authentication module for the AlgoSec BusinessFlow API
//!
//! Login uses HTTP Basic authentication against the BusinessFlow login
//! endpoint. The `jsessionid` it returns is kept for the lifetime of the
//! process and sent back as the `JSESSIONID` cookie on every other call.

use crate::application::config::Config;
use crate::constants::LOGIN_PATH;
use crate::error::AppError;
use crate::model::auth::{LoginResponse, Session};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

/// Authentication manager for the BusinessFlow API
///
/// Holds the session obtained at login. There is no refresh: a session is
/// written once and read by every later request.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    session: Arc<RwLock<Option<Session>>>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and the server URL
    /// * `client` - HTTP client shared with the rest of the API client
    pub fn new(config: Arc<Config>, client: Client) -> Self {
        Self {
            config,
            client,
            session: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the current session
    ///
    /// # Returns
    /// * `Ok(Session)` - A login has succeeded before
    /// * `Err(AppError::Unauthenticated)` - No login yet, nothing is sent
    pub async fn get_session(&self) -> Result<Session, AppError> {
        self.session
            .read()
            .await
            .clone()
            .ok_or(AppError::Unauthenticated)
    }

    /// Whether a session is currently stored
    pub async fn is_authenticated(&self) -> bool {
        self.session.read().await.is_some()
    }

    /// Logs in and stores the session
    ///
    /// # Returns
    /// * `Ok(Session)` - The server returned a `jsessionid`
    /// * `Err(AppError)` - Transport error, non-success status, or no token in the body
    pub async fn login(&self) -> Result<Session, AppError> {
        let url = self.config.url(LOGIN_PATH);
        let credentials = &self.config.credentials;

        debug!("Sending login request to: {}", url);

        let response = self
            .client
            .post(&url)
            .basic_auth(&credentials.username, Some(&credentials.password))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .inspect_err(|e| error!("Login failed: {}", e))?;

        let status = response.status();
        debug!("Login response status: {}", status);

        if status == StatusCode::UNAUTHORIZED {
            error!("Login failed: credentials rejected for {}", credentials.username);
            return Err(AppError::Unauthorized);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Login failed with status {}: {}", status, body);
            return Err(AppError::Unexpected(status));
        }

        let body = response.text().await?;
        let login: LoginResponse = serde_json::from_str(&body)
            .inspect_err(|e| error!("Login response is not valid JSON: {}", e))?;

        let session = login.into_session().inspect_err(|e| error!("{}", e))?;

        let mut sess = self.session.write().await;
        *sess = Some(session.clone());

        info!("✓ Login successful, user: {}", credentials.username);
        Ok(session)
    }

    /// Clears the stored session
    ///
    /// Nothing is sent to the server, the session simply stops being used.
    pub async fn logout(&self) {
        let mut session = self.session.write().await;
        *session = None;
        debug!("Session cleared");
    }
}
