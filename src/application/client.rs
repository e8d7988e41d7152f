/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Client for the AlgoSec BusinessFlow API
//!
//! # Example
//! ```ignore
//! use algosec_import::prelude::*;
//!
//! let config = Config::new()?;
//! let client = AlgosecClient::new(config)?;
//! client.authenticate().await?;
//! client.create_application("payments-gateway").await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::interfaces::application::ApplicationService;
use crate::constants::{NEW_APPLICATION_PATH, USER_AGENT};
use crate::error::AppError;
use crate::model::auth::Session;
use crate::model::requests::NewApplicationRequest;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE, COOKIE};
use reqwest::{Client as HttpInternalClient, Method, Response, StatusCode};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

/// Client for the BusinessFlow REST API
///
/// Authentication is explicit: call [`ApplicationService::authenticate`] once,
/// then every request carries the session cookie.
pub struct AlgosecClient {
    auth: Auth,
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl AlgosecClient {
    /// Creates a new client without logging in
    ///
    /// Certificate verification follows `config.verify_tls`.
    ///
    /// # Returns
    /// * `Err(AppError::Http)` - If the HTTP client cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()?;

        let auth = Auth::new(config.clone(), http_client.clone());

        Ok(Self {
            auth,
            http_client,
            config,
        })
    }

    /// Gets a reference to the underlying Auth instance
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Clears the stored session
    pub async fn logout(&self) {
        self.auth.logout().await
    }

    /// Sends a JSON request with the session cookie attached
    async fn request_internal<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        session: &Session,
        body: &B,
    ) -> Result<Response, AppError> {
        let url = self.config.url(path);
        debug!("{} {}", method, url);

        let response = self
            .http_client
            .request(method, &url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .header(COOKIE, session.cookie_header())
            .json(body)
            .send()
            .await?;

        debug!("Response status: {}", response.status());
        Ok(response)
    }
}

#[async_trait]
impl ApplicationService for AlgosecClient {
    async fn authenticate(&self) -> Result<Session, AppError> {
        self.auth.login().await
    }

    async fn create_application(&self, name: &str) -> Result<(), AppError> {
        let session = self.auth.get_session().await?;
        let request = NewApplicationRequest::new(name)?;

        let response = self
            .request_internal(Method::POST, NEW_APPLICATION_PATH, &session, &request)
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        if status == StatusCode::BAD_REQUEST {
            return Err(AppError::AlreadyExists(request.name));
        }
        if status == StatusCode::UNAUTHORIZED {
            return Err(AppError::Unauthorized);
        }

        let body = response.text().await.unwrap_or_default();
        debug!("Create application {} failed: {}", request.name, body);
        Err(AppError::Unexpected(status))
    }
}
