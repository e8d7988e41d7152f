/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::constants::SESSION_COOKIE;
use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// Body returned by the BusinessFlow login endpoint
///
/// Only the session id is used. The remaining fields are kept so they show up
/// in debug logs when the login answer looks wrong.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Session id to send back as the `JSESSIONID` cookie
    #[serde(default)]
    pub jsessionid: Option<String>,
    /// Anything else the server sent
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl LoginResponse {
    /// Converts the login body into a session
    ///
    /// # Returns
    /// * `Ok(Session)` - The body carried a non-empty `jsessionid`
    /// * `Err(AppError::AuthenticationFailed)` - The field is missing or empty
    pub fn into_session(self) -> Result<Session, AppError> {
        match self.jsessionid {
            Some(id) if !id.trim().is_empty() => Ok(Session::new(id)),
            _ => Err(AppError::AuthenticationFailed(
                "No JSESSIONID received in response".to_string(),
            )),
        }
    }
}

/// Authenticated session for BusinessFlow requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Session token handed out by the login endpoint
    pub jsessionid: String,
}

impl Session {
    /// Wraps a session token
    pub fn new(jsessionid: impl Into<String>) -> Self {
        Self {
            jsessionid: jsessionid.into(),
        }
    }

    /// Value of the `Cookie` header carrying this session
    #[must_use]
    pub fn cookie_header(&self) -> String {
        format!("{}={}", SESSION_COOKIE, self.jsessionid)
    }
}
