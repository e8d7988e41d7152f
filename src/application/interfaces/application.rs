use crate::error::AppError;
use crate::model::auth::Session;
use async_trait::async_trait;

/// Interface for the application service
#[async_trait]
pub trait ApplicationService: Send + Sync {
    /// Logs in and keeps the session for later calls
    ///
    /// # Returns
    /// * `Ok(Session)` - The session now attached to every request
    /// * `Err(AppError)` - Transport error, rejected credentials or no token returned
    async fn authenticate(&self) -> Result<Session, AppError>;

    /// Creates one application
    ///
    /// # Arguments
    /// * `name` - Application name, must not be blank
    ///
    /// # Returns
    /// * `Ok(())` - The application was created
    /// * `Err(AppError::Unauthenticated)` - Called before a successful login
    /// * `Err(AppError::AlreadyExists)` - The server answered 400
    /// * `Err(AppError)` - Any other failure
    async fn create_application(&self, name: &str) -> Result<(), AppError>;
}
