/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Body of a create-application request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
pub struct NewApplicationRequest {
    /// Name of the application to create
    pub name: String,
}

impl NewApplicationRequest {
    /// Builds a request for the given name
    ///
    /// # Returns
    /// * `Err(AppError::InvalidInput)` - If the name is blank
    pub fn new(name: &str) -> Result<Self, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::InvalidInput(
                "application name must not be empty".to_string(),
            ));
        }
        Ok(Self {
            name: name.to_string(),
        })
    }
}
