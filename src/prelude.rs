/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the client, the import driver and their models into scope.
//!
//! ```rust
//! use algosec_import::prelude::*;
//!
//! let names = parse_application_names("beta\n\nalpha\n");
//! assert_eq!(names, vec!["alpha", "beta"]);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration and credentials
pub use crate::application::config::{Config, Credentials, normalize_server_url};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Authentication handler
pub use crate::application::auth::Auth;

/// BusinessFlow client
pub use crate::application::client::AlgosecClient;

/// Application service trait
pub use crate::application::interfaces::application::ApplicationService;

/// Import driver
pub use crate::application::import::{
    import_all, import_applications, parse_application_names, read_application_names,
    run_import,
};

// ============================================================================
// MODELS
// ============================================================================

/// Session and login models
pub use crate::model::auth::{LoginResponse, Session};

/// Request models
pub use crate::model::requests::NewApplicationRequest;

/// Import results
pub use crate::model::responses::{ImportOutcome, ImportReport};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use tracing::{debug, error, info, warn};
