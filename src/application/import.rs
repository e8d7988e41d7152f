/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Import driver
//!
//! Reads application names from a text file, logs in once and creates each
//! application in turn. A failed creation is logged and the run moves on;
//! a missing file or a failed login ends the run before any creation call.

use crate::application::client::AlgosecClient;
use crate::application::config::Config;
use crate::application::interfaces::application::ApplicationService;
use crate::error::AppError;
use crate::model::responses::{ImportOutcome, ImportReport};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{error, info, warn};

/// Reads application names from a file
///
/// # Returns
/// * `Ok(Vec<String>)` - Sorted names, see [`parse_application_names`]
/// * `Err(AppError::FileNotFound)` - The file does not exist
/// * `Err(AppError::Io)` - Any other read error
pub fn read_application_names(path: impl AsRef<Path>) -> Result<Vec<String>, AppError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AppError::FileNotFound(path.to_path_buf()),
        _ => AppError::Io(e),
    })?;
    Ok(parse_application_names(&contents))
}

/// Turns file contents into the list of names to import
///
/// `\n`, `\r\n` and a lone `\r` all end a line. Every line is trimmed, blank
/// lines are dropped and the result is sorted. Duplicates are kept.
#[must_use]
pub fn parse_application_names(contents: &str) -> Vec<String> {
    let mut names: Vec<String> = contents
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    names.sort();
    names
}

/// Creates every application in order, continuing past failures
pub async fn import_applications<S>(service: &S, names: &[String]) -> ImportReport
where
    S: ApplicationService + ?Sized,
{
    info!("Found {} applications to import", names.len());

    let mut report = ImportReport::new();
    for name in names {
        let outcome = ImportOutcome::from(service.create_application(name).await);
        match &outcome {
            ImportOutcome::Created => info!("Successfully created application: {}", name),
            ImportOutcome::AlreadyExists => warn!("Application {} already exists.", name),
            ImportOutcome::Failed(reason) => {
                error!("Failed to create application {}: {}", name, reason)
            }
        }
        report.record(name.as_str(), outcome);
    }
    report
}

/// Reads the file, logs in, then imports every name
///
/// # Returns
/// * `Ok(ImportReport)` - The run got past login, per-item failures are in the report
/// * `Err(AppError)` - The file could not be read or login failed
pub async fn import_all<S>(service: &S, path: impl AsRef<Path>) -> Result<ImportReport, AppError>
where
    S: ApplicationService + ?Sized,
{
    let path = path.as_ref();
    let names = read_application_names(path).inspect_err(|e| error!("Error: {}", e))?;

    if let Err(e) = service.authenticate().await {
        error!("Failed to login to Algosec. Exiting.");
        return Err(e);
    }

    Ok(import_applications(service, &names).await)
}

/// Runs a full import with a BusinessFlow client built from `config`
pub async fn run_import(config: Config) -> Result<ImportReport, AppError> {
    let apps_file = config.apps_file.clone();
    let client = AlgosecClient::new(config)?;
    import_all(&client, apps_file).await
}
