/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of trying to create one application
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportOutcome {
    /// The server created the application
    Created,
    /// The server answered 400, the application is already there
    AlreadyExists,
    /// Any other failure, with the reason
    Failed(String),
}

impl ImportOutcome {
    /// Whether the application was created by this run
    #[must_use]
    pub fn is_created(&self) -> bool {
        matches!(self, ImportOutcome::Created)
    }
}

impl From<Result<(), AppError>> for ImportOutcome {
    fn from(result: Result<(), AppError>) -> Self {
        match result {
            Ok(()) => ImportOutcome::Created,
            Err(AppError::AlreadyExists(_)) => ImportOutcome::AlreadyExists,
            Err(e) => ImportOutcome::Failed(e.to_string()),
        }
    }
}

impl fmt::Display for ImportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportOutcome::Created => write!(f, "created"),
            ImportOutcome::AlreadyExists => write!(f, "already exists"),
            ImportOutcome::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}

/// Per-application results of an import run, in processing order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ImportReport {
    entries: Vec<(String, ImportOutcome)>,
}

impl ImportReport {
    /// Creates an empty report
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the outcome for one application
    pub fn record(&mut self, name: impl Into<String>, outcome: ImportOutcome) {
        self.entries.push((name.into(), outcome));
    }

    /// Entries in the order they were processed
    #[must_use]
    pub fn entries(&self) -> &[(String, ImportOutcome)] {
        &self.entries
    }

    /// Number of applications attempted
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Number of applications created
    #[must_use]
    pub fn created(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::Created))
    }

    /// Number of applications skipped because they already existed
    #[must_use]
    pub fn already_exists(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::AlreadyExists))
    }

    /// Number of applications that failed for any other reason
    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, ImportOutcome::Failed(_)))
    }

    /// True when every attempted application was created
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.entries.iter().all(|(_, o)| o.is_created())
    }

    fn count(&self, pred: impl Fn(&ImportOutcome) -> bool) -> usize {
        self.entries.iter().filter(|(_, o)| pred(o)).count()
    }
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use prettytable::format;
        use prettytable::{Cell, Row, Table};

        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![Cell::new("APPLICATION"), Cell::new("RESULT")]));
        for (name, outcome) in &self.entries {
            table.add_row(Row::new(vec![
                Cell::new(name),
                Cell::new(&outcome.to_string()),
            ]));
        }

        write!(f, "{}", table)?;
        write!(
            f,
            "{} applications: {} created, {} already existed, {} failed",
            self.total(),
            self.created(),
            self.already_exists(),
            self.failed()
        )
    }
}
