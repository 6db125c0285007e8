//! The submission journal.
//!
//! There is no backend; accepted submissions are appended as JSON lines to a
//! file in the platform data directory. Journaling is best-effort and never
//! disturbs the page.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::form::Submission;

/// One journaled submission.
#[derive(Debug, Serialize, Deserialize)]
pub struct JournalEntry {
    pub timestamp: DateTime<Utc>,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Append-only JSON-lines journal.
#[derive(Debug)]
pub struct SubmissionJournal {
    path: Option<PathBuf>,
}

impl SubmissionJournal {
    /// Journal at the platform data directory, or disabled when none exists.
    pub fn new() -> Self {
        let path =
            ProjectDirs::from("", "", "omniseq").map(|dirs| dirs.data_dir().join("submissions.jsonl"));
        Self { path }
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }

    /// Record a submission. Returns whether the entry reached the file; a
    /// failure is silent.
    pub fn record(&self, submission: &Submission, timestamp: DateTime<Utc>) -> bool {
        let Some(path) = &self.path else {
            return false;
        };
        let entry = JournalEntry {
            timestamp,
            name: submission.name.clone(),
            email: submission.email.clone(),
            subject: submission.subject.clone(),
            message: submission.message.clone(),
        };
        let Ok(line) = serde_json::to_string(&entry) else {
            return false;
        };
        append_line(path, &line).is_ok()
    }
}

impl Default for SubmissionJournal {
    fn default() -> Self {
        Self::new()
    }
}

fn append_line(path: &Path, line: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{line}")
}
