//! Mock commit date source for testing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use chrono::{DateTime, Utc};

use crate::{CommitAge, CommitDateSource, VcsError};

#[derive(Clone, Debug)]
enum Answer {
    Date(DateTime<Utc>),
    Garbage(String),
    Failure,
}

/// Commit date source answering from a fixed table.
///
/// Paths without an answer have no history. Every query is recorded so tests
/// can assert which files were looked up.
#[derive(Debug, Default)]
pub struct StaticCommitDates {
    answers: HashMap<(PathBuf, CommitAge), Answer>,
    queries: RwLock<Vec<(PathBuf, CommitAge)>>,
}

impl StaticCommitDates {
    /// Create a source where no file has history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer `age` queries for `path` with `date`.
    #[must_use]
    pub fn with_date(mut self, path: impl Into<PathBuf>, age: CommitAge, date: DateTime<Utc>) -> Self {
        self.answers.insert((path.into(), age), Answer::Date(date));
        self
    }

    /// Answer `age` queries for `path` as if git printed `output`.
    #[must_use]
    pub fn with_output(mut self, path: impl Into<PathBuf>, age: CommitAge, output: &str) -> Self {
        self.answers
            .insert((path.into(), age), Answer::Garbage(output.to_owned()));
        self
    }

    /// Fail `age` queries for `path` as if git exited with an error.
    #[must_use]
    pub fn with_failure(mut self, path: impl Into<PathBuf>, age: CommitAge) -> Self {
        self.answers.insert((path.into(), age), Answer::Failure);
        self
    }

    /// Queries made so far, in order.
    #[must_use]
    pub fn queries(&self) -> Vec<(PathBuf, CommitAge)> {
        self.queries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl CommitDateSource for StaticCommitDates {
    fn commit_date(&self, path: &Path, age: CommitAge) -> Result<DateTime<Utc>, VcsError> {
        self.queries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push((path.to_path_buf(), age));

        match self.answers.get(&(path.to_path_buf(), age)) {
            Some(Answer::Date(date)) => Ok(*date),
            Some(Answer::Garbage(output)) => crate::parse_commit_timestamp(path, output),
            Some(Answer::Failure) => Err(VcsError::Command {
                path: path.to_path_buf(),
                status: "exit status: 128".to_owned(),
                stderr: "fatal: not a git repository".to_owned(),
            }),
            None => Err(VcsError::NoHistory {
                path: path.to_path_buf(),
            }),
        }
    }
}
