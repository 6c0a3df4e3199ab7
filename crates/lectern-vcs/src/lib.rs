//! Commit dates of content files for Lectern.
//!
//! The route table builder asks a [`CommitDateSource`] for the oldest commit
//! (first published) and newest commit (last updated) touching an entry's
//! source file. [`GitCommitDates`] answers by running `git log` in the file's
//! directory; [`StaticCommitDates`] (behind the `mock` feature) answers from
//! a fixed table.
//!
//! Only [`VcsError::InvalidTimestamp`] signals a broken environment. Every
//! other error means "no date available" and callers skip the date.

#[cfg(feature = "mock")]
mod mock;

use std::path::{Path, PathBuf};
use std::process::Command;

use chrono::{DateTime, Utc};

#[cfg(feature = "mock")]
pub use mock::StaticCommitDates;

/// Which end of a file's history to look at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CommitAge {
    /// Commit that added the file, following renames.
    Oldest,
    /// Most recent commit touching the file.
    Newest,
}

/// Commit date lookup error.
#[derive(Debug, thiserror::Error)]
pub enum VcsError {
    /// Git could not be started (not installed, or the directory is missing).
    #[error("Failed to run git for {}: {source}", path.display())]
    Spawn {
        /// File whose history was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Git ran but reported failure (e.g. not a repository).
    #[error("git log failed for {} ({status}): {stderr}", path.display())]
    Command {
        /// File whose history was requested.
        path: PathBuf,
        /// Exit status description.
        status: String,
        /// Trimmed standard error output.
        stderr: String,
    },
    /// The file has no commits (untracked or outside the repository).
    #[error("No commit history for {}", path.display())]
    NoHistory {
        /// File whose history was requested.
        path: PathBuf,
    },
    /// Git printed something that is not a Unix timestamp.
    #[error("Failed to parse commit timestamp for {}: {output:?}", path.display())]
    InvalidTimestamp {
        /// File whose history was requested.
        path: PathBuf,
        /// Offending output.
        output: String,
    },
}

impl VcsError {
    /// Check if the build may continue without the date.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::InvalidTimestamp { .. })
    }

    /// File the error refers to.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Spawn { path, .. }
            | Self::Command { path, .. }
            | Self::NoHistory { path }
            | Self::InvalidTimestamp { path, .. } => path,
        }
    }
}

/// Source of commit dates for files.
pub trait CommitDateSource: Send + Sync {
    /// Date of the oldest or newest commit touching `path`.
    ///
    /// # Errors
    ///
    /// Returns [`VcsError`] if the history cannot be read or is empty.
    fn commit_date(&self, path: &Path, age: CommitAge) -> Result<DateTime<Utc>, VcsError>;
}

/// Commit date source backed by the `git` command line.
#[derive(Clone, Debug)]
pub struct GitCommitDates {
    program: PathBuf,
}

impl Default for GitCommitDates {
    fn default() -> Self {
        Self {
            program: PathBuf::from("git"),
        }
    }
}

impl GitCommitDates {
    /// Use `git` from `PATH`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific git executable.
    #[must_use]
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn log_args(file_name: &str, age: CommitAge) -> Vec<&str> {
        let mut args = vec!["log", "--format=%ct", "--max-count=1"];
        if age == CommitAge::Oldest {
            args.extend(["--follow", "--diff-filter=A"]);
        }
        args.extend(["--", file_name]);
        args
    }
}

impl CommitDateSource for GitCommitDates {
    fn commit_date(&self, path: &Path, age: CommitAge) -> Result<DateTime<Utc>, VcsError> {
        let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
            return Err(VcsError::NoHistory {
                path: path.to_path_buf(),
            });
        };
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        tracing::trace!(path = %path.display(), ?age, "Querying git history");
        let output = Command::new(&self.program)
            .args(Self::log_args(&file_name, age))
            .current_dir(dir)
            .output()
            .map_err(|source| VcsError::Spawn {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(VcsError::Command {
                path: path.to_path_buf(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        parse_commit_timestamp(path, &String::from_utf8_lossy(&output.stdout))
    }
}

/// Parse `git log --format=%ct` output into a date.
///
/// Empty output means the file has no history.
///
/// # Errors
///
/// Returns [`VcsError::NoHistory`] for empty output and
/// [`VcsError::InvalidTimestamp`] for anything but decimal seconds.
pub fn parse_commit_timestamp(path: &Path, output: &str) -> Result<DateTime<Utc>, VcsError> {
    let trimmed = output.trim();
    if trimmed.is_empty() {
        return Err(VcsError::NoHistory {
            path: path.to_path_buf(),
        });
    }

    let invalid = || VcsError::InvalidTimestamp {
        path: path.to_path_buf(),
        output: trimmed.to_owned(),
    };

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    let seconds: i64 = trimmed.parse().map_err(|_| invalid())?;
    DateTime::from_timestamp(seconds, 0).ok_or_else(invalid)
}
