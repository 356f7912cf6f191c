//! Types for executable path resolution.

use serde::Serialize;
use std::path::PathBuf;

/// Result of resolving a name to an executable path.
#[derive(Debug, Clone, Serialize)]
pub struct Resolution {
    /// The resolved path, joined the same way it was probed (not canonicalised).
    pub resolved_path: PathBuf,
    /// Every candidate that was probed, in order, ending with the match.
    pub attempts: Vec<Attempt>,
}

/// A single probe of a candidate path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attempt {
    /// The path that was checked.
    pub candidate: PathBuf,
    /// The outcome of checking this candidate.
    pub outcome: AttemptOutcome,
}

/// Possible outcomes when checking if a candidate path is a qualifying executable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum AttemptOutcome {
    /// File was found and is executable (success case).
    Ok,
    /// Path does not exist.
    NotFound,
    /// Path exists but is not a regular file (e.g., directory).
    NotAFile,
    /// File exists but has no execute permission bit.
    NotExecutable,
    /// Permission denied when checking the path.
    PermissionDenied,
    /// Other I/O error occurred.
    IoError(String),
}

impl AttemptOutcome {
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }
}

impl std::fmt::Display for AttemptOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NotFound => write!(f, "not found"),
            Self::NotAFile => write!(f, "not a file"),
            Self::NotExecutable => write!(f, "not executable"),
            Self::PermissionDenied => write!(f, "permission denied"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
        }
    }
}

/// Error returned when executable resolution fails.
///
/// Probe failures (permission denied, other I/O errors) never surface here;
/// they are recorded on the individual [`Attempt`]s and the search moves on.
#[derive(Debug, Clone, thiserror::Error)]
#[non_exhaustive]
pub enum ResolveError {
    /// No directory/suffix combination yielded a qualifying file.
    #[error("executable file not found: '{name}'. Tried:\n{}", render_attempts(.attempts))]
    NotFound { name: String, attempts: Vec<Attempt> },
}

impl ResolveError {
    pub(crate) fn not_found(name: impl Into<String>, attempts: Vec<Attempt>) -> Self {
        Self::NotFound {
            name: name.into(),
            attempts,
        }
    }

    /// Whether this is the `NotFound` outcome.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// The candidates probed before giving up.
    pub fn attempts(&self) -> &[Attempt] {
        match self {
            Self::NotFound { attempts, .. } => attempts,
        }
    }
}

fn render_attempts(attempts: &[Attempt]) -> String {
    if attempts.is_empty() {
        return "  (no candidates checked)".to_string();
    }

    attempts
        .iter()
        .map(|a| format!("  ✗ {}: {}", a.candidate.display(), a.outcome))
        .collect::<Vec<_>>()
        .join("\n")
}
