//! Filesystem probe deciding whether a candidate path qualifies.

use super::types::AttemptOutcome;
use std::io::ErrorKind;
use std::path::Path;

/// Trait for filesystem operations (injectable for testing).
pub trait FsProvider {
    /// Check whether `path` is a qualifying executable.
    ///
    /// Returns [`AttemptOutcome::Ok`] when it is, or the reason it is not.
    fn check_executable(&self, path: &Path) -> AttemptOutcome;
}

/// Probes the real filesystem.
///
/// Symlinks are followed: a link qualifies when its target does.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemFs;

impl FsProvider for SystemFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => return outcome_for_error(&e),
        };

        if !metadata.is_file() {
            return AttemptOutcome::NotAFile;
        }

        // Windows has no execute bit; the suffix list decides instead.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if metadata.permissions().mode() & 0o111 == 0 {
                return AttemptOutcome::NotExecutable;
            }
        }

        AttemptOutcome::Ok
    }
}

fn outcome_for_error(err: &std::io::Error) -> AttemptOutcome {
    match err.kind() {
        // NotADirectory: a file used as a directory component, e.g. `ls/foo`.
        ErrorKind::NotFound | ErrorKind::NotADirectory => AttemptOutcome::NotFound,
        ErrorKind::PermissionDenied => AttemptOutcome::PermissionDenied,
        _ => AttemptOutcome::IoError(err.to_string()),
    }
}

/// Test filesystem with predefined responses.
#[cfg(test)]
#[derive(Default)]
pub struct MockFs {
    executables: std::collections::HashSet<std::path::PathBuf>,
    non_executables: std::collections::HashSet<std::path::PathBuf>,
    directories: std::collections::HashSet<std::path::PathBuf>,
    denied: std::collections::HashSet<std::path::PathBuf>,
}

#[cfg(test)]
impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_non_executable(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.non_executables.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_directory(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.directories.insert(path.into());
        self
    }

    #[must_use]
    pub fn with_denied(mut self, path: impl Into<std::path::PathBuf>) -> Self {
        self.denied.insert(path.into());
        self
    }
}

#[cfg(test)]
impl FsProvider for MockFs {
    fn check_executable(&self, path: &Path) -> AttemptOutcome {
        if self.executables.contains(path) {
            AttemptOutcome::Ok
        } else if self.non_executables.contains(path) {
            AttemptOutcome::NotExecutable
        } else if self.directories.contains(path) {
            AttemptOutcome::NotAFile
        } else if self.denied.contains(path) {
            AttemptOutcome::PermissionDenied
        } else {
            AttemptOutcome::NotFound
        }
    }
}
