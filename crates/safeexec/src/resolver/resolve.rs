//! Main executable path resolution logic.

use super::config::ResolverConfig;
use super::env::SystemEnv;
use super::fs::{FsProvider, SystemFs};
use super::search::ExecutableSearcher;
use super::types::{Attempt, ResolveError, Resolution};
use std::path::PathBuf;

/// Resolve `name` using the current process environment.
///
/// `PATH` and `PATHEXT` are read once for this call. Returns the bare path;
/// use [`resolve_executable`] to also get the probed candidates.
pub fn look_path(name: &str) -> Result<PathBuf, ResolveError> {
    let config = ResolverConfig::from_env(&SystemEnv);
    resolve_executable(name, &config).map(|resolution| resolution.resolved_path)
}

/// Resolve `name` to an executable path against the real filesystem.
///
/// - A name containing a path separator is probed at that location only.
/// - A bare name is probed in each `config.search_path` directory in order.
/// - Within each location the suffix policy decides which file names are tried.
///
/// The first qualifying file wins. When nothing qualifies the error is
/// [`ResolveError::NotFound`], whatever went wrong with individual probes.
pub fn resolve_executable(name: &str, config: &ResolverConfig) -> Result<Resolution, ResolveError> {
    resolve_executable_with_fs(name, config, &SystemFs)
}

/// Resolve with an injected filesystem (for testing).
pub fn resolve_executable_with_fs(
    name: &str,
    config: &ResolverConfig,
    fs: &dyn FsProvider,
) -> Result<Resolution, ResolveError> {
    if name.is_empty() {
        return Err(ResolveError::not_found(name, Vec::new()));
    }

    let searcher = ExecutableSearcher::new(fs, &config.suffixes);
    let attempts = if config.platform.has_path_separator(name) {
        searcher.search_literal(name)
    } else {
        searcher.search_dirs(name, &config.search_path)
    };

    match find_success(&attempts) {
        Some(success) => Ok(Resolution {
            resolved_path: success.candidate.clone(),
            attempts,
        }),
        None => Err(ResolveError::not_found(name, attempts)),
    }
}

/// The searcher stops at the first success, so it can only be the last attempt.
fn find_success(attempts: &[Attempt]) -> Option<&Attempt> {
    attempts.last().filter(|a| a.outcome.is_ok())
}
