//! `std::process::Command` construction from a resolved path.
//!
//! The returned command is never spawned here; the caller adds arguments,
//! environment and stdio as usual.

use std::process::Command;

use crate::resolver::{ResolveError, ResolverConfig, SystemEnv, resolve_executable};

/// Build a [`Command`] for `name`, resolved against the process environment.
pub fn command(name: &str) -> Result<Command, ResolveError> {
    command_with_config(name, &ResolverConfig::from_env(&SystemEnv))
}

/// Build a [`Command`] for `name`, resolved against `config`.
pub fn command_with_config(name: &str, config: &ResolverConfig) -> Result<Command, ResolveError> {
    match resolve_executable(name, config) {
        Ok(resolution) => {
            tracing::debug!(
                name,
                path = %resolution.resolved_path.display(),
                probes = resolution.attempts.len(),
                "Resolved executable"
            );
            Ok(Command::new(resolution.resolved_path))
        }
        Err(e) => {
            tracing::debug!(name, probes = e.attempts().len(), "Executable not found");
            Err(e)
        }
    }
}
