//! Output formatting for lookup results.
//!
//! Format-only: no lookups happen here.

use std::io::{self, Write};
use std::path::Path;

use safeexec::{Attempt, ResolveError, Resolution};
use serde::Serialize;

/// JSON document printed per name with `--json`.
#[derive(Debug, Serialize)]
pub struct LookupReport<'a> {
    pub name: &'a str,
    pub resolved_path: Option<&'a Path>,
    pub attempts: &'a [Attempt],
}

impl<'a> LookupReport<'a> {
    pub fn found(name: &'a str, resolution: &'a Resolution) -> Self {
        Self {
            name,
            resolved_path: Some(&resolution.resolved_path),
            attempts: &resolution.attempts,
        }
    }

    pub fn missing(name: &'a str, err: &'a ResolveError) -> Self {
        Self {
            name,
            resolved_path: None,
            attempts: err.attempts(),
        }
    }
}

/// Print the resolved path, preceded by the probe trail when `verbose`.
pub fn write_resolution(
    out: &mut dyn Write,
    resolution: &Resolution,
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        write_attempts(out, &resolution.attempts)?;
    }
    writeln!(out, "{}", resolution.resolved_path.display())
}

/// Report a name that did not resolve.
pub fn write_not_found(
    err_out: &mut dyn Write,
    name: &str,
    err: &ResolveError,
    verbose: bool,
) -> io::Result<()> {
    if verbose {
        writeln!(err_out, "safeexec: {err}")
    } else {
        writeln!(err_out, "safeexec: {name}: executable file not found")
    }
}

/// Print one JSON report on a single line.
pub fn write_json(out: &mut dyn Write, report: &LookupReport<'_>) -> Result<(), serde_json::Error> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out).map_err(serde_json::Error::io)
}

fn write_attempts(out: &mut dyn Write, attempts: &[Attempt]) -> io::Result<()> {
    for attempt in attempts {
        let mark = if attempt.outcome.is_ok() { '✓' } else { '✗' };
        writeln!(
            out,
            "  {mark} {}: {}",
            attempt.candidate.display(),
            attempt.outcome
        )?;
    }
    Ok(())
}
