//! Lookup command: resolve every requested name and report the results.

use std::ffi::OsString;
use std::io::Write;

use safeexec::resolver::{PATH_VAR, PATHEXT_VAR};
use safeexec::{EnvProvider, ResolverConfig, resolve_executable};

use crate::error::CliError;
use crate::parser::Cli;
use crate::presentation::{LookupReport, write_json, write_not_found, write_resolution};

/// Environment with the command-line overrides layered over a base provider.
struct OverrideEnv<'a> {
    path: Option<&'a OsString>,
    pathext: Option<&'a OsString>,
    base: &'a dyn EnvProvider,
}

impl EnvProvider for OverrideEnv<'_> {
    fn get(&self, key: &str) -> Option<OsString> {
        let overridden = match key {
            PATH_VAR => self.path,
            PATHEXT_VAR => self.pathext,
            _ => None,
        };
        overridden.cloned().or_else(|| self.base.get(key))
    }
}

/// Resolve each name in `cli`, writing results to `out` and misses to `err_out`.
///
/// The environment is read once, before the first lookup. `out` is flushed
/// before returning, so a closed pipe surfaces as [`CliError::Io`].
pub fn run(
    cli: &Cli,
    env: &dyn EnvProvider,
    out: &mut dyn Write,
    err_out: &mut dyn Write,
) -> Result<(), CliError> {
    let env = OverrideEnv {
        path: cli.path.as_ref(),
        pathext: cli.pathext.as_ref(),
        base: env,
    };
    let config = ResolverConfig::from_env_for(&env, cli.platform());

    let mut missing = 0;
    for name in &cli.names {
        tracing::debug!(name = %name, "Resolving");
        match resolve_executable(name, &config) {
            Ok(resolution) => {
                if cli.json {
                    write_json(out, &LookupReport::found(name, &resolution))?;
                } else {
                    write_resolution(out, &resolution, cli.verbose)?;
                }
            }
            Err(e) => {
                missing += 1;
                if cli.json {
                    write_json(out, &LookupReport::missing(name, &e))?;
                } else {
                    write_not_found(err_out, name, &e, cli.verbose)?;
                }
            }
        }
    }

    out.flush()?;

    if missing > 0 {
        return Err(CliError::NotFound {
            missing,
            total: cli.names.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use safeexec::VarsEnv;
    use std::io;

    /// Output that accepts writes but fails when flushed, like a closed pipe.
    struct ClosedPipe {
        fail_writes: bool,
    }

    impl Write for ClosedPipe {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.fail_writes {
                Err(io::ErrorKind::BrokenPipe.into())
            } else {
                Ok(buf.len())
            }
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::ErrorKind::BrokenPipe.into())
        }
    }

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        for name in ["ls", "ls.bat"] {
            let path = dir.path().join(name);
            std::fs::write(&path, b"#!/bin/sh\n").unwrap();
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            }
        }
        dir
    }

    fn run_args(args: &[&str]) -> (Result<(), CliError>, String, String) {
        let cli = Cli::parse_from(std::iter::once("safeexec").chain(args.iter().copied()));
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = run(&cli, &VarsEnv::default(), &mut out, &mut err);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_resolves_with_path_override() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();

        let (result, out, err) = run_args(&["--platform", "unix", "--path", path, "ls"]);

        assert!(result.is_ok());
        assert_eq!(out.trim_end(), dir.path().join("ls").to_str().unwrap());
        assert!(err.is_empty());
    }

    #[test]
    fn test_windows_rules_expand_pathext() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();

        let (result, out, _) = run_args(&[
            "--platform",
            "windows",
            "--pathext",
            ".com;.bat",
            "--path",
            path,
            "ls",
        ]);

        assert!(result.is_ok());
        assert_eq!(out.trim_end(), dir.path().join("ls.bat").to_str().unwrap());
    }

    #[test]
    fn test_missing_name_reports_and_fails() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();

        let (result, out, err) = run_args(&["--platform", "unix", "--path", path, "ls", "cat"]);

        assert!(matches!(
            result,
            Err(CliError::NotFound {
                missing: 1,
                total: 2
            })
        ));
        assert_eq!(out.lines().count(), 1);
        assert_eq!(err, "safeexec: cat: executable file not found\n");
    }

    #[test]
    fn test_no_search_path_finds_nothing() {
        let (result, _, err) = run_args(&["--platform", "unix", "ls"]);

        assert!(matches!(result, Err(CliError::NotFound { .. })));
        assert!(err.contains("ls"));
    }

    #[test]
    fn test_json_output_for_hit_and_miss() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();

        let (result, out, err) =
            run_args(&["--json", "--platform", "unix", "--path", path, "ls", "cat"]);

        assert!(result.is_err());
        assert!(err.is_empty());
        let reports: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0]["name"], "ls");
        assert!(reports[0]["resolved_path"].is_string());
        assert_eq!(reports[1]["name"], "cat");
        assert!(reports[1]["resolved_path"].is_null());
        assert_eq!(reports[1]["attempts"].as_array().map(Vec::len), Some(1));
    }

    #[test]
    fn test_override_env_falls_back_to_base() {
        let custom = OsString::from("/opt/bin");
        let base = VarsEnv::from_iter([("PATH", "/usr/bin"), ("HOME", "/home/me")]);
        let env = OverrideEnv {
            path: Some(&custom),
            pathext: None,
            base: &base,
        };
        assert_eq!(env.get("PATH"), Some(custom.clone()));
        assert_eq!(env.get("PATHEXT"), None);
        assert_eq!(env.get("HOME"), Some(OsString::from("/home/me")));
    }

    #[test]
    fn test_json_write_failure_exits_as_io_error() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["safeexec", "--json", "--platform", "unix", "--path", path, "ls"]);
        let mut out = ClosedPipe { fail_writes: true };

        let result = run(&cli, &VarsEnv::default(), &mut out, &mut Vec::new());

        let err = result.unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
        assert_eq!(err.exit_code(), 74);
    }

    #[test]
    fn test_failed_final_flush_is_reported() {
        let dir = fixture();
        let path = dir.path().to_str().unwrap();
        let cli = Cli::parse_from(["safeexec", "--platform", "unix", "--path", path, "ls"]);
        let mut out = ClosedPipe { fail_writes: false };

        let result = run(&cli, &VarsEnv::default(), &mut out, &mut Vec::new());

        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
