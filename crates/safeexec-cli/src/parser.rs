//! Command-line arguments.

use std::ffi::OsString;

use clap::{Parser, ValueEnum};
use safeexec::Platform;

/// Resolve program names to the executable files a launcher would run.
///
/// Only the search path list is consulted; the current directory is never
/// searched unless a name contains a path separator.
#[derive(Debug, Parser)]
#[command(name = "safeexec")]
#[command(about = "Resolve program names to executable paths")]
#[command(version)]
pub struct Cli {
    /// Program names or paths to resolve
    #[arg(required = true, value_name = "NAME")]
    pub names: Vec<String>,

    /// Search path list to use instead of $PATH
    #[arg(long = "path", value_name = "LIST")]
    pub path: Option<OsString>,

    /// Suffix list to use instead of $PATHEXT (Windows rules only)
    #[arg(long = "pathext", value_name = "LIST")]
    pub pathext: Option<OsString>,

    /// Lookup rules to apply (defaults to the host's)
    #[arg(long = "platform", value_enum)]
    pub platform: Option<PlatformArg>,

    /// Print every probed candidate and its outcome
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Print results as JSON
    #[arg(long = "json", conflicts_with = "verbose")]
    pub json: bool,
}

/// Lookup rules selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PlatformArg {
    Unix,
    Windows,
}

impl From<PlatformArg> for Platform {
    fn from(arg: PlatformArg) -> Self {
        match arg {
            PlatformArg::Unix => Self::Unix,
            PlatformArg::Windows => Self::Windows,
        }
    }
}

impl Cli {
    /// The platform rules requested, or the host's.
    pub fn platform(&self) -> Platform {
        self.platform.map_or_else(Platform::host, Platform::from)
    }
}
