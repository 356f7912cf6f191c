//! Executable path resolution.
//!
//! Turns a program name such as `"ls"` or `"../system/ls.bat"` into a path
//! that can be handed directly to a spawn call, without relying on the OS
//! search (which may also look in the current directory).
//!
//! ## Architecture
//!
//! - `types`: Core types (`Resolution`, `Attempt`, `AttemptOutcome`, `ResolveError`)
//! - `policy`: Platform rules (`Platform`, `SuffixPolicy`)
//! - `env`: Environment variable sources (`SystemEnv`, in-memory `VarsEnv`)
//! - `fs`: Filesystem probe trait (injectable for testing)
//! - `config`: `ResolverConfig`, built explicitly or from the environment
//! - `search`: Candidate probing in search order
//! - `resolve`: Entry points
//!
//! ## Usage
//!
//! ```rust,no_run
//! use safeexec::resolver::{ResolverConfig, SystemEnv, resolve_executable};
//!
//! let config = ResolverConfig::from_env(&SystemEnv);
//! let result = resolve_executable("git", &config).unwrap();
//! println!("Resolved to: {}", result.resolved_path.display());
//!
//! for attempt in &result.attempts {
//!     println!("  {} - {}", attempt.candidate.display(), attempt.outcome);
//! }
//! ```

mod config;
mod env;
mod fs;
mod policy;
mod resolve;
mod search;
mod types;

pub use config::ResolverConfig;
pub use env::{EnvProvider, PATH_VAR, PATHEXT_VAR, SystemEnv, VarsEnv};
pub use fs::{FsProvider, SystemFs};
pub use policy::{DEFAULT_PATHEXT, Platform, SuffixPolicy};
pub use resolve::{look_path, resolve_executable, resolve_executable_with_fs};
pub use types::{Attempt, AttemptOutcome, ResolveError, Resolution};

#[cfg(test)]
pub use fs::MockFs;
