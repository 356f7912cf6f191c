#![doc = include_str!(concat!(env!("OUT_DIR"), "/README_GENERATED.md"))]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod command;
pub mod resolver;

pub use command::{command, command_with_config};
pub use resolver::{
    Attempt, AttemptOutcome, DEFAULT_PATHEXT, EnvProvider, FsProvider, Platform, ResolveError,
    Resolution, ResolverConfig, SuffixPolicy, SystemEnv, SystemFs, VarsEnv, look_path, resolve_executable,
    resolve_executable_with_fs,
};
