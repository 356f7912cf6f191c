//! Resolver configuration and the environment adapter that builds it.

use super::env::{EnvProvider, PATH_VAR, PATHEXT_VAR};
use super::policy::{Platform, SuffixPolicy};
use std::ffi::OsStr;
use std::path::PathBuf;

/// Everything a lookup depends on besides the name and the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ResolverConfig {
    /// Directories to search for bare names, in priority order.
    pub search_path: Vec<PathBuf>,
    /// Executable suffix rules.
    pub suffixes: SuffixPolicy,
    /// Separator rules for path-embedded names.
    pub platform: Platform,
}

impl ResolverConfig {
    /// Explicit configuration for the host platform.
    pub fn new(
        search_path: impl IntoIterator<Item = impl Into<PathBuf>>,
        suffixes: SuffixPolicy,
    ) -> Self {
        Self {
            search_path: search_path.into_iter().map(Into::into).collect(),
            suffixes,
            platform: Platform::host(),
        }
    }

    /// Use the separator rules of `platform` instead of the host's.
    #[must_use]
    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Read `PATH` (and `PATHEXT` on Windows) from `env` for the host platform.
    pub fn from_env(env: &dyn EnvProvider) -> Self {
        Self::from_env_for(env, Platform::host())
    }

    /// Read `PATH` and `PATHEXT` from `env`, applying `platform` rules.
    ///
    /// `PATH` is split with the host list separator. Empty entries are
    /// dropped, so an empty or unset `PATH` gives an empty search list and
    /// the current directory is never searched implicitly.
    pub fn from_env_for(env: &dyn EnvProvider, platform: Platform) -> Self {
        let search_path = env
            .get(PATH_VAR)
            .map(|raw| split_search_path(&raw))
            .unwrap_or_default();
        let pathext = env.get(PATHEXT_VAR);
        let suffixes = SuffixPolicy::for_platform(platform, pathext.as_deref());

        tracing::debug!(
            ?platform,
            dirs = search_path.len(),
            suffixes = ?suffixes.suffixes(),
            "Loaded executable search configuration"
        );

        Self {
            search_path,
            suffixes,
            platform,
        }
    }
}

fn split_search_path(raw: &OsStr) -> Vec<PathBuf> {
    std::env::split_paths(raw)
        .filter(|dir| !dir.as_os_str().is_empty())
        .collect()
}
