//! Where lookups read `PATH` and `PATHEXT` from.

use std::collections::HashMap;
use std::ffi::OsString;

/// Name of the search path list variable.
pub const PATH_VAR: &str = "PATH";

/// Name of the executable suffix list variable.
pub const PATHEXT_VAR: &str = "PATHEXT";

/// Source of environment variables for [`ResolverConfig`](super::ResolverConfig).
pub trait EnvProvider {
    fn get(&self, key: &str) -> Option<OsString>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvProvider for SystemEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        std::env::var_os(key)
    }
}

/// A fixed set of variables, detached from the process environment.
///
/// Useful for sandboxed launches that pass a child its own `PATH`, and for tests.
#[derive(Debug, Clone, Default)]
pub struct VarsEnv(HashMap<String, OsString>);

impl VarsEnv {
    #[must_use]
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for VarsEnv {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl EnvProvider for VarsEnv {
    fn get(&self, key: &str) -> Option<OsString> {
        self.0.get(key).cloned()
    }
}
