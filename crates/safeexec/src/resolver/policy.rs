//! Platform rules for executable suffixes and path-embedded names.
//!
//! Windows marks files executable by extension (`PATHEXT`), Unix by
//! permission bits. The difference is captured once as a [`SuffixPolicy`]
//! value so the search itself never branches on the host OS.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Suffixes used when `PATHEXT` is unset or empty.
///
/// Fixed here rather than taken from the OS so that lookups behave the same
/// regardless of ambient configuration.
pub const DEFAULT_PATHEXT: [&str; 4] = [".com", ".exe", ".bat", ".cmd"];

/// Lookup conventions of a platform family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// Executable bit, `/` separator, no suffixes.
    Unix,
    /// `PATHEXT` suffixes, `\`, `/` and drive `:` separators.
    Windows,
}

impl Platform {
    /// The platform this binary was compiled for.
    pub const fn host() -> Self {
        if cfg!(windows) { Self::Windows } else { Self::Unix }
    }

    /// Whether `name` names a location rather than a bare program name.
    ///
    /// Such names bypass the search path list entirely.
    pub fn has_path_separator(self, name: &str) -> bool {
        match self {
            Self::Unix => name.contains('/'),
            Self::Windows => name.contains(['/', '\\', ':']),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::host()
    }
}

/// How candidate file names are expanded with executable suffixes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SuffixPolicy {
    /// Probe the literal name only.
    #[default]
    None,
    /// Probe the name with each suffix appended, in order. Suffixes are
    /// lowercase and start with `.`.
    FixedList(Vec<String>),
}

impl SuffixPolicy {
    /// Select the policy for `platform`, given the raw `PATHEXT` value.
    pub fn for_platform(platform: Platform, pathext: Option<&OsStr>) -> Self {
        match platform {
            Platform::Unix => Self::None,
            Platform::Windows => Self::from_pathext(pathext),
        }
    }

    /// Parse a `PATHEXT` value (`.COM;.EXE;...`).
    ///
    /// Entries are lowercased, empty entries are skipped and a missing
    /// leading dot is added. An unset or empty value yields
    /// [`DEFAULT_PATHEXT`].
    pub fn from_pathext(pathext: Option<&OsStr>) -> Self {
        let raw = pathext.map(OsStr::to_string_lossy).unwrap_or_default();

        let suffixes: Vec<String> = raw
            .to_lowercase()
            .split(';')
            .map(str::trim)
            .filter(|ext| !ext.is_empty())
            .map(|ext| {
                if ext.starts_with('.') {
                    ext.to_string()
                } else {
                    format!(".{ext}")
                }
            })
            .collect();

        if suffixes.is_empty() {
            Self::FixedList(DEFAULT_PATHEXT.iter().map(ToString::to_string).collect())
        } else {
            Self::FixedList(suffixes)
        }
    }

    /// The suffix list, empty for [`SuffixPolicy::None`].
    pub fn suffixes(&self) -> &[String] {
        match self {
            Self::None => &[],
            Self::FixedList(list) => list,
        }
    }

    /// Whether `name` already ends in one of the recognised suffixes
    /// (case-insensitive).
    pub fn is_recognized(&self, name: &str) -> bool {
        let lower = name.to_lowercase();
        self.suffixes().iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    /// Ordered candidate paths for one prefix.
    ///
    /// `base` is the path to probe before suffixes (a search directory joined
    /// with `name`, or the path-embedded name itself).
    pub fn candidates(&self, base: &Path, name: &str) -> Vec<PathBuf> {
        let suffixes = self.suffixes();
        if suffixes.is_empty() || self.is_recognized(name) {
            return vec![base.to_path_buf()];
        }

        let mut candidates = Vec::with_capacity(suffixes.len() + 1);
        // Some other extension (`ls.exe` with `.com;.bat`): try it as written first.
        if has_extension(name) {
            candidates.push(base.to_path_buf());
        }
        candidates.extend(suffixes.iter().map(|ext| with_suffix(base, ext)));
        candidates
    }
}

/// Whether the final component of `name` contains a dot.
///
/// A leading dot counts, so `.profile` is tried as written.
fn has_extension(name: &str) -> bool {
    let file_name = name.rsplit(['/', '\\', ':']).next().unwrap_or(name);
    file_name.contains('.')
}

fn with_suffix(base: &Path, ext: &str) -> PathBuf {
    let mut raw: OsString = base.as_os_str().to_owned();
    raw.push(ext);
    PathBuf::from(raw)
}
