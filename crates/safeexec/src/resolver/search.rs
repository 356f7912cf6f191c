//! Candidate probing in search order.

use super::fs::FsProvider;
use super::policy::SuffixPolicy;
use super::types::{Attempt, AttemptOutcome};
use std::path::{Path, PathBuf};

/// Probes candidates for one name, stopping at the first qualifying file.
pub struct ExecutableSearcher<'a> {
    fs: &'a dyn FsProvider,
    suffixes: &'a SuffixPolicy,
}

impl<'a> ExecutableSearcher<'a> {
    pub fn new(fs: &'a dyn FsProvider, suffixes: &'a SuffixPolicy) -> Self {
        Self { fs, suffixes }
    }

    /// Probe a path-embedded name at its literal location only.
    pub fn search_literal(&self, name: &str) -> Vec<Attempt> {
        let mut attempts = Vec::new();
        self.probe_prefix(Path::new(name), name, &mut attempts);
        attempts
    }

    /// Probe a bare name in each directory of `search_path`, in order.
    ///
    /// Directory order is the primary key and suffix order the secondary one.
    pub fn search_dirs(&self, name: &str, search_path: &[PathBuf]) -> Vec<Attempt> {
        let mut attempts = Vec::new();

        for dir in search_path {
            if self.probe_prefix(&dir.join(name), name, &mut attempts) {
                break;
            }
        }

        attempts
    }

    /// Probe every suffix candidate of `base`, returning `true` on a match.
    fn probe_prefix(&self, base: &Path, name: &str, attempts: &mut Vec<Attempt>) -> bool {
        for candidate in self.suffixes.candidates(base, name) {
            let outcome = self.fs.check_executable(&candidate);
            let found = outcome == AttemptOutcome::Ok;
            attempts.push(Attempt { candidate, outcome });
            if found {
                return true; // Early return on first success
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolver::fs::MockFs;

    fn suffixes(items: &[&str]) -> SuffixPolicy {
        SuffixPolicy::FixedList(items.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn test_search_dirs_stops_at_first_directory() {
        let fs = MockFs::new()
            .with_executable("/usr/local/bin/git")
            .with_executable("/usr/bin/git");
        let policy = SuffixPolicy::None;
        let dirs = [PathBuf::from("/usr/local/bin"), PathBuf::from("/usr/bin")];

        let attempts = ExecutableSearcher::new(&fs, &policy).search_dirs("git", &dirs);

        assert_eq!(attempts.len(), 1);
        assert_eq!(attempts[0].candidate, PathBuf::from("/usr/local/bin/git"));
        assert!(attempts[0].outcome.is_ok());
    }

    #[test]
    fn test_search_dirs_records_every_miss() {
        let fs = MockFs::new()
            .with_directory("/a/tool")
            .with_non_executable("/b/tool")
            .with_denied("/c/tool")
            .with_executable("/d/tool");
        let policy = SuffixPolicy::None;
        let dirs = ["/a", "/b", "/c", "/d"].map(PathBuf::from);

        let attempts = ExecutableSearcher::new(&fs, &policy).search_dirs("tool", &dirs);

        let outcomes: Vec<_> = attempts.iter().map(|a| a.outcome.clone()).collect();
        assert_eq!(
            outcomes,
            vec![
                AttemptOutcome::NotAFile,
                AttemptOutcome::NotExecutable,
                AttemptOutcome::PermissionDenied,
                AttemptOutcome::Ok,
            ]
        );
    }

    #[test]
    fn test_directory_order_beats_suffix_order() {
        // `.com` is preferred within a directory, but never over an earlier directory.
        let fs = MockFs::new()
            .with_executable("/first/x.bat")
            .with_executable("/second/x.com");
        let policy = suffixes(&[".com", ".bat"]);
        let dirs = [PathBuf::from("/first"), PathBuf::from("/second")];

        let attempts = ExecutableSearcher::new(&fs, &policy).search_dirs("x", &dirs);

        let candidates: Vec<_> = attempts.iter().map(|a| a.candidate.clone()).collect();
        assert_eq!(
            candidates,
            vec![PathBuf::from("/first/x.com"), PathBuf::from("/first/x.bat")]
        );
    }

    #[test]
    fn test_search_literal_ignores_directories() {
        let fs = MockFs::new().with_executable("../system/ls.bat");
        let policy = suffixes(&[".com", ".bat"]);

        let attempts = ExecutableSearcher::new(&fs, &policy).search_literal("../system/ls");

        assert_eq!(
            attempts.last().map(|a| a.candidate.clone()),
            Some(PathBuf::from("../system/ls.bat"))
        );
        assert!(attempts.last().is_some_and(|a| a.outcome.is_ok()));
    }

    #[test]
    fn test_search_in_empty_path() {
        let fs = MockFs::new();
        let policy = SuffixPolicy::None;

        let attempts = ExecutableSearcher::new(&fs, &policy).search_dirs("git", &[]);

        assert!(attempts.is_empty());
    }
}
