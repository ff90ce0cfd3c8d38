use crate::sbom_generation::domain::SearchPath;
use std::path::PathBuf;

/// ExecutableLocator port for looking up executables on a search path
///
/// This abstracts the host's `which`-style lookup so binary resolution can be
/// tested without touching the real file system.
pub trait ExecutableLocator {
    /// Finds `name` in the directories of `search_path`.
    ///
    /// # Returns
    /// The full path of the first match, or `None` when nothing matches.
    /// Lookup problems (unreadable directories, etc.) are treated as misses.
    fn locate(&self, name: &str, search_path: &SearchPath) -> Option<PathBuf>;
}
