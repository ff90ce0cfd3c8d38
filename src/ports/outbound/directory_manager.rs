use crate::shared::Result;
use std::path::Path;

/// DirectoryManager port for the file system side effects of a run
pub trait DirectoryManager {
    /// Returns true if `dir` exists and is a directory
    fn is_directory(&self, dir: &Path) -> bool;

    /// Creates `dir` and any missing parents. Safe to repeat.
    ///
    /// # Errors
    /// Returns `OutputDirectory` if the directory cannot be created.
    fn ensure_directory(&self, dir: &Path) -> Result<()>;
}
