use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Ordered list of directories searched for executables.
///
/// The task never mutates its own `PATH`. Provisioning returns a new
/// `SearchPath` which is handed to the resolver and passed as `PATH` to every
/// spawned subprocess.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPath {
    entries: Vec<PathBuf>,
}

impl SearchPath {
    pub fn new(entries: Vec<PathBuf>) -> Self {
        Self { entries }
    }

    /// Splits a `PATH`-style value using the platform separator.
    ///
    /// Empty entries are kept: on Unix they stand for the current directory,
    /// and spawned processes must see the `PATH` they would have inherited.
    pub fn parse(value: &OsStr) -> Self {
        Self::new(env::split_paths(value).collect())
    }

    /// Reads the current process `PATH` (empty when unset).
    pub fn from_env() -> Self {
        env::var_os("PATH")
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    /// Returns a copy with `dir` moved to the front.
    pub fn prepend(&self, dir: &Path) -> Self {
        let mut entries = Vec::with_capacity(self.entries.len() + 1);
        entries.push(dir.to_path_buf());
        entries.extend(self.entries.iter().filter(|e| e.as_path() != dir).cloned());
        Self { entries }
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Joins the entries back into a `PATH` value.
    pub fn to_os_string(&self) -> OsString {
        // join_paths only fails on entries containing the separator itself
        let joinable = self.entries.iter().filter(|e| {
            let ok = env::join_paths([e]).is_ok();
            if !ok {
                log::debug!("Dropping search path entry {}", e.display());
            }
            ok
        });
        env::join_paths(joinable).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepend_puts_dir_first() {
        let path = SearchPath::new(vec![PathBuf::from("/usr/bin"), PathBuf::from("/bin")]);
        let updated = path.prepend(Path::new("/home/u/.dotnet/tools"));
        assert_eq!(
            updated.entries(),
            &[
                PathBuf::from("/home/u/.dotnet/tools"),
                PathBuf::from("/usr/bin"),
                PathBuf::from("/bin"),
            ]
        );
    }

    #[test]
    fn test_prepend_does_not_mutate_original() {
        let path = SearchPath::new(vec![PathBuf::from("/usr/bin")]);
        let _ = path.prepend(Path::new("/opt/tools"));
        assert_eq!(path.entries(), &[PathBuf::from("/usr/bin")]);
    }

    #[test]
    fn test_prepend_moves_existing_entry() {
        let path = SearchPath::new(vec![PathBuf::from("/usr/bin"), PathBuf::from("/opt/tools")]);
        let updated = path.prepend(Path::new("/opt/tools"));
        assert_eq!(
            updated.entries(),
            &[PathBuf::from("/opt/tools"), PathBuf::from("/usr/bin")]
        );
    }

    #[test]
    fn test_parse_and_join() {
        let joined = env::join_paths(["/a", "/b"]).unwrap();
        let path = SearchPath::parse(&joined);
        assert_eq!(path.entries(), &[PathBuf::from("/a"), PathBuf::from("/b")]);
        assert_eq!(path.to_os_string(), joined);
    }

    #[test]
    fn test_parse_keeps_empty_entries() {
        let joined = env::join_paths(["/a", "", "/b"]).unwrap();
        let path = SearchPath::parse(&joined);
        assert_eq!(
            path.entries(),
            &[PathBuf::from("/a"), PathBuf::new(), PathBuf::from("/b")]
        );
        assert_eq!(path.to_os_string(), joined);
    }

    #[test]
    fn test_prepend_keeps_empty_entries() {
        let joined = env::join_paths(["", "/usr/bin"]).unwrap();
        let updated = SearchPath::parse(&joined).prepend(Path::new("/opt/tools"));
        assert_eq!(
            updated.to_os_string(),
            env::join_paths(["/opt/tools", "", "/usr/bin"]).unwrap()
        );
    }

    #[test]
    fn test_default_is_empty() {
        assert!(SearchPath::default().is_empty());
    }
}
