use crate::ports::outbound::ExecutableLocator;
use crate::sbom_generation::domain::SearchPath;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions tried on Windows when PATHEXT is unset
#[cfg(windows)]
const DEFAULT_PATHEXT: &str = ".COM;.EXE;.BAT;.CMD";

/// PathExecutableLocator adapter - a `which`-style lookup over a SearchPath
///
/// On Windows each name is also tried with every PATHEXT extension. On Unix
/// only files with an executable bit count.
#[derive(Debug, Clone)]
pub struct PathExecutableLocator {
    extensions: Vec<String>,
}

impl PathExecutableLocator {
    pub fn new() -> Self {
        Self {
            extensions: platform_extensions(),
        }
    }

    fn candidates(&self, dir: &Path, name: &str) -> Vec<PathBuf> {
        let mut candidates = vec![dir.join(name)];
        candidates.extend(
            self.extensions
                .iter()
                .map(|ext| dir.join(format!("{}{}", name, ext))),
        );
        candidates
    }
}

impl Default for PathExecutableLocator {
    fn default() -> Self {
        Self::new()
    }
}

impl ExecutableLocator for PathExecutableLocator {
    fn locate(&self, name: &str, search_path: &SearchPath) -> Option<PathBuf> {
        search_path
            .entries()
            .iter()
            .flat_map(|dir| self.candidates(dir, name))
            .find(|candidate| {
                let found = is_executable(candidate);
                if found {
                    log::debug!("which {}: {}", name, candidate.display());
                }
                found
            })
    }
}

#[cfg(windows)]
fn platform_extensions() -> Vec<String> {
    std::env::var("PATHEXT")
        .unwrap_or_else(|_| DEFAULT_PATHEXT.to_string())
        .split(';')
        .filter(|ext| !ext.is_empty())
        .map(|ext| ext.to_string())
        .collect()
}

#[cfg(not(windows))]
fn platform_extensions() -> Vec<String> {
    Vec::new()
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}
