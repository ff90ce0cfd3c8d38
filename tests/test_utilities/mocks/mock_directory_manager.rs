use cyclonedx_sbom_task::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock DirectoryManager with an in-memory set of existing directories
#[derive(Clone, Default)]
pub struct MockDirectoryManager {
    existing: Arc<Mutex<HashSet<PathBuf>>>,
    ensured: Arc<Mutex<Vec<PathBuf>>>,
    should_fail: bool,
}

impl MockDirectoryManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(self, dir: &str) -> Self {
        self.existing.lock().unwrap().insert(PathBuf::from(dir));
        self
    }

    /// Every `ensure_directory` call fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn ensured(&self) -> Vec<PathBuf> {
        self.ensured.lock().unwrap().clone()
    }
}

impl DirectoryManager for MockDirectoryManager {
    fn is_directory(&self, dir: &Path) -> bool {
        self.existing.lock().unwrap().contains(dir)
    }

    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        if self.should_fail {
            return Err(SbomTaskError::OutputDirectory {
                path: dir.to_path_buf(),
                details: "permission denied".to_string(),
            }
            .into());
        }
        self.ensured.lock().unwrap().push(dir.to_path_buf());
        self.existing.lock().unwrap().insert(dir.to_path_buf());
        Ok(())
    }
}
