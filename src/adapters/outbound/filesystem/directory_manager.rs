use crate::ports::outbound::DirectoryManager;
use crate::shared::error::SbomTaskError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemDirectoryManager adapter backed by std::fs
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemDirectoryManager;

impl FileSystemDirectoryManager {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryManager for FileSystemDirectoryManager {
    fn is_directory(&self, dir: &Path) -> bool {
        dir.is_dir()
    }

    fn ensure_directory(&self, dir: &Path) -> Result<()> {
        if dir.is_dir() {
            return Ok(());
        }
        log::debug!("Creating output directory {}", dir.display());
        fs::create_dir_all(dir).map_err(|e| SbomTaskError::OutputDirectory {
            path: dir.to_path_buf(),
            details: e.to_string(),
        })?;
        Ok(())
    }
}
