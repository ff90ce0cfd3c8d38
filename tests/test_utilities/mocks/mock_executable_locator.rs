use cyclonedx_sbom_task::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;

/// Mock ExecutableLocator backed by a fixed name -> path table
#[derive(Default)]
pub struct MockExecutableLocator {
    known: HashMap<String, PathBuf>,
}

impl MockExecutableLocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_executable(mut self, name: &str, path: &str) -> Self {
        self.known.insert(name.to_string(), PathBuf::from(path));
        self
    }
}

impl ExecutableLocator for MockExecutableLocator {
    fn locate(&self, name: &str, _search_path: &SearchPath) -> Option<PathBuf> {
        self.known.get(name).cloned()
    }
}
