use crate::sbom_generation::domain::{SearchPath, TaskConfiguration};
use std::path::PathBuf;

/// SbomTaskRequest - everything one run of the task needs
///
/// The search path and tools directory are resolved from the environment at
/// the binary's edge and passed in explicitly, so the use case itself never
/// reads or mutates process environment.
#[derive(Debug, Clone)]
pub struct SbomTaskRequest {
    pub configuration: TaskConfiguration,
    /// Pinned CycloneDX tool version (`CYCLONEDX_DOTNET_VERSION`)
    pub tool_version: Option<String>,
    /// Search path the run starts from (normally the process `PATH`)
    pub search_path: SearchPath,
    /// Per-user dotnet global tools directory, if a home directory is known
    pub dotnet_tools_dir: Option<PathBuf>,
    /// Skip the update/install step
    pub skip_install: bool,
    /// Resolve and build the invocation but do not run anything
    pub dry_run: bool,
}

impl SbomTaskRequest {
    pub fn new(configuration: TaskConfiguration, search_path: SearchPath) -> Self {
        Self {
            configuration,
            tool_version: None,
            search_path,
            dotnet_tools_dir: None,
            skip_install: false,
            dry_run: false,
        }
    }

    pub fn with_tool_version(mut self, version: Option<String>) -> Self {
        self.tool_version = version;
        self
    }

    pub fn with_dotnet_tools_dir(mut self, dir: Option<PathBuf>) -> Self {
        self.dotnet_tools_dir = dir;
        self
    }

    pub fn with_skip_install(mut self, skip_install: bool) -> Self {
        self.skip_install = skip_install;
        self
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
