use crate::ports::outbound::{DirectoryManager, PipelineReporter, ProcessRunner};
use crate::sbom_generation::domain::{SearchPath, ToolInvocation};
use std::path::{Path, PathBuf};

/// Package manager driving global tool installs
pub const PACKAGE_MANAGER: &str = "dotnet";

/// NuGet package id of the CycloneDX global tool
pub const TOOL_PACKAGE: &str = "CycloneDX";

/// How provisioning ended. Only informational: the final invocation's exit
/// code is the definitive signal either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisioningOutcome {
    Updated,
    Installed,
    Unavailable,
}

/// ToolProvisioner - makes sure a CycloneDX global tool is present
///
/// Tries `dotnet tool update --global` first, which covers the common case of
/// an existing install, and falls back to `dotnet tool install --global`. No
/// "is it installed?" query is made; a failed update is the signal.
pub struct ToolProvisioner<'a, P, D, R> {
    runner: &'a P,
    directories: &'a D,
    reporter: &'a R,
}

impl<'a, P, D, R> ToolProvisioner<'a, P, D, R>
where
    P: ProcessRunner,
    D: DirectoryManager,
    R: PipelineReporter,
{
    pub fn new(runner: &'a P, directories: &'a D, reporter: &'a R) -> Self {
        Self {
            runner,
            directories,
            reporter,
        }
    }

    /// Returns `search_path` with the tools directory in front, if it exists.
    pub fn prepare_search_path(
        &self,
        tools_dir: Option<&Path>,
        search_path: &SearchPath,
    ) -> SearchPath {
        let Some(tools_dir) = tools_dir else {
            self.reporter
                .debug("No HOME/USERPROFILE detected; skipping dotnet tools PATH prepend.");
            return search_path.clone();
        };

        if self.directories.is_directory(tools_dir) {
            self.reporter.path_prepended(tools_dir);
            search_path.prepend(tools_dir)
        } else {
            self.reporter.debug(&format!(
                "Dotnet tools dir not found at {}; relying on agent PATH.",
                tools_dir.display()
            ));
            search_path.clone()
        }
    }

    /// Update, then install on failure. Never fails; problems become warnings.
    pub async fn provision(
        &self,
        version: Option<&str>,
        search_path: &SearchPath,
    ) -> ProvisioningOutcome {
        let version = version.map(str::trim).filter(|v| !v.is_empty());

        match self.run_tool_command("update", version, search_path).await {
            Ok(()) => return ProvisioningOutcome::Updated,
            Err(reason) => self.reporter.warning(&format!(
                "dotnet tool update failed ({}); trying install...",
                reason
            )),
        }

        match self.run_tool_command("install", version, search_path).await {
            Ok(()) => ProvisioningOutcome::Installed,
            Err(reason) => {
                self.reporter.warning(&format!(
                    "dotnet tool install failed ({}); continuing with any CycloneDX already on PATH.",
                    reason
                ));
                ProvisioningOutcome::Unavailable
            }
        }
    }

    async fn run_tool_command(
        &self,
        verb: &str,
        version: Option<&str>,
        search_path: &SearchPath,
    ) -> std::result::Result<(), String> {
        let invocation = ToolInvocation::new(PACKAGE_MANAGER, tool_command_args(verb, version));
        self.reporter.debug(&format!("Running: {}", invocation));

        match self.runner.run(&invocation, search_path).await {
            Ok(0) => Ok(()),
            Ok(code) => Err(format!("exit code {}", code)),
            Err(e) => Err(format!("{:#}", e)),
        }
    }
}

/// Per-user global tool directory for a home directory
pub fn dotnet_tools_dir(home: &Path) -> PathBuf {
    home.join(".dotnet").join("tools")
}

/// `tool <verb> --global CycloneDX [--version <v>]`
pub fn tool_command_args(verb: &str, version: Option<&str>) -> Vec<String> {
    let mut args = vec![
        "tool".to_string(),
        verb.to_string(),
        "--global".to_string(),
        TOOL_PACKAGE.to_string(),
    ];
    if let Some(version) = version {
        args.push("--version".to_string());
        args.push(version.to_string());
    }
    args
}
